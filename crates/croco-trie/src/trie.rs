// Dictionary trie keyed by character tokens.

use croco_core::{Token, split_str};

use crate::arena::{Node, NodeArena, NodeId};

/// Read-only view of a stored dictionary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub word: &'a str,
    pub left_id: u16,
    pub right_id: u16,
    pub priority: u32,
}

/// Prefix tree over dictionary words.
///
/// Built once by a sequence of [`insert`](Trie::insert) calls (usually via
/// [`Trie::load_dictionary`]) and then queried any number of times through
/// [`Trie::exact_match`] and [`Trie::search`]. The root is never terminal.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    arena: NodeArena,
    entries: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `word`, creating missing nodes along its character path.
    ///
    /// Inserting the same surface form again overwrites the ids and priority
    /// of the existing entry. An empty `word` has no path of its own and is
    /// ignored (`None` is returned).
    pub fn insert(
        &mut self,
        word: &str,
        left_id: u16,
        right_id: u16,
        priority: u32,
    ) -> Option<NodeId> {
        self.insert_tokens(split_str(word), word.to_string(), left_id, right_id, priority)
    }

    /// Insert a word whose tokens have already been computed.
    pub(crate) fn insert_tokens(
        &mut self,
        tokens: impl IntoIterator<Item = Token>,
        word: String,
        left_id: u16,
        right_id: u16,
        priority: u32,
    ) -> Option<NodeId> {
        if word.is_empty() {
            return None;
        }
        let mut node = self.arena.root();
        for token in tokens {
            node = self.arena.child_or_insert(node, token);
        }
        if node == self.arena.root() {
            return None;
        }

        let terminal = self.arena.get_mut(node);
        if !terminal.is_terminal() {
            self.entries += 1;
        }
        terminal.word = word;
        terminal.left_id = left_id;
        terminal.right_id = right_id;
        terminal.priority = priority;
        Some(node)
    }

    pub fn root(&self) -> NodeId {
        self.arena.root()
    }

    /// Borrow the node at `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range, as an id issued before the last
    /// [`clear`](Self::clear) can be.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        self.arena.get(id)
    }

    /// Outgoing edges of `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range, as an id issued before the last
    /// [`clear`](Self::clear) can be.
    pub fn children_of(&self, id: NodeId) -> impl Iterator<Item = (&Token, NodeId)> + '_ {
        self.arena.get(id).children()
    }

    /// Whether a word ends at `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range, as an id issued before the last
    /// [`clear`](Self::clear) can be.
    pub fn is_terminal(&self, id: NodeId) -> bool {
        self.arena.get(id).is_terminal()
    }

    /// Stored word at `id`; empty for interior nodes.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range, as an id issued before the last
    /// [`clear`](Self::clear) can be.
    pub fn word_of(&self, id: NodeId) -> &str {
        self.arena.get(id).word()
    }

    /// Entry stored at `id`, if the node exists and is terminal.
    pub fn entry(&self, id: NodeId) -> Option<Entry<'_>> {
        let node = self.arena.try_get(id)?;
        node.is_terminal().then(|| Entry {
            word: node.word(),
            left_id: node.left_id(),
            right_id: node.right_id(),
            priority: node.priority(),
        })
    }

    /// Node reached by following `word` character by character from the root.
    pub fn find(&self, word: &str) -> Option<NodeId> {
        let mut node = self.arena.root();
        for token in split_str(word) {
            node = self.arena.get(node).child(token.as_str())?;
        }
        Some(node)
    }

    /// Number of stored entries (terminal nodes).
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Remove every entry, leaving only the root.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.entries = 0;
    }

    /// Iterate over all stored entries in node creation order.
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> + '_ {
        self.arena
            .iter()
            .filter(|(_, node)| node.is_terminal())
            .map(|(_, node)| Entry {
                word: node.word(),
                left_id: node.left_id(),
                right_id: node.right_id(),
                priority: node.priority(),
            })
    }
}
