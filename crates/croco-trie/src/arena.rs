// Node arena: insertion-ordered storage for trie nodes.

use croco_core::Token;
use hashbrown::HashMap;

/// Stable handle to a node inside a [`NodeArena`].
///
/// Handles stay valid for as long as the arena is not cleared; growing the
/// arena never invalidates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node, created together with the arena.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of the node in insertion order.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single trie node.
///
/// `word` is empty for interior nodes; a non-empty `word` marks the node as
/// the end of a dictionary entry.
#[derive(Debug, Clone, Default)]
pub struct Node {
    pub(crate) word: String,
    pub(crate) left_id: u16,
    pub(crate) right_id: u16,
    pub(crate) priority: u32,
    pub(crate) children: HashMap<Token, NodeId>,
}

impl Node {
    /// Surface form of the entry ending here, or `""` for interior nodes.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Whether a dictionary entry ends at this node.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !self.word.is_empty()
    }

    pub fn left_id(&self) -> u16 {
        self.left_id
    }

    pub fn right_id(&self) -> u16 {
        self.right_id
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    /// Outgoing edges as `(label, child)` pairs, in no particular order.
    pub fn children(&self) -> impl Iterator<Item = (&Token, NodeId)> + '_ {
        self.children.iter().map(|(token, &id)| (token, id))
    }

    /// Child reached by the edge labelled `token`.
    #[inline]
    pub fn child(&self, token: &str) -> Option<NodeId> {
        self.children.get(token).copied()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// Owns every node of a trie.
///
/// Nodes are appended and never removed individually; the only way to drop
/// nodes is [`NodeArena::clear`], which resets the arena to a bare root.
#[derive(Debug, Clone)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    /// Create an arena holding only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Borrow a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued before the last [`clear`](Self::clear).
    #[inline]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Borrow a node, or `None` if `id` is out of range.
    #[inline]
    pub fn try_get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Follow the edge labelled `token` from `parent`, creating the child if
    /// the edge does not exist yet.
    pub(crate) fn child_or_insert(&mut self, parent: NodeId, token: Token) -> NodeId {
        if let Some(id) = self.nodes[parent.0].child(token.as_str()) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::default());
        self.nodes[parent.0].children.insert(token, id);
        id
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: the root exists for the whole lifetime of the arena.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every node except a fresh root.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(Node::default());
    }

    /// All nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_arena_has_bare_root() {
        let arena = NodeArena::new();
        assert_eq!(arena.len(), 1);
        assert!(!arena.is_empty());
        let root = arena.get(arena.root());
        assert!(!root.is_terminal());
        assert_eq!(root.child_count(), 0);
    }

    #[test]
    fn child_or_insert_creates_once() {
        let mut arena = NodeArena::new();
        let a = arena.child_or_insert(NodeId::ROOT, Token::from('a'));
        let again = arena.child_or_insert(NodeId::ROOT, Token::from('a'));
        assert_eq!(a, again);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(NodeId::ROOT).child("a"), Some(a));
    }

    #[test]
    fn handles_survive_growth() {
        let mut arena = NodeArena::new();
        let first = arena.child_or_insert(NodeId::ROOT, Token::from('x'));
        arena.get_mut(first).word = "x".to_string();
        let mut parent = first;
        for ch in "abcdefghijklmnopqrstuvwxyz".chars() {
            parent = arena.child_or_insert(parent, Token::from(ch));
        }
        assert_eq!(arena.get(first).word(), "x");
        assert_eq!(arena.len(), 28);
    }

    #[test]
    fn ids_follow_insertion_order() {
        let mut arena = NodeArena::new();
        let a = arena.child_or_insert(NodeId::ROOT, Token::from('a'));
        let b = arena.child_or_insert(NodeId::ROOT, Token::from('b'));
        assert_eq!(a.index(), 1);
        assert_eq!(b.index(), 2);
        let order: Vec<usize> = arena.iter().map(|(id, _)| id.index()).collect();
        assert_eq!(order, [0, 1, 2]);
    }

    #[test]
    fn clear_resets_to_root() {
        let mut arena = NodeArena::new();
        arena.child_or_insert(NodeId::ROOT, Token::from('a'));
        arena.clear();
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.get(NodeId::ROOT).child("a"), None);
    }

    #[test]
    fn try_get_checks_range() {
        let mut arena = NodeArena::new();
        let a = arena.child_or_insert(NodeId::ROOT, Token::from('a'));
        assert!(arena.try_get(a).is_some());
        arena.clear();
        assert!(arena.try_get(a).is_none());
        assert!(arena.try_get(NodeId::ROOT).is_some());
    }
}
