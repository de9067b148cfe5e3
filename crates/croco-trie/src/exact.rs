// Exact match: follow the query through the trie one character at a time.

use croco_core::split_str;

use crate::search::Match;
use crate::trie::Trie;

impl Trie {
    /// Look up `query` by walking existing edges only.
    ///
    /// The walk stops when the query is used up or the next character has no
    /// edge. The word stored at the node where it stops is reported (score 0)
    /// if that node is terminal; otherwise the result is empty. A query that
    /// extends a stored word with characters that have no edge stops on that
    /// word and reports it.
    pub fn exact_match(&self, query: &str) -> Vec<Match> {
        let mut id = self.root();
        for token in split_str(query) {
            match self.node(id).child(token.as_str()) {
                Some(child) => id = child,
                None => break,
            }
        }

        let node = self.node(id);
        if node.is_terminal() {
            vec![Match {
                score: 0,
                distance: 0,
                word: node.word().to_string(),
            }]
        } else {
            Vec::new()
        }
    }
}
