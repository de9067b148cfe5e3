// Fuzzy search: edit-distance bounded trie traversal with ranking.
//
// The traversal keeps one Levenshtein row per trie depth. A node's row is
// derived from its parent's row and the edge token, so every prefix shared
// by several dictionary words is aligned against the query only once.
// Subtrees are skipped as soon as every cell of a row exceeds the budget:
// extending the prefix can only keep or raise those values.

use std::cmp::Ordering;

use croco_core::{Token, split_str};
use tracing::debug;

use crate::arena::{Node, NodeId};
use crate::cost::ConnectionCosts;
use crate::trie::Trie;

/// Weight applied to `max_distance - priority` in the composite score.
pub const PRIORITY_WEIGHT: i64 = 5000;

/// Context id an entry is connected from when its connection cost is looked
/// up during ranking.
pub const BOS_CONTEXT_ID: u16 = 0;

/// Direction of the final sort on `(score, word)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultOrder {
    /// Highest score first.
    #[default]
    Descending,
    /// Lowest score first.
    Ascending,
}

/// Sort direction used when none is configured.
pub const RESULT_ORDER: ResultOrder = ResultOrder::Descending;

/// Fuzzy search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Largest edit distance a match may have.
    pub max_distance: u32,
    pub order: ResultOrder,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_distance: 2,
            order: RESULT_ORDER,
        }
    }
}

/// A dictionary word returned by a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Composite ranking score. Always 0 for exact matches.
    pub score: i64,
    /// Edit distance between the query and `word`.
    pub distance: u32,
    pub word: String,
}

/// Composite score of a fuzzy match.
///
/// `distance + connection + (max_distance - priority) * PRIORITY_WEIGHT`,
/// computed in signed arithmetic.
#[inline]
pub fn composite_score(distance: u32, connection: i32, max_distance: u32, priority: u32) -> i64 {
    i64::from(distance)
        + i64::from(connection)
        + (i64::from(max_distance) - i64::from(priority)) * PRIORITY_WEIGHT
}

/// Sort matches by `(score, word)` in the given direction.
pub fn sort_matches(matches: &mut [Match], order: ResultOrder) {
    let key = |a: &Match, b: &Match| -> Ordering {
        a.score.cmp(&b.score).then_with(|| a.word.cmp(&b.word))
    };
    match order {
        ResultOrder::Ascending => matches.sort_by(key),
        ResultOrder::Descending => matches.sort_by(|a, b| key(b, a)),
    }
}

/// Compute the row for `token` from the parent row.
///
/// `row[0]` is one more than the parent's first cell (one extra trie token to
/// delete); every other cell takes the cheapest of insertion, deletion and
/// substitution (free when the tokens are equal).
#[inline]
fn next_row(parent: &[u32], row: &mut [u32], query: &[Token], token: &Token) {
    row[0] = parent[0] + 1;
    for (i, q) in query.iter().enumerate() {
        let insert_or_delete = (row[i] + 1).min(parent[i + 1] + 1);
        let replace = if q == token { parent[i] } else { parent[i] + 1 };
        row[i + 1] = insert_or_delete.min(replace);
    }
}

impl Trie {
    /// Fuzzy search with the default result order.
    pub fn search(&self, costs: &ConnectionCosts, query: &str, max_distance: u32) -> Vec<Match> {
        self.search_with(
            costs,
            query,
            &SearchOptions {
                max_distance,
                ..SearchOptions::default()
            },
        )
    }

    /// Find every entry within `options.max_distance` edits of `query`.
    ///
    /// Each match is scored with [`composite_score`] using the connection
    /// cost from [`BOS_CONTEXT_ID`] to the entry's left id, then the list is
    /// sorted in `options.order`. The traversal uses an explicit stack, so
    /// deep dictionaries cannot overflow the call stack.
    pub fn search_with(
        &self,
        costs: &ConnectionCosts,
        query: &str,
        options: &SearchOptions,
    ) -> Vec<Match> {
        let query = split_str(query);
        let width = query.len() + 1;
        let max_distance = options.max_distance;

        // rows[d] holds the row of the node most recently visited at depth d.
        // A node's siblings are popped before any shallower node, so the
        // parent row at rows[d - 1] is still in place when they are visited.
        let mut rows: Vec<Vec<u32>> = vec![(0..width as u32).collect()];
        let mut stack: Vec<(&Token, NodeId, usize)> = self
            .children_of(self.root())
            .map(|(token, id)| (token, id, 1))
            .collect();
        let mut matches = Vec::new();
        let mut visited = 0usize;

        while let Some((token, id, depth)) = stack.pop() {
            visited += 1;
            if rows.len() == depth {
                rows.push(vec![0; width]);
            }
            let (done, rest) = rows.split_at_mut(depth);
            let row = &mut rest[0];
            next_row(&done[depth - 1], row, &query, token);

            let node = self.node(id);
            let distance = row[width - 1];
            if distance <= max_distance && node.is_terminal() {
                matches.push(scored_match(node, distance, costs, max_distance));
            }

            if row.iter().any(|&cell| cell <= max_distance) {
                let depth = depth + 1;
                stack.extend(node.children().map(|(token, child)| (token, child, depth)));
            }
        }

        sort_matches(&mut matches, options.order);
        debug!(
            query_len = query.len(),
            max_distance,
            visited,
            matches = matches.len(),
            "fuzzy search finished"
        );
        matches
    }
}

fn scored_match(node: &Node, distance: u32, costs: &ConnectionCosts, max_distance: u32) -> Match {
    let connection = costs.cost(BOS_CONTEXT_ID, node.left_id());
    Match {
        score: composite_score(distance, connection, max_distance, node.priority()),
        distance,
        word: node.word().to_string(),
    }
}
