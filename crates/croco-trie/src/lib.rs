//! Dictionary trie with exact and edit-distance bounded fuzzy lookup.
//!
//! Dictionary entries are indexed character by character in a prefix tree
//! whose nodes live in an arena. Each entry carries a left and right
//! grammatical id and a priority. Fuzzy queries walk the tree while carrying
//! one Levenshtein row per depth, prune subtrees that can no longer come
//! within the distance budget, and rank matches by a score that blends edit
//! distance, connection cost and priority.
//!
//! # Architecture
//!
//! - [`arena`] -- Node storage with stable handles
//! - [`trie`] -- Prefix tree construction and navigation
//! - [`cost`] -- Connection cost table (`left right cost` matrix)
//! - [`dictionary`] -- Dictionary record parsing and bulk loading
//! - [`exact`] -- Exact match walk
//! - [`search`] -- Fuzzy search (pruned DFS with incremental DP rows)
//! - [`handle`] -- `CrocoHandle`, owning a trie and a cost table

pub mod arena;
pub mod cost;
pub mod dictionary;
pub mod exact;
pub mod handle;
mod records;
pub mod search;
pub mod trie;

use std::path::PathBuf;

pub use arena::{Node, NodeArena, NodeId};
pub use cost::{ConnectionCosts, CostTableFormat};
pub use dictionary::{DictionaryColumns, DictionaryRecord};
pub use handle::CrocoHandle;
pub use search::{Match, RESULT_ORDER, ResultOrder, SearchOptions};
pub use trie::{Entry, Trie};

/// Error for a single malformed record. Loaders skip such records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("missing {field} field (column {index})")]
    MissingField { field: &'static str, index: usize },
    #[error("invalid {field} value {value:?}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("surface form is empty")]
    EmptySurface,
    #[error("surface form is not valid text: {0}")]
    Tokenize(#[from] croco_core::TokenizeError),
}

/// Error that aborts a whole load.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source file could not be opened.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from an opened source failed part way.
    #[error("failed to read input: {0}")]
    Read(#[from] std::io::Error),
}

/// Outcome of a successful load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Records that reached the table or trie.
    pub loaded: usize,
    /// Malformed records that were skipped.
    pub skipped: usize,
}
