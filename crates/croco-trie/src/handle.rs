// CrocoHandle: owns a dictionary trie and a connection cost table.
//
// Design notes:
// - Loading and querying are separate phases. All load methods take
//   `&mut self`, all queries take `&self`, so the borrow checker keeps a
//   load from overlapping with queries on the same handle.
// - Options are stored on the handle and applied on each call.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::cost::{ConnectionCosts, CostTableFormat};
use crate::dictionary::DictionaryColumns;
use crate::search::{Match, ResultOrder, SearchOptions};
use crate::trie::Trie;
use crate::{LoadError, LoadSummary};

/// Top-level handle for dictionary loading and lookups.
#[derive(Debug, Clone, Default)]
pub struct CrocoHandle {
    trie: Trie,
    costs: ConnectionCosts,

    // -- Options --
    columns: DictionaryColumns,
    cost_format: CostTableFormat,
    order: ResultOrder,
}

impl CrocoHandle {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Load dictionary records from a file into the trie.
    ///
    /// Records are added to whatever is already loaded; see
    /// [`clear_dictionary`](Self::clear_dictionary).
    pub fn load_dictionary(&mut self, path: impl AsRef<Path>) -> Result<LoadSummary, LoadError> {
        let reader = open(path.as_ref())?;
        self.load_dictionary_from(reader)
    }

    pub fn load_dictionary_from<R: BufRead>(
        &mut self,
        reader: R,
    ) -> Result<LoadSummary, LoadError> {
        self.trie.load_dictionary(reader, &self.columns)
    }

    /// Replace the connection cost table with the contents of a file.
    pub fn load_cost_table(&mut self, path: impl AsRef<Path>) -> Result<LoadSummary, LoadError> {
        let reader = open(path.as_ref())?;
        self.load_cost_table_from(reader)
    }

    pub fn load_cost_table_from<R: BufRead>(
        &mut self,
        reader: R,
    ) -> Result<LoadSummary, LoadError> {
        self.costs.load(reader, &self.cost_format)
    }

    /// Drop every dictionary entry.
    pub fn clear_dictionary(&mut self) {
        self.trie.clear();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Fuzzy search for words within `max_distance` edits of `query`.
    pub fn search(&self, query: &str, max_distance: u32) -> Vec<Match> {
        let options = SearchOptions {
            max_distance,
            order: self.order,
        };
        self.trie.search_with(&self.costs, query, &options)
    }

    /// Exact lookup. Matches carry a score of 0.
    pub fn exact_match(&self, query: &str) -> Vec<Match> {
        self.trie.exact_match(query)
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn costs(&self) -> &ConnectionCosts {
        &self.costs
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set the dictionary column layout used by later loads.
    pub fn set_dictionary_columns(&mut self, columns: DictionaryColumns) {
        self.columns = columns;
    }

    /// Set the cost table layout used by later loads.
    pub fn set_cost_table_format(&mut self, format: CostTableFormat) {
        self.cost_format = format;
    }

    /// Set the sort direction of fuzzy search results.
    pub fn set_result_order(&mut self, order: ResultOrder) {
        self.order = order;
    }
}

fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })
}
