// Connection cost table: (left id, right id) -> cost.

use std::io::BufRead;

use hashbrown::HashMap;
use tracing::{debug, warn};

use crate::records::{field, for_each_line, number};
use crate::{LoadError, LoadSummary, RecordError};

/// Pack an id pair into a single map key.
///
/// Load and lookup both go through this function with the same argument
/// order, so a row `l r c` is found by `cost(l, r)`.
#[inline]
pub fn encode_key(left: u16, right: u16) -> u32 {
    (u32::from(left) << 16) | u32::from(right)
}

/// Layout of a cost table source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostTableFormat {
    /// Field separator byte.
    pub delimiter: u8,
}

impl Default for CostTableFormat {
    fn default() -> Self {
        Self { delimiter: b' ' }
    }
}

/// Pairwise connection costs between grammatical ids.
///
/// The source is a header line carrying the left and right table sizes,
/// followed by `left right cost` rows. Costs are signed: matrix files use
/// negative values for favoured connections. Unknown pairs cost 0.
#[derive(Debug, Clone, Default)]
pub struct ConnectionCosts {
    costs: HashMap<u32, i32>,
    dimensions: Option<(u32, u32)>,
}

impl ConnectionCosts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cost of connecting `left` to `right`, or 0 if the pair is unknown.
    #[inline]
    pub fn cost(&self, left: u16, right: u16) -> i32 {
        self.costs.get(&encode_key(left, right)).copied().unwrap_or(0)
    }

    pub(crate) fn insert(&mut self, left: u16, right: u16, cost: i32) {
        self.costs.insert(encode_key(left, right), cost);
    }

    /// Left and right table sizes from the header, if it parsed.
    ///
    /// Recorded only; the row count is not checked against them.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.dimensions
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Replace the table with the contents of `reader`.
    ///
    /// Malformed rows are skipped and counted. The new table is built
    /// separately and only swapped in once the whole source was read, so a
    /// read failure leaves the previous contents in place.
    pub fn load<R: BufRead>(
        &mut self,
        reader: R,
        format: &CostTableFormat,
    ) -> Result<LoadSummary, LoadError> {
        let mut table = ConnectionCosts::new();
        let mut summary = LoadSummary::default();

        for_each_line(reader, |line_no, line| {
            let fields = croco_core::split_delim(line, format.delimiter);
            if line_no == 1 {
                table.dimensions = parse_header(&fields);
                if table.dimensions.is_none() {
                    warn!(line = line_no, "unreadable cost table header");
                }
                return;
            }
            if line.trim_ascii().is_empty() {
                return;
            }
            match parse_row(&fields) {
                Ok((left, right, cost)) => {
                    table.insert(left, right, cost);
                    summary.loaded += 1;
                }
                Err(err) => {
                    warn!(line = line_no, error = %err, "skipping cost record");
                    summary.skipped += 1;
                }
            }
        })?;

        debug!(
            pairs = table.len(),
            loaded = summary.loaded,
            skipped = summary.skipped,
            dimensions = ?table.dimensions,
            "loaded connection costs"
        );
        *self = table;
        Ok(summary)
    }
}

fn parse_header(fields: &[&[u8]]) -> Option<(u32, u32)> {
    let left = number(field(fields, 0, "left size").ok()?, "left size").ok()?;
    let right = number(field(fields, 1, "right size").ok()?, "right size").ok()?;
    Some((left, right))
}

fn parse_row(fields: &[&[u8]]) -> Result<(u16, u16, i32), RecordError> {
    let left = number(field(fields, 0, "left id")?, "left id")?;
    let right = number(field(fields, 1, "right id")?, "right id")?;
    let cost = number(field(fields, 2, "cost")?, "cost")?;
    Ok((left, right, cost))
}
