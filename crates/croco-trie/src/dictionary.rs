// Dictionary records: parsing and bulk loading into the trie.

use std::io::BufRead;

use croco_core::{Token, split_chars, split_delim};
use tracing::{debug, warn};

use crate::records::{field, for_each_line, number};
use crate::trie::Trie;
use crate::{LoadError, LoadSummary, RecordError};

/// Column layout of a dictionary source.
///
/// The default layout is `reading, left id, right id, priority, surface`,
/// tab separated. Columns not named here (the reading) are never parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryColumns {
    pub left_id: usize,
    pub right_id: usize,
    pub priority: usize,
    pub surface: usize,
    pub delimiter: u8,
}

impl Default for DictionaryColumns {
    fn default() -> Self {
        Self {
            left_id: 1,
            right_id: 2,
            priority: 3,
            surface: 4,
            delimiter: b'\t',
        }
    }
}

/// One parsed dictionary line, ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryRecord {
    pub word: String,
    pub tokens: Vec<Token>,
    pub left_id: u16,
    pub right_id: u16,
    pub priority: u32,
}

impl DictionaryRecord {
    /// Parse a single line according to `columns`.
    pub fn parse(line: &[u8], columns: &DictionaryColumns) -> Result<Self, RecordError> {
        let fields = split_delim(line, columns.delimiter);
        let left_id = number(field(&fields, columns.left_id, "left id")?, "left id")?;
        let right_id = number(field(&fields, columns.right_id, "right id")?, "right id")?;
        let priority = number(field(&fields, columns.priority, "priority")?, "priority")?;
        let surface = field(&fields, columns.surface, "surface")?;
        if surface.is_empty() {
            return Err(RecordError::EmptySurface);
        }

        let tokens = split_chars(surface)?;
        // split_chars accepted every byte, so the surface is valid text.
        let word = tokens.iter().map(Token::as_str).collect();
        Ok(Self {
            word,
            tokens,
            left_id,
            right_id,
            priority,
        })
    }
}

impl Trie {
    /// Insert every record of `reader` into the trie.
    ///
    /// Loading is incremental: records are added on top of whatever the trie
    /// already holds, and a later record for the same surface form
    /// overwrites the earlier one. Call [`Trie::clear`] first for a fresh
    /// build. Malformed lines are skipped and counted; blank lines are
    /// ignored.
    pub fn load_dictionary<R: BufRead>(
        &mut self,
        reader: R,
        columns: &DictionaryColumns,
    ) -> Result<LoadSummary, LoadError> {
        let mut summary = LoadSummary::default();

        for_each_line(reader, |line_no, line| {
            if line.trim_ascii().is_empty() {
                return;
            }
            match DictionaryRecord::parse(line, columns) {
                Ok(record) => {
                    self.insert_tokens(
                        record.tokens,
                        record.word,
                        record.left_id,
                        record.right_id,
                        record.priority,
                    );
                    summary.loaded += 1;
                }
                Err(err) => {
                    warn!(line = line_no, error = %err, "skipping dictionary record");
                    summary.skipped += 1;
                }
            }
        })?;

        debug!(
            entries = self.len(),
            nodes = self.node_count(),
            loaded = summary.loaded,
            skipped = summary.skipped,
            "loaded dictionary"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<DictionaryRecord, RecordError> {
        DictionaryRecord::parse(line.as_bytes(), &DictionaryColumns::default())
    }

    #[test]
    fn parse_default_columns() {
        let record = parse("\u{30CD}\u{30B3}\t1285\t1290\t5\t\u{732B}").unwrap();
        assert_eq!(record.word, "\u{732B}");
        assert_eq!(record.left_id, 1285);
        assert_eq!(record.right_id, 1290);
        assert_eq!(record.priority, 5);
        assert_eq!(record.tokens.len(), 1);
    }

    #[test]
    fn left_and_right_ids_come_from_their_own_columns() {
        let record = parse("cat\t1\t2\t3\tcat").unwrap();
        assert_eq!((record.left_id, record.right_id), (1, 2));
    }

    #[test]
    fn custom_columns() {
        let columns = DictionaryColumns {
            left_id: 2,
            right_id: 1,
            priority: 3,
            surface: 0,
            delimiter: b',',
        };
        let record = DictionaryRecord::parse(b"dog,20,10,7,DOG", &columns).unwrap();
        assert_eq!(record.word, "dog");
        assert_eq!((record.left_id, record.right_id, record.priority), (10, 20, 7));
    }

    #[test]
    fn reading_column_is_not_parsed() {
        // Anything goes in the leading column, including bytes that are not text.
        let line = b"\xFF\xFE\t1\t2\t3\tcat";
        let columns = DictionaryColumns::default();
        let record = DictionaryRecord::parse(line, &columns).unwrap();
        assert_eq!(record.word, "cat");
    }

    #[test]
    fn missing_surface_is_an_error() {
        assert_eq!(
            parse("cat\t1\t2\t3"),
            Err(RecordError::MissingField {
                field: "surface",
                index: 4
            })
        );
    }

    #[test]
    fn trailing_empty_surface_is_missing() {
        // The final empty field is dropped by the splitter.
        assert!(matches!(
            parse("cat\t1\t2\t3\t"),
            Err(RecordError::MissingField { field: "surface", .. })
        ));
    }

    #[test]
    fn empty_surface_in_the_middle_is_an_error() {
        let columns = DictionaryColumns {
            surface: 0,
            ..DictionaryColumns::default()
        };
        assert_eq!(
            DictionaryRecord::parse(b"\t1\t2\t3\tx", &columns),
            Err(RecordError::EmptySurface)
        );
    }

    #[test]
    fn non_numeric_id_is_an_error() {
        assert!(matches!(
            parse("cat\tone\t2\t3\tcat"),
            Err(RecordError::InvalidNumber { field: "left id", .. })
        ));
    }

    #[test]
    fn truncated_surface_is_an_error() {
        let mut line = b"x\t1\t2\t3\t".to_vec();
        line.extend_from_slice(&"\u{732B}".as_bytes()[..2]);
        assert!(matches!(
            DictionaryRecord::parse(&line, &DictionaryColumns::default()),
            Err(RecordError::Tokenize(_))
        ));
    }

    #[test]
    fn load_skips_bad_lines() {
        let src = "cat\t1\t2\t3\tcat\nbroken line\n\ncats\t1\t2\t3\tcats\n";
        let mut trie = Trie::new();
        let summary = trie
            .load_dictionary(src.as_bytes(), &DictionaryColumns::default())
            .unwrap();
        assert_eq!(summary, LoadSummary { loaded: 2, skipped: 1 });
        assert_eq!(trie.len(), 2);
        assert!(trie.find("cats").is_some());
    }

    #[test]
    fn second_load_layers_on_top() {
        let mut trie = Trie::new();
        let columns = DictionaryColumns::default();
        trie.load_dictionary("a\t1\t1\t1\tcat\n".as_bytes(), &columns).unwrap();
        trie.load_dictionary("a\t2\t2\t2\tdog\n".as_bytes(), &columns).unwrap();
        assert_eq!(trie.len(), 2);
        assert!(trie.find("cat").is_some_and(|id| trie.is_terminal(id)));
    }
}
