// Tokenizers: multi-byte aware character splitting and delimiter splitting.

use crate::token::Token;

/// Error returned when raw bytes cannot be split into characters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenizeError {
    #[error("invalid lead byte 0x{byte:02X} at offset {offset}")]
    InvalidLeadByte { offset: usize, byte: u8 },
    #[error("truncated sequence at offset {offset}: expected {expected} bytes, {available} available")]
    Truncated {
        offset: usize,
        expected: usize,
        available: usize,
    },
    #[error("invalid encoded sequence at offset {offset}")]
    InvalidSequence { offset: usize },
}

/// Number of bytes in the encoded character introduced by `lead`.
///
/// Returns `None` for bytes that cannot start a character (continuation
/// bytes `0x80..=0xBF` and `0xF8..=0xFF`).
#[inline]
pub fn encoded_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        _ => None,
    }
}

/// Split raw bytes into one token per encoded character.
///
/// The width of each character is taken from its lead byte. Space and
/// newline are ordinary one-byte tokens. A sequence cut short by the end of
/// the input, or one whose bytes are not a valid character, is reported as
/// an error instead of being read past.
pub fn split_chars(input: &[u8]) -> Result<Vec<Token>, TokenizeError> {
    let mut tokens = Vec::with_capacity(input.len());
    let mut offset = 0;
    while offset < input.len() {
        let lead = input[offset];
        let width = encoded_width(lead)
            .ok_or(TokenizeError::InvalidLeadByte { offset, byte: lead })?;
        let available = input.len() - offset;
        if width > available {
            return Err(TokenizeError::Truncated {
                offset,
                expected: width,
                available,
            });
        }
        let text = std::str::from_utf8(&input[offset..offset + width])
            .map_err(|_| TokenizeError::InvalidSequence { offset })?;
        // `text` holds exactly one scalar value: the width came from its lead byte.
        let ch = text
            .chars()
            .next()
            .ok_or(TokenizeError::InvalidSequence { offset })?;
        tokens.push(Token::from_char(ch));
        offset += width;
    }
    Ok(tokens)
}

/// Split an already-validated string into one token per character.
///
/// Equivalent to `split_chars(input.as_bytes())` but infallible.
pub fn split_str(input: &str) -> Vec<Token> {
    input.chars().map(Token::from_char).collect()
}

/// Split `input` on every occurrence of `delim`.
///
/// Fields are not trimmed and empty interior fields are kept. A final empty
/// field (input ending with the delimiter, or empty input) is dropped.
pub fn split_delim(input: &[u8], delim: u8) -> Vec<&[u8]> {
    let mut fields: Vec<&[u8]> = input.split(|&b| b == delim).collect();
    if fields.last().is_some_and(|last| last.is_empty()) {
        fields.pop();
    }
    fields
}
