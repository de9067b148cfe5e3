// Token: the atomic unit of comparison for trie edges and DP alignment.

use std::borrow::Borrow;
use std::fmt;

/// One encoded character of a dictionary word or query.
///
/// Tokens are immutable and compared by value. A token always holds exactly
/// one Unicode scalar value; the tokenizer guarantees this for both the byte
/// level and the `&str` entry points.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token(Box<str>);

impl Token {
    /// Create a token from a single character.
    pub fn from_char(ch: char) -> Self {
        let mut buf = [0u8; 4];
        Self(Box::from(&*ch.encode_utf8(&mut buf)))
    }

    /// The token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The token's encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Width of the token in bytes (1 to 4).
    pub fn width(&self) -> usize {
        self.0.len()
    }
}

impl From<char> for Token {
    fn from(ch: char) -> Self {
        Self::from_char(ch)
    }
}

// Lets `HashMap<Token, _>` be probed with a plain `&str`.
impl Borrow<str> for Token {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
