//! Shared leaf types for the croco fuzzy matcher.
//!
//! This crate holds the pieces every other layer agrees on: the [`Token`]
//! edge label and the tokenizers that produce tokens from raw dictionary
//! bytes, query strings and delimited records.
//!
//! # Architecture
//!
//! - [`token`] -- The `Token` value type (one encoded character)
//! - [`tokenizer`] -- Character splitting (byte-level and `&str`) and
//!   delimiter-based field splitting

pub mod token;
pub mod tokenizer;

pub use token::Token;
pub use tokenizer::{TokenizeError, encoded_width, split_chars, split_delim, split_str};
