//! Lexical analysis of regex sources.
//!
//! This module contains the two scanners the regex compiler runs before
//! building its syntax tree:
//!
//! - Escape resolution, turning `\x41`, `\u00E9`, `\n`, `\cJ`, ... into
//!   the characters they denote
//! - Character class tokenization, turning the body of `[...]` into ranges,
//!   single characters and shorthand sets
//! - Pluggable providers for the shorthand sets (`\w`, `\d`, `\s`, ...)

pub mod escapes;
pub mod lexer;
pub mod sets;
pub mod tokens;
