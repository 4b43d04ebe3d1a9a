//! Error types and error handling for the class lexer.
//!
//! This module defines the single failure the lexer can report:
//!
//! - A malformed pattern, carrying the full regex source and a reason
//! - The position of the offending character class, when known
//! - Error formatting and display functionality
//! - Helpful suggestions for fixing the pattern

pub mod errors;
