#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;

pub use errors::errors::{fail, fail_at};
pub use lexer::{
    escapes::resolve_escapes,
    lexer::tokenize_class,
    sets::{CharSet, ExpandedSets, ShorthandSets},
    tokens::{ClassToken, PrebuiltSets, Shorthand, TokenKind},
};

/// Byte offset into a regex source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub usize);

impl Position {
    pub fn null() -> Self {
        Position(0)
    }
}

/// Formats an error as a short report with a caret under the offending class.
pub fn render_error(error: &Error) -> String {
    /*
        Invalid regular expression: /ab[cd/: Unterminated character class (did you forget a closing `]`?)
          | ab[cd
          | --^
    */

    let regex = error.get_regex();

    let mut report = if let ErrorTip::None = error.get_tip() {
        format!("{}\n", error)
    } else {
        format!("{} ({})\n", error, error.get_tip())
    };
    report.push_str(&format!("  | {}\n", regex));

    let column = regex
        .get(..error.get_position().0)
        .map(|prefix| prefix.chars().count())
        .unwrap_or(0);
    let arrows = column + 1;

    report.push_str(&format!("  | {:->arrows$}", "^"));
    report
}
