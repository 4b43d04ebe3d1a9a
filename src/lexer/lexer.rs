use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::{
    errors::errors::{fail_at, Error, UNTERMINATED_CLASS},
    Position,
};

use super::tokens::{ClassToken, PrebuiltSets, Shorthand};

lazy_static! {
    static ref SHORTHAND_REGEX: Regex = Regex::new(r"^\\([wdsWDS])").expect("shorthand pattern is valid");
    // `.` in the escaped start stops at any line terminator, not only `\n`.
    static ref RANGE_REGEX: Regex =
        Regex::new(r"^(?:\\([^\n\r\u{2028}\u{2029}])|([^\]\\]))-\\?([^\]])").expect("range pattern is valid");
    static ref TERMINATOR_REGEX: Regex = Regex::new(r"^\]").expect("terminator pattern is valid");
    static ref LITERAL_REGEX: Regex = Regex::new(r"^\\?((?s:.))").expect("literal pattern is valid");
}

type ClassHandler<P> = fn(&mut ClassLexer<'_, P>, &Captures<'_>);

struct ClassPattern<P: PrebuiltSets> {
    regex: &'static Regex,
    handler: ClassHandler<P>,
}

/// Productions in the order they are tried at each position.
fn class_patterns<P: PrebuiltSets>() -> [ClassPattern<P>; 4] {
    [
        ClassPattern { regex: &SHORTHAND_REGEX, handler: shorthand_handler::<P> },
        ClassPattern { regex: &RANGE_REGEX, handler: range_handler::<P> },
        ClassPattern { regex: &TERMINATOR_REGEX, handler: terminator_handler::<P> },
        ClassPattern { regex: &LITERAL_REGEX, handler: literal_handler::<P> },
    ]
}

pub struct ClassLexer<'a, P: PrebuiltSets> {
    tokens: Vec<ClassToken<P::Set>>,
    source: &'a str,
    sets: &'a P,
    pos: usize,
    closed: bool,
}

impl<'a, P: PrebuiltSets> ClassLexer<'a, P> {
    pub fn new(source: &'a str, sets: &'a P) -> Self {
        ClassLexer {
            tokens: vec![],
            source,
            sets,
            pos: 0,
            closed: false,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: ClassToken<P::Set>) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &'a str {
        let source: &'a str = self.source;
        &source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn first_char(caps: &Captures<'_>, index: usize) -> Option<char> {
    caps.get(index).and_then(|m| m.as_str().chars().next())
}

fn shorthand_handler<P: PrebuiltSets>(lexer: &mut ClassLexer<'_, P>, caps: &Captures<'_>) {
    if let Some(shorthand) = Shorthand::from_letter(&caps[1]) {
        let set = shorthand.provide(lexer.sets);
        lexer.push(ClassToken::Set(set));
    }
    lexer.advance_n(caps[0].len());
}

fn range_handler<P: PrebuiltSets>(lexer: &mut ClassLexer<'_, P>, caps: &Captures<'_>) {
    let from = first_char(caps, 1).or_else(|| first_char(caps, 2));
    if let (Some(from), Some(to)) = (from, first_char(caps, 3)) {
        lexer.push(ClassToken::Range { from, to });
    }
    lexer.advance_n(caps[0].len());
}

fn terminator_handler<P: PrebuiltSets>(lexer: &mut ClassLexer<'_, P>, caps: &Captures<'_>) {
    lexer.closed = true;
    lexer.advance_n(caps[0].len());
}

fn literal_handler<P: PrebuiltSets>(lexer: &mut ClassLexer<'_, P>, caps: &Captures<'_>) {
    if let Some(c) = first_char(caps, 1) {
        lexer.push(ClassToken::Char(c));
    }
    lexer.advance_n(caps[0].len());
}

/// Offset of the opening `[` in `regex`, when `source` is the tail of it.
fn class_start(source: &str, regex: &str) -> Position {
    if regex.ends_with(source) {
        if let Some(start) = regex.len().checked_sub(source.len() + 1) {
            if regex.as_bytes().get(start) == Some(&b'[') {
                return Position(start);
            }
        }
    }
    Position::null()
}

/// Tokenizes a character class body.
///
/// `source` begins right after the opening `[` and may run past the closing
/// `]`. Returns the tokens in source order together with the byte offset just
/// past that `]`. `regex` is the whole pattern and is only used to report an
/// unterminated class.
#[tracing::instrument(level = "trace", skip_all, fields(len = source.len()))]
pub fn tokenize_class<P: PrebuiltSets>(
    source: &str,
    regex: &str,
    sets: &P,
) -> Result<(Vec<ClassToken<P::Set>>, usize), Error> {
    let patterns = class_patterns::<P>();
    let mut lex = ClassLexer::new(source, sets);

    while !lex.at_eof() {
        let remaining = lex.remainder();
        let mut matched = false;

        for pattern in patterns.iter() {
            if let Some(caps) = pattern.regex.captures(remaining) {
                (pattern.handler)(&mut lex, &caps);
                matched = true;
                break;
            }
        }

        if lex.closed {
            tracing::trace!(tokens = lex.tokens.len(), offset = lex.pos, "class closed");
            return Ok((lex.tokens, lex.pos));
        }

        if !matched {
            break;
        }
    }

    tracing::debug!(regex, "unterminated character class");
    fail_at(regex, UNTERMINATED_CLASS, class_start(source, regex))
}
