use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref SHORTHAND_LOOKUP: HashMap<&'static str, Shorthand> = {
        let mut map = HashMap::new();
        map.insert("w", Shorthand::Words);
        map.insert("d", Shorthand::Integers);
        map.insert("s", Shorthand::Whitespace);
        map.insert("W", Shorthand::NotWords);
        map.insert("D", Shorthand::NotIntegers);
        map.insert("S", Shorthand::NotWhitespace);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Range,
    Char,
    Set,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One entry of a character class body.
///
/// `S` is whatever the [`PrebuiltSets`] provider hands out for shorthand
/// classes; the lexer never looks inside it.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ClassToken<S> {
    /// Inclusive range. `from > to` is kept as written.
    Range { from: char, to: char },
    Char(char),
    Set(S),
}

impl<S> ClassToken<S> {
    pub fn kind(&self) -> TokenKind {
        match self {
            ClassToken::Range { .. } => TokenKind::Range,
            ClassToken::Char(_) => TokenKind::Char,
            ClassToken::Set(_) => TokenKind::Set,
        }
    }
}

impl<S: Display> Display for ClassToken<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassToken::Range { from, to } => write!(f, "{} ({:?}-{:?})", self.kind(), from, to),
            ClassToken::Char(c) => write!(f, "{} ({:?})", self.kind(), c),
            ClassToken::Set(set) => write!(f, "{} ({})", self.kind(), set),
        }
    }
}

/// Provider of the values injected for `\w`, `\d`, `\s` and their negations.
pub trait PrebuiltSets {
    type Set;

    fn words(&self) -> Self::Set;
    fn integers(&self) -> Self::Set;
    fn whitespace(&self) -> Self::Set;
    fn not_words(&self) -> Self::Set;
    fn not_integers(&self) -> Self::Set;
    fn not_whitespace(&self) -> Self::Set;
}

/// The six shorthand classes a character class can contain.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Shorthand {
    Words,
    Integers,
    Whitespace,
    NotWords,
    NotIntegers,
    NotWhitespace,
}

impl Shorthand {
    /// Maps the letter following a backslash (`w`, `D`, ...) to its tag.
    pub fn from_letter(letter: &str) -> Option<Shorthand> {
        SHORTHAND_LOOKUP.get(letter).copied()
    }

    pub fn provide<P: PrebuiltSets + ?Sized>(self, sets: &P) -> P::Set {
        match self {
            Shorthand::Words => sets.words(),
            Shorthand::Integers => sets.integers(),
            Shorthand::Whitespace => sets.whitespace(),
            Shorthand::NotWords => sets.not_words(),
            Shorthand::NotIntegers => sets.not_integers(),
            Shorthand::NotWhitespace => sets.not_whitespace(),
        }
    }
}

impl Display for Shorthand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let escape = match self {
            Shorthand::Words => "\\w",
            Shorthand::Integers => "\\d",
            Shorthand::Whitespace => "\\s",
            Shorthand::NotWords => "\\W",
            Shorthand::NotIntegers => "\\D",
            Shorthand::NotWhitespace => "\\S",
        };
        write!(f, "{}", escape)
    }
}
