//! Ready-made [`PrebuiltSets`] providers.
//!
//! [`ShorthandSets`] keeps shorthand classes symbolic, [`ExpandedSets`]
//! spells them out as concrete characters and ranges.

use std::convert::Infallible;

use super::tokens::{ClassToken, PrebuiltSets, Shorthand};

/// Hands back the [`Shorthand`] tag itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShorthandSets;

impl PrebuiltSets for ShorthandSets {
    type Set = Shorthand;

    fn words(&self) -> Shorthand {
        Shorthand::Words
    }

    fn integers(&self) -> Shorthand {
        Shorthand::Integers
    }

    fn whitespace(&self) -> Shorthand {
        Shorthand::Whitespace
    }

    fn not_words(&self) -> Shorthand {
        Shorthand::NotWords
    }

    fn not_integers(&self) -> Shorthand {
        Shorthand::NotIntegers
    }

    fn not_whitespace(&self) -> Shorthand {
        Shorthand::NotWhitespace
    }
}

/// A set member cannot itself be a nested set.
pub type Member = ClassToken<Infallible>;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CharSet {
    pub members: Vec<Member>,
    pub negated: bool,
}

/// Expands shorthand classes to the characters ECMAScript gives them.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExpandedSets;

fn integers() -> Vec<Member> {
    vec![ClassToken::Range { from: '0', to: '9' }]
}

fn words() -> Vec<Member> {
    let mut members = vec![
        ClassToken::Char('_'),
        ClassToken::Range { from: 'a', to: 'z' },
        ClassToken::Range { from: 'A', to: 'Z' },
    ];
    members.extend(integers());
    members
}

fn whitespace() -> Vec<Member> {
    vec![
        ClassToken::Char('\t'),
        ClassToken::Char('\n'),
        ClassToken::Char('\u{b}'),
        ClassToken::Char('\u{c}'),
        ClassToken::Char('\r'),
        ClassToken::Char(' '),
        ClassToken::Char('\u{a0}'),
        ClassToken::Char('\u{1680}'),
        ClassToken::Range {
            from: '\u{2000}',
            to: '\u{200a}',
        },
        ClassToken::Char('\u{2028}'),
        ClassToken::Char('\u{2029}'),
        ClassToken::Char('\u{202f}'),
        ClassToken::Char('\u{205f}'),
        ClassToken::Char('\u{3000}'),
        ClassToken::Char('\u{feff}'),
    ]
}

impl PrebuiltSets for ExpandedSets {
    type Set = CharSet;

    fn words(&self) -> CharSet {
        CharSet { members: words(), negated: false }
    }

    fn integers(&self) -> CharSet {
        CharSet { members: integers(), negated: false }
    }

    fn whitespace(&self) -> CharSet {
        CharSet { members: whitespace(), negated: false }
    }

    fn not_words(&self) -> CharSet {
        CharSet { members: words(), negated: true }
    }

    fn not_integers(&self) -> CharSet {
        CharSet { members: integers(), negated: true }
    }

    fn not_whitespace(&self) -> CharSet {
        CharSet { members: whitespace(), negated: true }
    }
}
