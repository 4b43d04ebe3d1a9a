//! Integration tests for the lexing pipeline.
//!
//! These tests drive the crate the way a regex compiler does: resolve the
//! escapes of a whole pattern, then hand each character class body to the
//! class tokenizer and continue after the returned offset.

use pretty_assertions::assert_eq;
use regex_class_lexer::{
    render_error, resolve_escapes, tokenize_class, ClassToken, ExpandedSets, PrebuiltSets,
    Shorthand, ShorthandSets,
};

/// Collects every top-level class of `pattern` in order.
fn classes<P: PrebuiltSets>(
    pattern: &str,
    sets: &P,
) -> Result<Vec<Vec<ClassToken<P::Set>>>, regex_class_lexer::errors::errors::Error> {
    let mut found = vec![];
    let mut pos = 0;

    while let Some(open) = pattern[pos..].find('[') {
        let body_start = pos + open + 1;
        let (tokens, consumed) = tokenize_class(&pattern[body_start..], pattern, sets)?;
        found.push(tokens);
        pos = body_start + consumed;
    }

    Ok(found)
}

#[test]
fn test_resolve_then_tokenize() {
    let pattern = resolve_escapes(r"[\x41-\x5A\d]+");
    assert_eq!(pattern, r"[A-Z\d]+");

    let found = classes(&pattern, &ShorthandSets).unwrap();

    assert_eq!(
        found,
        vec![vec![
            ClassToken::Range { from: 'A', to: 'Z' },
            ClassToken::Set(Shorthand::Integers),
        ]]
    );
}

#[test]
fn test_reescaped_bracket_stays_inside_class() {
    let pattern = resolve_escapes(r"[\x5Dx]");
    assert_eq!(pattern, r"[\]x]");

    let found = classes(&pattern, &ShorthandSets).unwrap();

    assert_eq!(found, vec![vec![ClassToken::Char(']'), ClassToken::Char('x')]]);
}

#[test]
fn test_backspace_marker_survives_for_class_parser() {
    let pattern = resolve_escapes(r"a[\b]c");
    assert_eq!(pattern, r"a[\b]c");

    let found = classes(&pattern, &ShorthandSets).unwrap();

    assert_eq!(found, vec![vec![ClassToken::Char('b')]]);
}

#[test]
fn test_multiple_classes_in_sequence() {
    let found = classes(r"[a-c]x[\s_]y[^]", &ShorthandSets).unwrap();

    assert_eq!(
        found,
        vec![
            vec![ClassToken::Range { from: 'a', to: 'c' }],
            vec![ClassToken::Set(Shorthand::Whitespace), ClassToken::Char('_')],
            vec![ClassToken::Char('^')],
        ]
    );
}

#[test]
fn test_unterminated_class_reports_whole_pattern() {
    let error = classes(r"(ab|cd)[ef", &ShorthandSets).unwrap_err();

    assert_eq!(
        error.to_string(),
        "Invalid regular expression: /(ab|cd)[ef/: Unterminated character class"
    );
    assert_eq!(error.get_position().0, 7);

    let report = render_error(&error);
    assert!(report.ends_with("  | -------^"));
}

#[test]
fn test_second_class_unterminated() {
    let error = classes("[a]b[c", &ShorthandSets).unwrap_err();

    assert_eq!(error.get_position().0, 4);
    assert!(error.to_string().contains("/[a]b[c/"));
}

#[test]
fn test_expanded_sets_in_pipeline() {
    let found = classes(r"[\D]", &ExpandedSets).unwrap();

    match &found[0][0] {
        ClassToken::Set(set) => {
            assert!(set.negated);
            assert_eq!(set.members, vec![ClassToken::Range { from: '0', to: '9' }]);
        }
        other => panic!("Expected set token, found {:?}", other),
    }
}

#[test]
fn test_concurrent_calls_are_independent() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let body = format!("{}-z]", (b'a' + i as u8) as char);
                tokenize_class(&body, &body, &ShorthandSets).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (tokens, offset) = handle.join().unwrap();
        assert_eq!(
            tokens,
            vec![ClassToken::Range {
                from: (b'a' + i as u8) as char,
                to: 'z'
            }]
        );
        assert_eq!(offset, 4);
    }
}
