//! Decoding of backslash escapes anywhere in a pattern.
//!
//! Every recognised escape is replaced by the character it stands for. A
//! character that would change the meaning of the pattern (`.`, `*`, `[`, ...)
//! comes back escaped, so the output can be parsed again as a regex.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    // Groups: 1 `[\b]` marker, 2 leading backslash, 3 `\uHHHH`, 4 `\xHH`,
    // 5 octal, 6 control letter, 7 single-letter escape.
    static ref ESCAPE_REGEX: Regex = Regex::new(
        r"(\[\\b\])|(\\)?\\(?:u([0-9A-F]{4})|x([0-9A-F]{2})|(0?[0-7]{2})|c([@A-Z\[\\\]^?])|([0tnvfr]))"
    )
    .expect("escape pattern is valid");
    static ref SLASH_LOOKUP: HashMap<&'static str, u32> = {
        let mut map = HashMap::new();
        map.insert("0", 0);
        map.insert("t", 9);
        map.insert("n", 10);
        map.insert("v", 11);
        map.insert("f", 12);
        map.insert("r", 13);
        map
    };
}

/// `\cX` letters, indexed by the control code they produce.
const CONTROL: &str = "@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^?";

const REGEX_META: &str = "[]{}^$.|?*+()";

/// Replaces each escape sequence in `source` with the literal it denotes.
///
/// `[\b]` and escapes that are themselves escaped (`\\n`) are left alone, as
/// is anything that does not form a valid escape. Never fails.
pub fn resolve_escapes(source: &str) -> String {
    ESCAPE_REGEX
        .replace_all(source, |caps: &Captures| {
            let matched = &caps[0];
            if caps.get(1).is_some() || caps.get(2).is_some() {
                return String::from(matched);
            }

            match decode(caps).and_then(char::from_u32) {
                Some(c) => {
                    tracing::trace!(escape = matched, code = u32::from(c), "decoded escape");
                    if REGEX_META.contains(c) {
                        format!("\\{}", c)
                    } else {
                        c.to_string()
                    }
                }
                // lone surrogates have no char
                None => String::from(matched),
            }
        })
        .into_owned()
}

fn decode(caps: &Captures) -> Option<u32> {
    if let Some(hex) = caps.get(3).or_else(|| caps.get(4)) {
        return u32::from_str_radix(hex.as_str(), 16).ok();
    }

    if let Some(octal) = caps.get(5) {
        return u32::from_str_radix(octal.as_str(), 8).ok();
    }

    if let Some(control) = caps.get(6) {
        return CONTROL.find(control.as_str()).map(|index| index as u32);
    }

    caps.get(7)
        .and_then(|letter| SLASH_LOOKUP.get(letter.as_str()).copied())
}
