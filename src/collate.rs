//! Turkish-aware string folding and comparison.
//!
//! Category names and file-derived titles in the catalog are Turkish, so
//! plain byte or code-point ordering misplaces letters like `ç`, `ğ` and
//! the dotted/dotless i pair. Comparison here follows the Turkish alphabet,
//! case-insensitively; everything that is not a Turkish letter keeps its
//! (folded) code point and sorts ahead of letters, which keeps digits and
//! punctuation in front the way locale collation does.

use std::cmp::Ordering;

/// Turkish alphabet in collation order, lowercase.
const ALPHABET: [char; 29] = [
    'a', 'b', 'c', 'ç', 'd', 'e', 'f', 'g', 'ğ', 'h', 'ı', 'i', 'j', 'k', 'l',
    'm', 'n', 'o', 'ö', 'p', 'r', 's', 'ş', 't', 'u', 'ü', 'v', 'y', 'z',
];

/// Weights for alphabet letters start past the Unicode code-point range.
const LETTER_BASE: u32 = 0x11_0000;

/// Lowercase a single character with the Turkish i-mapping.
pub fn fold_char(c: char) -> char {
    match c {
        'I' => 'ı',
        'İ' => 'i',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}

/// Case-fold a string for matching (Turkish mapping for both i forms).
pub fn fold(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

fn weight(c: char) -> u32 {
    let folded = fold_char(c);
    match ALPHABET.iter().position(|&a| a == folded) {
        Some(index) => LETTER_BASE + index as u32,
        None => folded as u32,
    }
}

/// Compare two strings using Turkish alphabet order, ignoring case.
pub fn compare(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().map(weight);
    let mut right = b.chars().map(weight);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match x.cmp(&y) {
                Ordering::Equal => continue,
                other => return other,
            },
        }
    }
}
