//! Reduction of glossary terms to plain ASCII letters.
//!
//! A term is lowercased, decomposed to NFD so accented Latin letters split
//! into a base letter plus combining marks, and then filtered down to
//! `a`–`z`. Digits, punctuation, combining marks and non-Latin scripts are
//! dropped, so `"Ångström"` becomes `"angstrom"` and `"123"` becomes `""`.

use unicode_normalization::UnicodeNormalization;

fn folded(term: &str) -> impl Iterator<Item = char> + '_ {
    term.chars().flat_map(char::to_lowercase).nfd()
}

/// Return only the ASCII lowercase letters of `term`, in original order.
pub fn asciize(term: &str) -> String {
    folded(term).filter(char::is_ascii_lowercase).collect()
}

/// First letter of the normalized term, or `None` when the term has no
/// Latin letters at all.
///
/// Equivalent to `asciize(term).chars().next()` without building the
/// whole string.
pub fn leading_letter(term: &str) -> Option<char> {
    folded(term).find(char::is_ascii_lowercase)
}
