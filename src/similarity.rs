//! Similarity scoring primitives.
//!
//! Scores are integers in `0..=100` (100 = identical). Two modes:
//!
//! - [`ratio`] - whole-string similarity, for near-identical content with
//!   typo-level noise.
//! - [`partial_ratio`] - best alignment of the shorter string against any
//!   contiguous window of the longer one, tolerant of a prefix/suffix gained
//!   or lost on either side.
//!
//! These are the only comparison primitives the matchers use.

use strsim::normalized_levenshtein;

/// Normalized edit-distance similarity of two whole strings.
///
/// Symmetric and deterministic; two empty strings score 100.
pub fn ratio(a: &str, b: &str) -> u8 {
    (normalized_levenshtein(a, b) * 100.0).round() as u8
}

/// Best [`ratio`] of the shorter string against every contiguous
/// same-length character window of the longer string.
///
/// Equals `ratio` when the strings have the same length, and is at least as
/// high whenever one string is a substring of the other. An empty string
/// scores 100 against anything: it is a window of everything.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let (shorter, longer) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let window_len = shorter.chars().count();
    if window_len == 0 {
        return 100;
    }

    let long_chars: Vec<char> = longer.chars().collect();
    if window_len >= long_chars.len() {
        return ratio(shorter, longer);
    }

    let mut best = 0;
    for window in long_chars.windows(window_len) {
        let window: String = window.iter().collect();
        best = best.max(ratio(shorter, &window));
        if best == 100 {
            break;
        }
    }
    best
}
