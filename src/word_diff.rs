//! Inline word-level diff with a numeric/date change override.
//!
//! For a matched pair of strings the engine produces an ordered span
//! sequence tagged same/removed/new. Two stages:
//!
//! 1. **Override check**: if any numeric or date value differs between the
//!    two strings, the whole of each string becomes a single removed/new
//!    span. A character diff of `"500"` against `"600"` would highlight one
//!    digit and visually understate a materially important change.
//! 2. **Character diff + semantic cleanup**: otherwise a character-level
//!    diff is computed and small equal runs wedged between edits are folded
//!    into them, biasing the output toward few large spans rather than many
//!    fragments.

use once_cell::sync::Lazy;
use regex::Regex;
use similar::{ChangeTag, TextDiff};

use crate::normalize;
use crate::outcome::{InlineSpan, SpanTag};

/// Numeric substrings: integers and decimals.
static NUMERIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+(\.\d+)?\b").unwrap());

/// Render the inline diff between two matched strings.
pub fn inline_diff(a: &str, b: &str) -> Vec<InlineSpan> {
    if values_changed(a, b) {
        return vec![
            InlineSpan {
                tag: SpanTag::Removed,
                text: a.to_string(),
            },
            InlineSpan {
                tag: SpanTag::New,
                text: b.to_string(),
            },
        ];
    }

    let diff = TextDiff::from_chars(a, b);
    let mut segments: Vec<Segment> = Vec::new();
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Equal => push_same(&mut segments, change.value()),
            ChangeTag::Delete => push_removed(&mut segments, change.value()),
            ChangeTag::Insert => push_added(&mut segments, change.value()),
        }
    }

    emit(fold_short_equalities(segments))
}

/// True when the ordered numeric or date sequences of `a` and `b` differ.
pub(crate) fn values_changed(a: &str, b: &str) -> bool {
    numbers_changed(a, b) || dates_changed(a, b)
}

fn numbers_changed(a: &str, b: &str) -> bool {
    let nums_a: Vec<&str> = NUMERIC_RE.find_iter(a).map(|m| m.as_str()).collect();
    let nums_b: Vec<&str> = NUMERIC_RE.find_iter(b).map(|m| m.as_str()).collect();
    nums_a != nums_b
}

/// Dates are compared in canonical form, so `5/6/2024` and `05-06-2024`
/// count as the same value.
fn dates_changed(a: &str, b: &str) -> bool {
    normalize::extract_canonical_dates(a) != normalize::extract_canonical_dates(b)
}

/// Working representation during cleanup: alternating unchanged runs and
/// edit regions. An edit region accumulates the removed and added text of
/// one contiguous change.
enum Segment {
    Same(String),
    Edit { removed: String, added: String },
}

fn push_same(segments: &mut Vec<Segment>, text: &str) {
    if let Some(Segment::Same(run)) = segments.last_mut() {
        run.push_str(text);
        return;
    }
    segments.push(Segment::Same(text.to_string()));
}

fn push_removed(segments: &mut Vec<Segment>, text: &str) {
    if let Some(Segment::Edit { removed, .. }) = segments.last_mut() {
        removed.push_str(text);
        return;
    }
    segments.push(Segment::Edit {
        removed: text.to_string(),
        added: String::new(),
    });
}

fn push_added(segments: &mut Vec<Segment>, text: &str) {
    if let Some(Segment::Edit { added, .. }) = segments.last_mut() {
        added.push_str(text);
        return;
    }
    segments.push(Segment::Edit {
        removed: String::new(),
        added: text.to_string(),
    });
}

/// Fold an equal run into its neighbors when it is shorter than both of the
/// edit regions surrounding it, merging the three segments into one edit.
/// The folded text joins both the removed and the added accumulation, so no
/// character content is reordered or dropped.
fn fold_short_equalities(mut segments: Vec<Segment>) -> Vec<Segment> {
    let mut changed = true;
    while changed {
        changed = false;
        let mut i = 1;
        while i + 1 < segments.len() {
            if should_fold(&segments[i - 1], &segments[i], &segments[i + 1]) {
                let right = segments.remove(i + 1);
                let middle = segments.remove(i);
                if let (
                    Segment::Edit { removed, added },
                    Segment::Same(eq),
                    Segment::Edit {
                        removed: right_removed,
                        added: right_added,
                    },
                ) = (&mut segments[i - 1], middle, right)
                {
                    removed.push_str(&eq);
                    removed.push_str(&right_removed);
                    added.push_str(&eq);
                    added.push_str(&right_added);
                }
                changed = true;
            } else {
                i += 1;
            }
        }
    }
    segments
}

fn should_fold(left: &Segment, middle: &Segment, right: &Segment) -> bool {
    match (left, middle, right) {
        (
            Segment::Edit {
                removed: left_removed,
                added: left_added,
            },
            Segment::Same(eq),
            Segment::Edit {
                removed: right_removed,
                added: right_added,
            },
        ) => {
            let eq_len = eq.chars().count();
            let left_weight = left_removed.chars().count().max(left_added.chars().count());
            let right_weight = right_removed
                .chars()
                .count()
                .max(right_added.chars().count());
            eq_len < left_weight && eq_len < right_weight
        }
        _ => false,
    }
}

fn emit(segments: Vec<Segment>) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    for segment in segments {
        match segment {
            Segment::Same(text) => spans.push(InlineSpan {
                tag: SpanTag::Same,
                text,
            }),
            Segment::Edit { removed, added } => {
                if !removed.is_empty() {
                    spans.push(InlineSpan {
                        tag: SpanTag::Removed,
                        text: removed,
                    });
                }
                if !added.is_empty() {
                    spans.push(InlineSpan {
                        tag: SpanTag::New,
                        text: added,
                    });
                }
            }
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(tag: SpanTag, text: &str) -> InlineSpan {
        InlineSpan {
            tag,
            text: text.to_string(),
        }
    }

    /// Concatenating same+removed spans must reconstruct `a`; same+new must
    /// reconstruct `b`.
    fn assert_reconstructs(a: &str, b: &str, spans: &[InlineSpan]) {
        let old: String = spans
            .iter()
            .filter(|s| s.tag != SpanTag::New)
            .map(|s| s.text.as_str())
            .collect();
        let new: String = spans
            .iter()
            .filter(|s| s.tag != SpanTag::Removed)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(old, a);
        assert_eq!(new, b);
    }

    #[test]
    fn identical_strings_yield_one_same_span() {
        let spans = inline_diff("no change here", "no change here");
        assert_eq!(spans, vec![span(SpanTag::Same, "no change here")]);
    }

    #[test]
    fn word_replacement_keeps_common_context() {
        let spans = inline_diff("the quick brown fox", "the quick brown cat");
        assert_eq!(
            spans,
            vec![
                span(SpanTag::Same, "the quick brown "),
                span(SpanTag::Removed, "fox"),
                span(SpanTag::New, "cat"),
            ]
        );
        assert_reconstructs("the quick brown fox", "the quick brown cat", &spans);
    }

    #[test]
    fn short_equal_run_is_folded_into_neighbors() {
        // The lone "X" between two larger edits should not survive as its
        // own span.
        let spans = inline_diff("abXcd", "efXgh");
        assert_eq!(
            spans,
            vec![span(SpanTag::Removed, "abXcd"), span(SpanTag::New, "efXgh")]
        );
    }

    #[test]
    fn long_equal_run_is_kept() {
        let spans = inline_diff("abcdefghij", "XYcdefghPQ");
        assert_eq!(
            spans,
            vec![
                span(SpanTag::Removed, "ab"),
                span(SpanTag::New, "XY"),
                span(SpanTag::Same, "cdefgh"),
                span(SpanTag::Removed, "ij"),
                span(SpanTag::New, "PQ"),
            ]
        );
        assert_reconstructs("abcdefghij", "XYcdefghPQ", &spans);
    }

    #[test]
    fn numeric_change_overrides_the_character_diff() {
        let a = "Sum Assured: Rs. 5,00,000";
        let b = "Sum Assured: Rs. 6,00,000";
        let spans = inline_diff(a, b);
        assert_eq!(
            spans,
            vec![span(SpanTag::Removed, a), span(SpanTag::New, b)]
        );
    }

    #[test]
    fn date_change_overrides_the_character_diff() {
        let a = "valid until 05-06-2024";
        let b = "valid until 05-06-2025";
        let spans = inline_diff(a, b);
        assert_eq!(
            spans,
            vec![span(SpanTag::Removed, a), span(SpanTag::New, b)]
        );
    }

    #[test]
    fn dates_compare_in_canonical_form() {
        // 5/6/2024 and 05-06-2024 are the same value once canonicalized.
        assert!(!dates_changed("paid 5/6/2024", "paid 05-06-2024"));
        assert!(dates_changed("paid 5/6/2024", "paid 6/6/2024"));
    }

    #[test]
    fn unchanged_numbers_do_not_trigger_the_override() {
        assert!(!values_changed(
            "premium of 4500 due",
            "premium of 4500 payable"
        ));
        let spans = inline_diff("premium of 4500 due", "premium of 4500 payable");
        assert!(spans.iter().any(|s| s.tag == SpanTag::Same));
    }

    #[test]
    fn pure_insertion_yields_same_then_new() {
        let spans = inline_diff("short", "short and longer");
        assert_eq!(
            spans,
            vec![
                span(SpanTag::Same, "short"),
                span(SpanTag::New, " and longer"),
            ]
        );
    }
}
