//! Greedy fuzzy matching at paragraph and line granularity.
//!
//! Source items are matched in traversal order against the shrinking pool of
//! unmatched targets, and a committed match is never reconsidered. This is a
//! greedy approximation of maximum-weight assignment; its specific tie-break
//! behavior (first seen wins) is part of the engine's reference semantics,
//! so an optimal assignment algorithm must not be substituted here.
//!
//! Paragraphs get two chances: a whole-string `ratio` pass for near-identical
//! content, then a `partial_ratio` pass that tolerates a sentence gained or
//! lost at either end and routes the pair to line-level resolution instead of
//! masking the whole paragraph as unrelated.

use std::collections::HashSet;

use crate::config::CompareConfig;
use crate::document::{Document, Paragraph};
use crate::outcome::{LineOutcome, ParagraphOutcome};
use crate::similarity;
use crate::word_diff;

/// A scored pairing of a source item with a target item.
///
/// "No candidate" is the absence of this value, never a sentinel score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchCandidate {
    pub source_index: usize,
    pub target_index: usize,
    /// Similarity score in `0..=100`.
    pub score: u8,
}

/// Select the best unmatched target for one source item.
///
/// Scans targets in index order and only a strictly greater score replaces
/// the current best, so exact ties resolve to the lowest target index.
fn best_candidate<T: AsRef<str>>(
    source_index: usize,
    source: &str,
    targets: &[T],
    matched: &HashSet<usize>,
    score: impl Fn(&str, &str) -> u8,
) -> Option<MatchCandidate> {
    let mut best: Option<MatchCandidate> = None;
    for (target_index, target) in targets.iter().enumerate() {
        if matched.contains(&target_index) {
            continue;
        }
        let score = score(source, target.as_ref());
        if best.map_or(true, |b| score > b.score) {
            best = Some(MatchCandidate {
                source_index,
                target_index,
                score,
            });
        }
    }
    best
}

/// Match the paragraphs of two documents.
///
/// Output order follows the original document's traversal; target paragraphs
/// never selected are appended at the end as `New`, in their original order.
pub(crate) fn match_paragraphs(
    original: &Document,
    revised: &Document,
    config: &CompareConfig,
) -> Vec<ParagraphOutcome> {
    let targets = revised.paragraphs();
    let mut matched: HashSet<usize> = HashSet::new();
    let mut outcomes = Vec::with_capacity(original.paragraph_count());

    for (source_index, p1) in original.paragraphs().iter().enumerate() {
        let full = best_candidate(source_index, p1.text(), targets, &matched, similarity::ratio)
            .filter(|c| c.score >= config.paragraph_full_match);
        if let Some(candidate) = full {
            let target = &targets[candidate.target_index];
            matched.insert(candidate.target_index);
            tracing::debug!(
                source = candidate.source_index,
                target = candidate.target_index,
                score = candidate.score,
                "paragraph matched in full"
            );
            outcomes.push(ParagraphOutcome::Same {
                source: p1.text().to_string(),
                target: target.text().to_string(),
                spans: word_diff::inline_diff(p1.text(), target.text()),
            });
            continue;
        }

        let partial = best_candidate(
            source_index,
            p1.text(),
            targets,
            &matched,
            similarity::partial_ratio,
        )
        .filter(|c| c.score >= config.minimum_partial_match);
        match partial {
            None => outcomes.push(ParagraphOutcome::Removed {
                source: p1.text().to_string(),
            }),
            Some(candidate) => {
                let target = &targets[candidate.target_index];
                matched.insert(candidate.target_index);
                tracing::debug!(
                    source = candidate.source_index,
                    target = candidate.target_index,
                    score = candidate.score,
                    "paragraph matched partially; resolving lines"
                );
                outcomes.push(ParagraphOutcome::Partial {
                    source: p1.text().to_string(),
                    target: target.text().to_string(),
                    lines: match_lines(p1, target, config),
                });
            }
        }
    }

    for (target_index, p2) in targets.iter().enumerate() {
        if !matched.contains(&target_index) {
            outcomes.push(ParagraphOutcome::New {
                target: p2.text().to_string(),
            });
        }
    }

    outcomes
}

/// Resolve a partially matched paragraph pair line by line.
///
/// Same greedy loop as the paragraph pass, with a single `ratio` score per
/// source line: at or above the line full-match threshold the line is
/// `Same`; between the partial floor and the threshold it is `Partial`
/// (consuming the target and still rendering an inline diff); below the
/// floor it is `Removed` and consumes nothing.
fn match_lines(p1: &Paragraph, p2: &Paragraph, config: &CompareConfig) -> Vec<LineOutcome> {
    let lines1 = p1.lines();
    let lines2 = p2.lines();
    let mut matched: HashSet<usize> = HashSet::new();
    let mut outcomes = Vec::with_capacity(lines1.len());

    for (source_index, l1) in lines1.iter().enumerate() {
        let best = best_candidate(source_index, l1.text(), &lines2, &matched, similarity::ratio);
        match best.filter(|c| c.score >= config.minimum_partial_match) {
            None => outcomes.push(LineOutcome::Removed {
                source: l1.text().to_string(),
            }),
            Some(candidate) => {
                let target = &lines2[candidate.target_index];
                matched.insert(candidate.target_index);
                let spans = word_diff::inline_diff(l1.text(), target.text());
                if candidate.score >= config.line_full_match {
                    outcomes.push(LineOutcome::Same {
                        source: l1.text().to_string(),
                        target: target.text().to_string(),
                        spans,
                    });
                } else {
                    outcomes.push(LineOutcome::Partial {
                        source: l1.text().to_string(),
                        target: target.text().to_string(),
                        spans,
                    });
                }
            }
        }
    }

    for (target_index, l2) in lines2.iter().enumerate() {
        if !matched.contains(&target_index) {
            outcomes.push(LineOutcome::New {
                target: l2.text().to_string(),
            });
        }
    }

    outcomes
}
