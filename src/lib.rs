//! Multi-granularity document comparison.
//!
//! `redline` compares two plain-text renditions of a document (already
//! extracted from their source pages) and produces a structured diff at
//! three nested granularities: paragraphs, lines within modified paragraphs,
//! and inline word spans within matched text. Any change to a numeric or
//! date value is treated as a hard replacement rather than a cosmetic edit,
//! so a sum insured moving from 5,00,000 to 6,00,000 stands out as a whole
//! value instead of a one-digit highlight.
//!
//! ## Core Types
//!
//! - [`DocumentComparator`] - Configurable comparison entry point
//! - [`Document`] / [`Paragraph`] / [`Line`] - Typed input entities
//! - [`DiffReport`] / [`ParagraphBlock`] / [`LineBlock`] - Tagged output tree
//! - [`CompareConfig`] - Similarity thresholds
//!
//! ## Example
//!
//! ```
//! use redline::DocumentComparator;
//!
//! let comparator = DocumentComparator::new();
//! let report = comparator.compare_pages(
//!     &["Premium due on 5/6/2024."],
//!     &["Premium due on 5/7/2024."],
//! );
//!
//! // One matched paragraph whose date change is rendered as a whole-value
//! // replacement: the entire old text removed, the entire new text added.
//! assert_eq!(report.blocks.len(), 1);
//! assert_eq!(report.blocks[0].spans.len(), 2);
//! ```

mod config;
mod document;
mod engine;
mod error;
mod matcher;
mod normalize;
mod outcome;
mod render;
mod segment;
mod similarity;
mod word_diff;

// Engine entry points
pub use config::CompareConfig;
pub use engine::DocumentComparator;
pub use error::InputError;

// Input entities
pub use document::{Document, Line, Paragraph};

// Match outcomes
pub use matcher::MatchCandidate;
pub use outcome::{InlineSpan, LineOutcome, ParagraphOutcome, SpanTag};

// Output tree
pub use render::{BlockTag, DiffReport, LineBlock, ParagraphBlock};

// Comparison and normalization primitives
pub use normalize::{normalize, normalize_dates, normalize_whitespace};
pub use similarity::{partial_ratio, ratio};

#[cfg(test)]
mod tests {
    mod compare_documents;
    mod numeric_override;
    mod properties;
}
