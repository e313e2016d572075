//! Comparison engine façade.

use crate::config::CompareConfig;
use crate::document::Document;
use crate::error::InputError;
use crate::matcher;
use crate::render::DiffReport;

/// Compares two documents and produces a [`DiffReport`].
///
/// The comparator holds only configuration. Every call owns its paragraph
/// lists and matched-index sets exclusively, so one comparator can serve
/// concurrent comparisons, and comparators with different thresholds can
/// coexist without interference. The computation is synchronous and makes
/// no external calls.
#[derive(Debug, Clone)]
pub struct DocumentComparator {
    config: CompareConfig,
}

impl Default for DocumentComparator {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentComparator {
    /// Create a comparator with the default thresholds.
    pub fn new() -> Self {
        Self {
            config: CompareConfig::default(),
        }
    }

    /// Create a comparator with custom thresholds.
    pub fn with_config(config: CompareConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Compare two ordered page-text sequences.
    ///
    /// Empty sequences are valid: one side may come out all-`New` or
    /// all-`Removed`.
    pub fn compare_pages<S: AsRef<str>>(&self, pages1: &[S], pages2: &[S]) -> DiffReport {
        self.compare_documents(&Document::from_pages(pages1), &Document::from_pages(pages2))
    }

    /// Compare two page sequences supplied as raw bytes.
    ///
    /// Fails atomically on the first page that is not valid UTF-8; no diff
    /// is computed in that case.
    pub fn compare_raw_pages(
        &self,
        pages1: &[Vec<u8>],
        pages2: &[Vec<u8>],
    ) -> Result<DiffReport, InputError> {
        let original = Document::from_raw_pages(pages1)?;
        let revised = Document::from_raw_pages(pages2)?;
        Ok(self.compare_documents(&original, &revised))
    }

    /// Compare two already-segmented documents.
    pub fn compare_documents(&self, original: &Document, revised: &Document) -> DiffReport {
        tracing::debug!(
            original_paragraphs = original.paragraph_count(),
            revised_paragraphs = revised.paragraph_count(),
            "comparing documents"
        );
        let outcomes = matcher::match_paragraphs(original, revised, &self.config);
        DiffReport::from_outcomes(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::BlockTag;

    #[test]
    fn empty_inputs_produce_an_empty_report() {
        let report = DocumentComparator::new().compare_pages::<&str>(&[], &[]);
        assert!(report.blocks.is_empty());
    }

    #[test]
    fn custom_thresholds_are_respected() {
        // With the partial floor raised above this pair's score, the only
        // outcome left is Removed + New.
        let config = CompareConfig {
            paragraph_full_match: 100,
            line_full_match: 100,
            minimum_partial_match: 100,
        };
        let comparator = DocumentComparator::with_config(config);
        let report = comparator.compare_pages(
            &["The policy covers accidental damage."],
            &["The policy covers deliberate damage."],
        );
        let tags: Vec<BlockTag> = report.blocks.iter().map(|b| b.tag).collect();
        assert_eq!(tags, vec![BlockTag::Removed, BlockTag::New]);
    }

    #[test]
    fn invalid_bytes_surface_as_input_error() {
        let comparator = DocumentComparator::new();
        let result = comparator.compare_raw_pages(&[vec![0xc3, 0x28]], &[]);
        assert!(result.is_err());
    }
}
