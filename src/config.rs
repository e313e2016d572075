//! Threshold configuration for the comparison engine.

/// Similarity thresholds used by the matchers.
///
/// All scores are integers in `0..=100` as produced by the
/// [`similarity`](crate::similarity) primitives. The configuration is plain
/// data handed to [`DocumentComparator`](crate::DocumentComparator) at
/// construction time, so comparisons with different sensitivity settings can
/// run concurrently without interference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareConfig {
    /// Minimum `ratio` score for two paragraphs to be treated as the same
    /// unit with only inline differences shown (default 80).
    pub paragraph_full_match: u8,
    /// Minimum `ratio` score for two lines to be treated as the same unit
    /// (default 85).
    pub line_full_match: u8,
    /// Score below which a candidate is discarded and the content treated as
    /// removed rather than related (default 60). Applies to the
    /// `partial_ratio` pass for paragraphs and the single `ratio` score for
    /// lines.
    pub minimum_partial_match: u8,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            paragraph_full_match: 80,
            line_full_match: 85,
            minimum_partial_match: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds() {
        let config = CompareConfig::default();
        assert_eq!(config.paragraph_full_match, 80);
        assert_eq!(config.line_full_match, 85);
        assert_eq!(config.minimum_partial_match, 60);
        // Partial routing only makes sense when the partial floor sits below
        // both full-match thresholds.
        assert!(config.minimum_partial_match < config.paragraph_full_match);
        assert!(config.minimum_partial_match < config.line_full_match);
    }
}
