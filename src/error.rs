//! Error types for the comparison boundary.

use thiserror::Error;

/// Fatal input errors.
///
/// The engine is a pure computation over text, so the only fatal condition is
/// input that cannot be represented as UTF-8 text at the
/// [`Document::from_raw_pages`](crate::Document::from_raw_pages) boundary.
/// Empty pages and unparseable dates are handled inline during normalization
/// and never surface here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A page's bytes were not valid UTF-8. No partial document is built.
    #[error("page {page} is not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
    InvalidEncoding {
        /// Zero-based index of the offending page.
        page: usize,
        /// Number of valid UTF-8 bytes before the error.
        valid_up_to: usize,
    },
}
