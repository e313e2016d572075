//! Typed entities for one side of a comparison.
//!
//! A [`Document`] is the ordered paragraph list extracted from an ordered
//! page sequence. [`Paragraph`]s are produced by the segmenter and read-only
//! afterward; [`Line`]s are only materialized when a paragraph pair needs
//! line-level resolution.

use crate::error::InputError;
use crate::segment;

/// One semantic block of normalized text from one document side.
///
/// The text is canonical: no carriage returns, single-spaced, trimmed, with
/// date substrings in `DD-MM-YYYY` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    text: String,
}

impl Paragraph {
    pub(crate) fn new(text: String) -> Self {
        Self { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The non-empty trimmed lines of this paragraph, in order.
    pub fn lines(&self) -> Vec<Line> {
        self.text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| Line {
                text: line.to_string(),
            })
            .collect()
    }
}

impl AsRef<str> for Paragraph {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// One non-empty row within a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    text: String,
}

impl Line {
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Line {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// One side of a comparison: the ordered paragraphs of a document.
#[derive(Debug, Clone, Default)]
pub struct Document {
    paragraphs: Vec<Paragraph>,
}

impl Document {
    /// Build a document from an ordered sequence of page texts.
    ///
    /// Each page is normalized and segmented independently; paragraphs are
    /// accumulated in page order. Empty or whitespace-only pages contribute
    /// nothing; a document with zero paragraphs is a valid (empty) side.
    pub fn from_pages<S: AsRef<str>>(pages: &[S]) -> Self {
        let mut paragraphs = Vec::new();
        for page in pages {
            paragraphs.extend(segment::split_paragraphs(page.as_ref()));
        }
        Self { paragraphs }
    }

    /// UTF-8 boundary for callers holding raw page bytes.
    ///
    /// Validates every page before building anything, so an encoding error
    /// fails atomically with no partial document.
    pub fn from_raw_pages(pages: &[Vec<u8>]) -> Result<Self, InputError> {
        let mut texts = Vec::with_capacity(pages.len());
        for (page, bytes) in pages.iter().enumerate() {
            match std::str::from_utf8(bytes) {
                Ok(text) => texts.push(text),
                Err(err) => {
                    return Err(InputError::InvalidEncoding {
                        page,
                        valid_up_to: err.valid_up_to(),
                    })
                }
            }
        }
        Ok(Self::from_pages(&texts))
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}
