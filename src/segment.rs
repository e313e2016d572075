//! Paragraph segmentation for page-extracted text.
//!
//! Page extraction rarely preserves explicit paragraph markers, so
//! segmentation falls back to two cues: a blank line, or a line break
//! immediately followed by an upper-case letter (a strong paragraph-start
//! signal in form-like documents, where continuation lines tend to start
//! lower-case).

use crate::document::Paragraph;
use crate::normalize;

/// Split one page's raw text into paragraphs.
///
/// The page is whitespace-normalized first; each resulting chunk is trimmed
/// and date-normalized independently. Empty chunks are discarded and order
/// is preserved.
pub(crate) fn split_paragraphs(page: &str) -> Vec<Paragraph> {
    let normalized = normalize::normalize_whitespace(page);
    split_chunks(&normalized)
        .into_iter()
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| Paragraph::new(normalize::normalize_dates(chunk)))
        .collect()
}

/// Cut `text` at every blank line and at every line feed followed by an
/// ASCII upper-case letter.
///
/// Works on whitespace-normalized text, where a blank line is `\n\n` with at
/// most interior spaces. All cut points sit at ASCII bytes, so byte slicing
/// stays on character boundaries.
fn split_chunks(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'\n' {
            let mut j = i + 1;
            while j < bytes.len() && (bytes[j] == b' ' || bytes[j] == b'\t') {
                j += 1;
            }
            if j < bytes.len() && bytes[j] == b'\n' {
                chunks.push(&text[start..i]);
                start = j + 1;
                i = j + 1;
                continue;
            }
            if i + 1 < bytes.len() && bytes[i + 1].is_ascii_uppercase() {
                chunks.push(&text[start..i]);
                start = i + 1;
            }
        }
        i += 1;
    }
    chunks.push(&text[start..]);
    chunks
}
