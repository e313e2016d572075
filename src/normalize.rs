//! Whitespace and date canonicalization.
//!
//! Page-extracted text arrives with inconsistent line endings, run-on spaces
//! and locale-dependent date renderings. Everything downstream assumes the
//! canonical form produced here: LF-only line breaks, single spaces, at most
//! one blank line in a row, and date-shaped substrings rewritten to
//! `DD-MM-YYYY`.
//!
//! Both passes are pure and idempotent: re-normalizing normalized text
//! yields the same text.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Date-shaped substrings: 1-2 digit day/month fields with a 2- or 4-digit
/// year, separated by `-` or `/`.
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})[-/](\d{1,2})[-/](\d{2,4})\b").unwrap());

/// Runs of spaces and tabs.
static SPACE_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());

/// Three or more consecutive line feeds.
static BLANK_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Canonicalize line endings and spacing.
///
/// Carriage returns become line feeds, runs of spaces/tabs collapse to a
/// single space, every line is trimmed, runs of blank lines collapse to one,
/// and the whole text is trimmed.
pub fn normalize_whitespace(text: &str) -> String {
    let text = text.replace('\r', "\n");
    let text = SPACE_RUN_RE.replace_all(&text, " ");
    let trimmed: Vec<&str> = text.lines().map(str::trim).collect();
    let text = trimmed.join("\n");
    let text = BLANK_RUN_RE.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Rewrite every date-shaped substring to canonical `DD-MM-YYYY`.
///
/// Parsing prefers day-first (`5/6/2024` is the 5th of June). A substring
/// that does not resolve to a valid calendar date under either field order
/// is left unmodified; this is not an error.
pub fn normalize_dates(text: &str) -> String {
    DATE_RE
        .replace_all(text, |caps: &Captures<'_>| {
            match canonical_date(&caps[1], &caps[2], &caps[3]) {
                Some(date) => date,
                None => {
                    tracing::warn!(
                        substring = &caps[0],
                        "date-shaped substring did not parse; leaving it unmodified"
                    );
                    caps[0].to_string()
                }
            }
        })
        .to_string()
}

/// Full normalization pass: whitespace, then dates.
pub fn normalize(text: &str) -> String {
    normalize_dates(&normalize_whitespace(text))
}

/// All date-shaped substrings of `text`, each in canonical form where it
/// parses and verbatim where it does not. Used by the numeric/date change
/// override.
pub(crate) fn extract_canonical_dates(text: &str) -> Vec<String> {
    DATE_RE
        .find_iter(text)
        .map(|m| normalize_dates(m.as_str()))
        .collect()
}

/// Resolve one date-shaped match to `DD-MM-YYYY`, day-first preferred.
fn canonical_date(first: &str, second: &str, year: &str) -> Option<String> {
    let first: u32 = first.parse().ok()?;
    let second: u32 = second.parse().ok()?;
    let year = expand_year(year)?;

    NaiveDate::from_ymd_opt(year, second, first)
        .or_else(|| NaiveDate::from_ymd_opt(year, first, second))
        .map(|date| date.format("%d-%m-%Y").to_string())
}

/// Two-digit years pivot at 70: `00`-`69` map into the 2000s, `70`-`99`
/// into the 1900s. Longer years are taken literally.
fn expand_year(raw: &str) -> Option<i32> {
    let value: i32 = raw.parse().ok()?;
    if raw.len() == 2 {
        Some(if value < 70 { 2000 + value } else { 1900 + value })
    } else {
        Some(value)
    }
}
