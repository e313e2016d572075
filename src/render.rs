//! Final output assembly.
//!
//! The renderer performs no matching. It flattens the ordered
//! [`ParagraphOutcome`] list into a [`DiffReport`], the only structure
//! external consumers see, and owns the two concrete output formats: a
//! serde tree (JSON) and nested HTML markup with tag-derived style classes.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::outcome::{InlineSpan, LineOutcome, ParagraphOutcome};

/// Outcome tag of a paragraph or line block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockTag {
    Same,
    Partial,
    Removed,
    New,
}

impl std::fmt::Display for BlockTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BlockTag::Same => "same",
            BlockTag::Partial => "partial",
            BlockTag::Removed => "removed",
            BlockTag::New => "new",
        };
        f.write_str(name)
    }
}

/// One line inside a partial paragraph block.
///
/// `text` is set for removed/new lines; `spans` for same/partial lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineBlock {
    pub tag: BlockTag,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub spans: Vec<InlineSpan>,
}

/// One paragraph-level unit of the final output.
///
/// Exactly one of the payload fields is populated per tag: `spans` for
/// `same`, `lines` for `partial`, `text` for `removed` and `new`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphBlock {
    pub tag: BlockTag,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub spans: Vec<InlineSpan>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub lines: Vec<LineBlock>,
}

/// The complete ordered comparison output.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DiffReport {
    pub blocks: Vec<ParagraphBlock>,
}

impl DiffReport {
    pub(crate) fn from_outcomes(outcomes: Vec<ParagraphOutcome>) -> Self {
        let blocks = outcomes.into_iter().map(paragraph_block).collect();
        Self { blocks }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Render as nested HTML markup.
    ///
    /// Paragraph blocks become `<div class="para TAG">`, nested lines become
    /// `<div class="line TAG">`, and inline spans become
    /// `<span class="TAG">`. Text content is HTML-escaped; embedded line
    /// feeds render as `<br/>`.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<div class=\"compare-output\">");
        for (index, block) in self.blocks.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            let _ = write!(out, "<div class=\"para {}\">", block.tag);
            if let Some(text) = &block.text {
                out.push_str(&escape_html(text));
            }
            render_spans(&mut out, &block.spans);
            for line in &block.lines {
                let _ = write!(out, "<div class=\"line {}\">", line.tag);
                if let Some(text) = &line.text {
                    out.push_str(&escape_html(text));
                }
                render_spans(&mut out, &line.spans);
                out.push_str("</div>");
            }
            out.push_str("</div>");
        }
        out.push_str("</div>");
        out
    }
}

fn paragraph_block(outcome: ParagraphOutcome) -> ParagraphBlock {
    match outcome {
        ParagraphOutcome::Same { spans, .. } => ParagraphBlock {
            tag: BlockTag::Same,
            text: None,
            spans,
            lines: Vec::new(),
        },
        ParagraphOutcome::Partial { lines, .. } => ParagraphBlock {
            tag: BlockTag::Partial,
            text: None,
            spans: Vec::new(),
            lines: lines.into_iter().map(line_block).collect(),
        },
        ParagraphOutcome::Removed { source } => ParagraphBlock {
            tag: BlockTag::Removed,
            text: Some(source),
            spans: Vec::new(),
            lines: Vec::new(),
        },
        ParagraphOutcome::New { target } => ParagraphBlock {
            tag: BlockTag::New,
            text: Some(target),
            spans: Vec::new(),
            lines: Vec::new(),
        },
    }
}

fn line_block(outcome: LineOutcome) -> LineBlock {
    match outcome {
        LineOutcome::Same { spans, .. } => LineBlock {
            tag: BlockTag::Same,
            text: None,
            spans,
        },
        LineOutcome::Partial { spans, .. } => LineBlock {
            tag: BlockTag::Partial,
            text: None,
            spans,
        },
        LineOutcome::Removed { source } => LineBlock {
            tag: BlockTag::Removed,
            text: Some(source),
            spans: Vec::new(),
        },
        LineOutcome::New { target } => LineBlock {
            tag: BlockTag::New,
            text: Some(target),
            spans: Vec::new(),
        },
    }
}

fn render_spans(out: &mut String, spans: &[InlineSpan]) {
    for span in spans {
        let _ = write!(
            out,
            "<span class=\"{}\">{}</span>",
            span.tag,
            escape_html(&span.text)
        );
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\n' => escaped.push_str("<br/>"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::SpanTag;

    fn removed_block(text: &str) -> ParagraphBlock {
        ParagraphBlock {
            tag: BlockTag::Removed,
            text: Some(text.to_string()),
            spans: Vec::new(),
            lines: Vec::new(),
        }
    }

    #[test]
    fn html_escapes_markup_in_content() {
        let report = DiffReport {
            blocks: vec![removed_block("a < b & \"c\"")],
        };
        assert_eq!(
            report.to_html(),
            "<div class=\"compare-output\">\
             <div class=\"para removed\">a &lt; b &amp; &quot;c&quot;</div>\
             </div>"
        );
    }

    #[test]
    fn embedded_line_feeds_render_as_breaks() {
        let report = DiffReport {
            blocks: vec![removed_block("first\nsecond")],
        };
        assert!(report.to_html().contains("first<br/>second"));
    }

    #[test]
    fn json_round_trips() {
        let report = DiffReport {
            blocks: vec![ParagraphBlock {
                tag: BlockTag::Same,
                text: None,
                spans: vec![InlineSpan {
                    tag: SpanTag::Same,
                    text: "unchanged".to_string(),
                }],
                lines: Vec::new(),
            }],
        };
        let json = report.to_json();
        let parsed: DiffReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn block_tags_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&BlockTag::Partial).unwrap(),
            "\"partial\""
        );
    }
}
