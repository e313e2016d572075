//! Tagged match outcomes shared by the matchers and the renderer.
//!
//! Every paragraph and line index on each side of a comparison lands in
//! exactly one outcome. The enums here make that exhaustiveness checkable at
//! compile time instead of relying on dictionary shapes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag for one inline span of a rendered word diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanTag {
    Same,
    Removed,
    New,
}

impl fmt::Display for SpanTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpanTag::Same => "same",
            SpanTag::Removed => "removed",
            SpanTag::New => "new",
        };
        f.write_str(name)
    }
}

/// One inline span: a run of text sharing a single change tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineSpan {
    pub tag: SpanTag,
    pub text: String,
}

/// Outcome of resolving one line inside a partial paragraph pair.
///
/// `Same` and `Partial` both carry a rendered inline diff: a partial line
/// still benefits from highlighting exactly which words changed.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Same {
        source: String,
        target: String,
        spans: Vec<InlineSpan>,
    },
    Partial {
        source: String,
        target: String,
        spans: Vec<InlineSpan>,
    },
    Removed {
        source: String,
    },
    New {
        target: String,
    },
}

/// Outcome of resolving one paragraph.
///
/// A `Partial` paragraph delegates to line-level resolution and carries its
/// nested line outcomes in traversal order.
#[derive(Debug, Clone, PartialEq)]
pub enum ParagraphOutcome {
    Same {
        source: String,
        target: String,
        spans: Vec<InlineSpan>,
    },
    Partial {
        source: String,
        target: String,
        lines: Vec<LineOutcome>,
    },
    Removed {
        source: String,
    },
    New {
        target: String,
    },
}
