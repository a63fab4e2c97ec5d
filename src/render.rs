//! Render contract: spans to labeled substrings
//!
//! The rendering surface receives the whole text as an ordered list of
//! runs, each carrying the kind to style it with or `None` for plain
//! text. Runs cover the text exactly: no gaps, no overlaps.

use crate::highlight::{Span, TokenKind};

/// One styled (or plain) slice of the text
#[derive(Debug, PartialEq, Eq)]
pub struct RenderRun<'a> {
    /// The covered substring
    pub text: &'a str,
    /// Classification to style with; `None` renders unstyled
    pub kind: Option<&'a TokenKind>,
}

/// Split text into runs according to a final span sequence
///
/// `spans` must be sorted and non-overlapping, as produced by the
/// composer.
pub fn render_runs<'a>(text: &'a str, spans: &'a [Span]) -> Vec<RenderRun<'a>> {
    let mut runs = Vec::new();
    let mut pos = 0;

    for span in spans {
        if span.start > pos {
            runs.push(RenderRun {
                text: &text[pos..span.start],
                kind: None,
            });
        }
        runs.push(RenderRun {
            text: &text[span.start..span.end],
            kind: Some(&span.kind),
        });
        pos = span.end;
    }
    if pos < text.len() {
        runs.push(RenderRun {
            text: &text[pos..],
            kind: None,
        });
    }

    runs
}
