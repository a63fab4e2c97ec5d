//! Classified spans of text

use super::kinds::TokenKind;

/// A classified half-open byte range `[start, end)` of the buffer
///
/// Span boundaries always fall on `char` boundaries. The render priority
/// defaults to the intrinsic priority of the kind but can be overridden
/// per span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Byte offset where this span starts (inclusive)
    pub start: usize,
    /// Byte offset where this span ends (exclusive)
    pub end: usize,
    /// Classification of the covered text
    pub kind: TokenKind,
    /// Render priority (higher wins on overlap)
    pub priority: u8,
}

impl Span {
    /// Create a span with the kind's intrinsic priority
    pub fn new(start: usize, end: usize, kind: TokenKind) -> Self {
        let priority = kind.priority();
        Self {
            start,
            end,
            kind,
            priority,
        }
    }

    /// Override the render priority
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// Check if this span contains a byte position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Length of this span in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Sort spans by start ascending, ties broken by end descending
pub fn sort_spans(spans: &mut [Span]) {
    spans.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));
}
