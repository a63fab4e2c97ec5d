//! Bracket matching, depth coloring and caret-adjacent pair detection
//!
//! Runs after the lexer so delimiters inside strings, comments, regexes
//! and JSX text are masked out of the analysis entirely. Nesting depth is
//! tracked per delimiter family: parentheses, square brackets and braces
//! each own an independent stack.

use std::collections::HashMap;

use super::kinds::TokenKind;
use super::span::{sort_spans, Span};

/// Number of colors in the depth rotation
const DEPTH_COLORS: u8 = 3;

/// One of the three independent bracket families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterFamily {
    Paren,
    Square,
    Brace,
}

impl DelimiterFamily {
    /// Classify a character as a delimiter: (family, is_opening)
    pub fn classify(ch: char) -> Option<(DelimiterFamily, bool)> {
        match ch {
            '(' => Some((DelimiterFamily::Paren, true)),
            ')' => Some((DelimiterFamily::Paren, false)),
            '[' => Some((DelimiterFamily::Square, true)),
            ']' => Some((DelimiterFamily::Square, false)),
            '{' => Some((DelimiterFamily::Brace, true)),
            '}' => Some((DelimiterFamily::Brace, false)),
            _ => None,
        }
    }
}

/// Result of the bracket pass
pub struct BracketAnalysis {
    spans: Vec<Span>,
    pairs: HashMap<usize, usize>,
    masked: Vec<bool>,
    active: Option<(usize, usize)>,
}

impl BracketAnalysis {
    /// Depth/unmatched/active spans, sorted and non-overlapping
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Consume the analysis, keeping only the spans
    pub fn into_spans(self) -> Vec<Span> {
        self.spans
    }

    /// Offset of the partner of a matched delimiter
    pub fn partner(&self, offset: usize) -> Option<usize> {
        self.pairs.get(&offset).copied()
    }

    /// Whether an offset was invisible to bracket matching
    pub fn is_masked(&self, offset: usize) -> bool {
        self.masked.get(offset).copied().unwrap_or(false)
    }

    /// The matched pair adjacent to the caret, if any
    pub fn active_pair(&self) -> Option<(usize, usize)> {
        self.active
    }
}

/// Analyze delimiters in text
///
/// `lexer_spans` mask out string/comment/regex/JSX-text ranges; a brace
/// inside a string is just a character. If a caret offset is supplied,
/// the matched delimiter immediately before it, or failing that at it,
/// becomes the active pair (left bias when both sides qualify).
pub fn analyze(text: &str, lexer_spans: &[Span], caret: Option<usize>) -> BracketAnalysis {
    let mut masked = vec![false; text.len()];
    for span in lexer_spans {
        let masks = matches!(
            span.kind,
            TokenKind::Str | TokenKind::Comment | TokenKind::Regex | TokenKind::JsxText
        );
        if masks {
            for slot in &mut masked[span.start..span.end.min(text.len())] {
                *slot = true;
            }
        }
    }

    // One stack per family, holding offsets of open delimiters
    let mut stacks: [Vec<usize>; 3] = [Vec::new(), Vec::new(), Vec::new()];
    let mut depths: HashMap<usize, usize> = HashMap::new();
    let mut pairs: HashMap<usize, usize> = HashMap::new();
    let mut unmatched: Vec<usize> = Vec::new();

    for (i, ch) in text.char_indices() {
        if masked[i] {
            continue;
        }
        let Some((family, is_open)) = DelimiterFamily::classify(ch) else {
            continue;
        };
        let stack = &mut stacks[family as usize];
        if is_open {
            stack.push(i);
        } else if let Some(open) = stack.pop() {
            // Both ends share the opener's family-local depth
            let depth = stack.len();
            depths.insert(open, depth);
            depths.insert(i, depth);
            pairs.insert(open, i);
            pairs.insert(i, open);
        } else {
            unmatched.push(i);
        }
    }
    for stack in &stacks {
        unmatched.extend_from_slice(stack);
    }

    let active = caret.and_then(|pos| {
        let left = text[..pos.min(text.len())]
            .char_indices()
            .next_back()
            .map(|(i, _)| i);
        if let Some(l) = left {
            if let Some(&p) = pairs.get(&l) {
                return Some((l, p));
            }
        }
        if pos < text.len() {
            if let Some(&p) = pairs.get(&pos) {
                return Some((pos, p));
            }
        }
        None
    });
    let in_active = |idx: usize| active.map_or(false, |(a, b)| idx == a || idx == b);

    let mut spans = Vec::new();
    for (&idx, &depth) in &depths {
        if in_active(idx) {
            continue;
        }
        let color = (depth % DEPTH_COLORS as usize) as u8;
        spans.push(Span::new(idx, idx + 1, TokenKind::BracketDepth(color)));
    }
    for &idx in &unmatched {
        if in_active(idx) {
            continue;
        }
        spans.push(Span::new(idx, idx + 1, TokenKind::BracketUnmatched));
    }
    if let Some((a, b)) = active {
        spans.push(Span::new(a, a + 1, TokenKind::BracketActive));
        spans.push(Span::new(b, b + 1, TokenKind::BracketActive));
    }
    sort_spans(&mut spans);

    BracketAnalysis {
        spans,
        pairs,
        masked,
        active,
    }
}
