//! Span composition: merge analysis layers into one render partition
//!
//! Per-byte priority-coverage flatten. For every byte the winning span is
//! the one with the highest priority; ties go to the later-supplied
//! layer, so the layer order (lexical, JSX, brackets) decides equal
//! contests. Adjacent bytes with the same winning kind and priority merge
//! into a single run. The output is guaranteed sorted and
//! non-overlapping no matter how the input layers overlap.

use super::span::Span;

/// Merge span layers into a final non-overlapping sequence
///
/// Gaps (bytes no layer claims) are omitted, matching the lexer's
/// plain-text convention.
pub fn compose(text: &str, layers: &[&[Span]]) -> Vec<Span> {
    // Winner per byte: (priority, slot index); later writes win ties
    let mut slots: Vec<&Span> = Vec::new();
    let mut winner: Vec<Option<(u8, usize)>> = vec![None; text.len()];

    for layer in layers {
        for span in layer.iter() {
            if span.is_empty() || span.start >= text.len() {
                continue;
            }
            let slot = slots.len();
            slots.push(span);
            for cell in &mut winner[span.start..span.end.min(text.len())] {
                match cell {
                    Some((p, _)) if *p > span.priority => {}
                    _ => *cell = Some((span.priority, slot)),
                }
            }
        }
    }

    let mut out: Vec<Span> = Vec::new();
    let mut run: Option<(usize, usize, usize)> = None; // (start, end, slot)
    for (i, cell) in winner.iter().enumerate() {
        match (*cell, &mut run) {
            (None, r) => {
                if let Some((start, end, slot)) = r.take() {
                    out.push(make_span(start, end, slots[slot]));
                }
            }
            (Some((priority, slot)), Some((_, end, run_slot)))
                if *end == i
                    && slots[*run_slot].priority == priority
                    && slots[*run_slot].kind == slots[slot].kind =>
            {
                *end = i + 1;
            }
            (Some((_, slot)), r) => {
                if let Some((start, end, prev)) = r.take() {
                    out.push(make_span(start, end, slots[prev]));
                }
                *r = Some((i, i + 1, slot));
            }
        }
    }
    if let Some((start, end, slot)) = run {
        out.push(make_span(start, end, slots[slot]));
    }
    out
}

fn make_span(start: usize, end: usize, template: &Span) -> Span {
    Span::new(start, end, template.kind.clone()).with_priority(template.priority)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::kinds::TokenKind;

    fn assert_partition(text: &str, spans: &[Span]) {
        let mut last_end = 0;
        for span in spans {
            assert!(span.start < span.end);
            assert!(span.start >= last_end, "overlap at {}", span.start);
            assert!(span.end <= text.len());
            last_end = span.end;
        }
    }

    #[test]
    fn test_higher_priority_wins() {
        let text = "abcdef";
        let low = vec![Span::new(0, 6, TokenKind::Variable)]; // 60
        let high = vec![Span::new(2, 4, TokenKind::Str)]; // 100
        let out = compose(text, &[&low, &high]);
        assert_partition(text, &out);
        assert_eq!(out.len(), 3);
        assert_eq!(out[1].kind, TokenKind::Str);
        assert_eq!((out[1].start, out[1].end), (2, 4));
    }

    #[test]
    fn test_later_layer_wins_ties() {
        let text = "xy";
        let first = vec![Span::new(0, 2, TokenKind::Keyword)];
        let second = vec![Span::new(0, 2, TokenKind::Keyword).with_priority(66)];
        let second_marked = vec![Span::new(0, 2, TokenKind::Operator).with_priority(66)];
        // Same priority, later layer supplies Operator: Operator wins
        let out = compose(text, &[&first, &second_marked]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, TokenKind::Operator);
        // Sanity: identical kinds merge into one span
        let out = compose(text, &[&first, &second]);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_adjacent_same_kind_merges() {
        let text = "abcd";
        let layer = vec![
            Span::new(0, 2, TokenKind::Number),
            Span::new(2, 4, TokenKind::Number),
        ];
        let out = compose(text, &[&layer]);
        assert_eq!(out.len(), 1);
        assert_eq!((out[0].start, out[0].end), (0, 4));
    }

    #[test]
    fn test_gaps_omitted_and_coverage_reconstructs() {
        let text = "0123456789";
        let layer = vec![
            Span::new(1, 3, TokenKind::Keyword),
            Span::new(6, 8, TokenKind::Number),
        ];
        let out = compose(text, &[&layer]);
        assert_partition(text, &out);
        // Spans plus gaps reconstruct the full length
        let covered: usize = out.iter().map(Span::len).sum();
        let mut gaps = out.first().map(|s| s.start).unwrap_or(text.len());
        for pair in out.windows(2) {
            gaps += pair[1].start - pair[0].end;
        }
        gaps += text.len() - out.last().map(|s| s.end).unwrap_or(0);
        assert_eq!(covered + gaps, text.len());
    }

    #[test]
    fn test_multichar_span_split_by_bracket() {
        // A wide lexical span pierced by a higher-priority bracket span
        // must split cleanly around it
        let text = "ab(cd";
        let lexical = vec![Span::new(0, 5, TokenKind::Variable)];
        let brackets = vec![Span::new(2, 3, TokenKind::BracketUnmatched)];
        let out = compose(text, &[&lexical, &brackets]);
        assert_partition(text, &out);
        assert_eq!(out.len(), 3);
        assert_eq!(out[1].kind, TokenKind::BracketUnmatched);
        assert_eq!(out[2].kind, TokenKind::Variable);
    }

    #[test]
    fn test_empty_input() {
        assert!(compose("", &[]).is_empty());
        assert!(compose("abc", &[]).is_empty());
    }
}
