//! Lexical pass: rule set to provisional spans
//!
//! First-claim-wins tokenization: rules run in ascending claim order and
//! each match is accepted only if no byte of it was claimed by an earlier
//! match. A rule never reclaims territory, even if it is more specific.

use super::rules::RuleSet;
use super::span::{sort_spans, Span};

/// Tokenize text against a rule set
///
/// Returns spans sorted by start ascending (ties by end descending),
/// mutually non-overlapping. Characters not covered by any rule are plain
/// text and do not appear in the output.
///
/// A pattern with a capture group claims only group 1, so context
/// characters (the `(` after a function name, the delimiter before a
/// regex literal) stay unclaimed for later rules.
pub fn tokenize(text: &str, rules: &RuleSet) -> Vec<Span> {
    let mut claimed = vec![false; text.len()];
    let mut spans = Vec::new();

    for rule in rules.rules() {
        let grouped = rule.pattern.captures_len() > 1;
        for caps in rule.pattern.captures_iter(text) {
            let Some(m) = (if grouped { caps.get(1) } else { caps.get(0) }) else {
                continue;
            };
            let (start, end) = (m.start(), m.end());
            if start == end {
                continue;
            }
            if claimed[start..end].iter().any(|&c| c) {
                continue;
            }
            for slot in &mut claimed[start..end] {
                *slot = true;
            }
            spans.push(Span::new(start, end, rule.kind.clone()));
        }
    }

    sort_spans(&mut spans);
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::kinds::TokenKind;
    use crate::highlight::rules::Rule;

    fn test_rules() -> RuleSet {
        let mut set = RuleSet::new("test", "Test");
        if let Some(rule) = Rule::new("comment", r"//[^\n]*", TokenKind::Comment, 0) {
            set.add_rule(rule);
        }
        if let Some(rule) = Rule::new("string", r#""(?:\\.|[^"\\])*""#, TokenKind::Str, 1) {
            set.add_rule(rule);
        }
        if let Some(rule) = Rule::new("number", r"\b\d+\b", TokenKind::Number, 2) {
            set.add_rule(rule);
        }
        set
    }

    #[test]
    fn test_non_overlapping_and_sorted() {
        let spans = tokenize("let x = 42; // answer 42", &test_rules());
        for pair in spans.windows(2) {
            assert!(pair[0].start <= pair[1].start);
            assert!(pair[0].end <= pair[1].start, "spans overlap: {:?}", pair);
        }
    }

    #[test]
    fn test_earlier_rule_wins_territory() {
        // The 42 inside the comment belongs to the comment rule
        let spans = tokenize("x = 1 // 42", &test_rules());
        let comment = spans.iter().find(|s| s.kind == TokenKind::Comment).unwrap();
        assert_eq!(comment.start, 6);
        assert_eq!(comment.end, 11);
        let numbers: Vec<_> = spans.iter().filter(|s| s.kind == TokenKind::Number).collect();
        assert_eq!(numbers.len(), 1);
        assert_eq!(numbers[0].start, 4);
    }

    #[test]
    fn test_number_inside_string_masked() {
        let spans = tokenize(r#""has 99 inside""#, &test_rules());
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].kind, TokenKind::Str);
    }

    #[test]
    fn test_plain_text_not_emitted() {
        let spans = tokenize("plain words only", &test_rules());
        assert!(spans.is_empty());
    }

    #[test]
    fn test_capture_group_claims_subrange() {
        let mut set = RuleSet::new("test", "Test");
        set.add_rule(
            Rule::new("call", r"\b([A-Za-z_]\w*)\s*\(", TokenKind::Function, 0).unwrap(),
        );
        let spans = tokenize("foo(1)", &set);
        assert_eq!(spans.len(), 1);
        // Only the name is claimed, not the "("
        assert_eq!((spans[0].start, spans[0].end), (0, 3));
    }

    #[test]
    fn test_zero_length_matches_discarded() {
        let mut set = RuleSet::new("test", "Test");
        // \d* happily matches the empty string
        set.add_rule(Rule::new("digits", r"\d*", TokenKind::Number, 0).unwrap());
        let spans = tokenize("ab12cd", &set);
        assert_eq!(spans.len(), 1);
        assert_eq!((spans[0].start, spans[0].end), (2, 4));
    }
}
