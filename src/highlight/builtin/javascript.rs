//! JavaScript / JSX language definition

use crate::highlight::kinds::TokenKind;
use crate::highlight::rules::{IndentStyle, Rule, RuleSet};

/// Completion keyword list, in presentation order
const KEYWORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
    "do", "else", "enum", "export", "extends", "false", "finally", "for", "function", "if",
    "import", "in", "instanceof", "let", "new", "null", "return", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield", "async", "await",
];

/// Declaration keywords, styled apart from control-flow keywords
const DECL_KEYWORDS: &[&str] = &["const", "let", "var", "function", "class"];

/// Create the JavaScript rule set
pub fn javascript() -> RuleSet {
    let mut lang = RuleSet::new("javascript", "JavaScript");
    lang.indent_style = IndentStyle::Braces;
    lang.jsx = true;
    lang.set_keywords(KEYWORDS.iter().copied());

    // Comments claim first
    if let Some(rule) = Rule::new("line_comment", r"//[^\n]*", TokenKind::Comment, 0) {
        lang.add_rule(rule);
    }
    if let Some(rule) = Rule::new("block_comment", r"(?s)/\*.*?\*/", TokenKind::Comment, 0) {
        lang.add_rule(rule);
    }

    // Strings and template literals
    if let Some(rule) = Rule::new("single_string", r"'(?:\\.|[^'\\])*'", TokenKind::Str, 1) {
        lang.add_rule(rule);
    }
    if let Some(rule) = Rule::new("double_string", r#""(?:\\.|[^"\\])*""#, TokenKind::Str, 1) {
        lang.add_rule(rule);
    }
    if let Some(rule) = Rule::new("template_string", r"(?s)`(?:\\.|[^`\\])*`", TokenKind::Str, 1) {
        lang.add_rule(rule);
    }

    // Regex literal: only after a delimiter, first char never whitespace
    if let Some(rule) = Rule::new(
        "regex_literal",
        r"(?:^|[=(,:;\s])(/(?:\\.|[^/\\\n\s])(?:\\.|[^/\\\n])*/[gimsuy]*)",
        TokenKind::Regex,
        2,
    ) {
        lang.add_rule(rule);
    }

    // Numbers
    if let Some(rule) = Rule::new(
        "number",
        r"\b(?:0x[\da-fA-F]+|0b[01]+|0o[0-7]+|\d+(?:\.\d+)?(?:[eE][+-]?\d+)?)\b",
        TokenKind::Number,
        3,
    ) {
        lang.add_rule(rule);
    }

    // Declaration keywords before the generic keyword rule
    let decl = format!(r"\b(?:{})\b", DECL_KEYWORDS.join("|"));
    if let Some(rule) = Rule::new("keyword_decl", &decl, TokenKind::KeywordDecl, 4) {
        lang.add_rule(rule);
    }
    let plain: Vec<&str> = KEYWORDS
        .iter()
        .copied()
        .filter(|k| !DECL_KEYWORDS.contains(k))
        .filter(|k| !matches!(*k, "true" | "false" | "null"))
        .collect();
    let keyword = format!(r"\b(?:{})\b", plain.join("|"));
    if let Some(rule) = Rule::new("keyword", &keyword, TokenKind::Keyword, 5) {
        lang.add_rule(rule);
    }

    // Identifier directly before "(" is a call
    if let Some(rule) = Rule::new(
        "function_call",
        r"\b([A-Za-z_$][\w$]*)\s*\(",
        TokenKind::Function,
        6,
    ) {
        lang.add_rule(rule);
    }

    // Literals kept out of the keyword rule so they keep their own style
    if let Some(rule) = Rule::new("boolean", r"\b(?:true|false)\b", TokenKind::Boolean, 7) {
        lang.add_rule(rule);
    }
    if let Some(rule) = Rule::new("null", r"\b(?:null|undefined)\b", TokenKind::Null, 7) {
        lang.add_rule(rule);
    }

    // Operators and punctuation last
    if let Some(rule) = Rule::new("operator", r"[+\-/*%=!<>|&^~?:]+", TokenKind::Operator, 8) {
        lang.add_rule(rule);
    }
    if let Some(rule) = Rule::new("punctuation", r"[{}()\[\].,;]", TokenKind::Punctuation, 9) {
        lang.add_rule(rule);
    }

    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::lexer::tokenize;

    fn kind_of(text: &str, start: usize) -> Option<TokenKind> {
        tokenize(text, &javascript())
            .into_iter()
            .find(|s| s.contains(start))
            .map(|s| s.kind)
    }

    #[test]
    fn test_comment_beats_keyword() {
        assert_eq!(kind_of("// for loop", 3), Some(TokenKind::Comment));
    }

    #[test]
    fn test_declaration_keywords() {
        assert_eq!(kind_of("const x = 1;", 0), Some(TokenKind::KeywordDecl));
        assert_eq!(kind_of("return x;", 0), Some(TokenKind::Keyword));
    }

    #[test]
    fn test_literals() {
        assert_eq!(kind_of("x = true", 4), Some(TokenKind::Boolean));
        assert_eq!(kind_of("x = null", 4), Some(TokenKind::Null));
        assert_eq!(kind_of("x = 0x1f", 4), Some(TokenKind::Number));
    }

    #[test]
    fn test_call_name_claimed_alone() {
        let spans = tokenize("foo(1)", &javascript());
        let call = spans.iter().find(|s| s.kind == TokenKind::Function).unwrap();
        assert_eq!((call.start, call.end), (0, 3));
    }

    #[test]
    fn test_regex_literal_after_equals() {
        assert_eq!(kind_of("x = /ab+c/g", 5), Some(TokenKind::Regex));
        // Division is not a regex
        assert_ne!(kind_of("a / b", 2), Some(TokenKind::Regex));
    }

    #[test]
    fn test_template_string_spans_lines() {
        assert_eq!(kind_of("`a\nb`", 3), Some(TokenKind::Str));
    }
}
