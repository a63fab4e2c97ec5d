//! Python language definition

use crate::highlight::kinds::TokenKind;
use crate::highlight::rules::{IndentStyle, Rule, RuleSet};

/// Completion keyword list, in presentation order
const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

const DECL_KEYWORDS: &[&str] = &["def", "class", "lambda", "global", "nonlocal"];

/// Create the Python rule set
pub fn python() -> RuleSet {
    let mut lang = RuleSet::new("python", "Python");
    lang.indent_style = IndentStyle::Colon;
    lang.set_keywords(KEYWORDS.iter().copied());

    if let Some(rule) = Rule::new("comment", r"#[^\n]*", TokenKind::Comment, 0) {
        lang.add_rule(rule);
    }

    // Triple-quoted strings before the single-line forms
    if let Some(rule) = Rule::new("triple_double", r#"(?s)""".*?""""#, TokenKind::Str, 1) {
        lang.add_rule(rule);
    }
    if let Some(rule) = Rule::new("triple_single", r"(?s)'''.*?'''", TokenKind::Str, 1) {
        lang.add_rule(rule);
    }
    if let Some(rule) = Rule::new("double_string", r#""(?:\\.|[^"\\\n])*""#, TokenKind::Str, 2) {
        lang.add_rule(rule);
    }
    if let Some(rule) = Rule::new("single_string", r"'(?:\\.|[^'\\\n])*'", TokenKind::Str, 2) {
        lang.add_rule(rule);
    }

    // Decorators use the open-ended kind space
    if let Some(rule) = Rule::new(
        "decorator",
        r"@\w+",
        TokenKind::Custom("decorator".to_string()),
        3,
    ) {
        lang.add_rule(rule);
    }

    if let Some(rule) = Rule::new(
        "number",
        r"\b(?:0[xX][0-9a-fA-F_]+|0[bB][01_]+|0[oO][0-7_]+|\d[\d_]*(?:\.\d[\d_]*)?(?:[eE][+-]?\d+)?[jJ]?)\b",
        TokenKind::Number,
        4,
    ) {
        lang.add_rule(rule);
    }

    let decl = format!(r"\b(?:{})\b", DECL_KEYWORDS.join("|"));
    if let Some(rule) = Rule::new("keyword_decl", &decl, TokenKind::KeywordDecl, 5) {
        lang.add_rule(rule);
    }
    let plain: Vec<&str> = KEYWORDS
        .iter()
        .copied()
        .filter(|k| !DECL_KEYWORDS.contains(k))
        .filter(|k| !matches!(*k, "True" | "False" | "None"))
        .collect();
    let keyword = format!(r"\b(?:{})\b", plain.join("|"));
    if let Some(rule) = Rule::new("keyword", &keyword, TokenKind::Keyword, 6) {
        lang.add_rule(rule);
    }

    if let Some(rule) = Rule::new("boolean", r"\b(?:True|False)\b", TokenKind::Boolean, 7) {
        lang.add_rule(rule);
    }
    if let Some(rule) = Rule::new("none", r"\bNone\b", TokenKind::Null, 7) {
        lang.add_rule(rule);
    }

    if let Some(rule) = Rule::new(
        "function_call",
        r"\b([A-Za-z_]\w*)\s*\(",
        TokenKind::Function,
        8,
    ) {
        lang.add_rule(rule);
    }

    if let Some(rule) = Rule::new("operator", r"[+\-*/%=!<>|&^~@]+", TokenKind::Operator, 9) {
        lang.add_rule(rule);
    }
    if let Some(rule) = Rule::new("punctuation", r"[{}()\[\].,:;]", TokenKind::Punctuation, 10) {
        lang.add_rule(rule);
    }

    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::lexer::tokenize;

    fn kind_of(text: &str, start: usize) -> Option<TokenKind> {
        tokenize(text, &python())
            .into_iter()
            .find(|s| s.contains(start))
            .map(|s| s.kind)
    }

    #[test]
    fn test_comment() {
        assert_eq!(kind_of("x = 1  # note", 9), Some(TokenKind::Comment));
    }

    #[test]
    fn test_triple_quoted_string() {
        let text = "\"\"\"doc\nstring\"\"\"";
        assert_eq!(kind_of(text, 7), Some(TokenKind::Str));
    }

    #[test]
    fn test_decorator_is_custom_kind() {
        assert_eq!(
            kind_of("@wraps(f)", 0),
            Some(TokenKind::Custom("decorator".to_string()))
        );
    }

    #[test]
    fn test_def_is_declaration() {
        assert_eq!(kind_of("def main():", 0), Some(TokenKind::KeywordDecl));
        assert_eq!(kind_of("if x:", 0), Some(TokenKind::Keyword));
    }

    #[test]
    fn test_literals() {
        assert_eq!(kind_of("x = True", 4), Some(TokenKind::Boolean));
        assert_eq!(kind_of("x = None", 4), Some(TokenKind::Null));
        assert_eq!(kind_of("x = 0b1010", 4), Some(TokenKind::Number));
    }
}
