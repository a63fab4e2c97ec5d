//! Classification rules and language rule sets
//!
//! A rule set is the complete lexical description of one language: an
//! ordered list of regex rules, the keyword list used for completion,
//! and the indentation flavor consulted by the interaction layer.

use regex::Regex;

use super::kinds::TokenKind;

/// A single classification rule
///
/// `order` is the claim order, not the render priority: rules with a
/// lower order run first and claim their matches unconditionally, so
/// coarse rules (comments, strings) pre-empt finer ones (keywords,
/// identifiers) by running earlier.
pub struct Rule {
    /// Name for debugging
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Kind assigned to matches
    pub kind: TokenKind,
    /// Claim order (lower runs first)
    pub order: i32,
}

impl Rule {
    /// Create a new rule, skipping silently on an invalid pattern
    pub fn new(name: &str, pattern: &str, kind: TokenKind, order: i32) -> Option<Self> {
        Regex::new(pattern).ok().map(|regex| Self {
            name: name.to_string(),
            pattern: regex,
            kind,
            order,
        })
    }
}

/// Indentation flavor of a language
///
/// Drives the language-specific line-break overrides in the interaction
/// layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentStyle {
    /// No special handling, carry the current indent
    #[default]
    Plain,
    /// Brace-delimited blocks ({ ... }): line break between a matched
    /// pair expands to an indented body line plus a closing-brace line
    Braces,
    /// Colon-introduced blocks (Python-like): line break after a
    /// trailing ':' indents one level deeper
    Colon,
}

/// A complete language description
pub struct RuleSet {
    /// Registry identifier (lowercase, e.g. "javascript")
    pub id: String,
    /// Display name
    pub name: String,
    /// Rules, kept sorted by ascending claim order
    rules: Vec<Rule>,
    /// Keyword list for completion, in presentation order
    pub keywords: Vec<String>,
    /// Indentation flavor
    pub indent_style: IndentStyle,
    /// Whether to run the JSX angle-delimiter scan
    pub jsx: bool,
}

impl RuleSet {
    /// Create a new empty rule set
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_lowercase(),
            name: name.to_string(),
            rules: Vec::new(),
            keywords: Vec::new(),
            indent_style: IndentStyle::default(),
            jsx: false,
        }
    }

    /// Add a rule, keeping the list sorted by claim order
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
        self.rules.sort_by_key(|r| r.order);
    }

    /// Rules in claim order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Set the completion keyword list
    pub fn set_keywords<I, S>(&mut self, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_invalid_pattern() {
        assert!(Rule::new("broken", r"(unclosed", TokenKind::Comment, 0).is_none());
        assert!(Rule::new("ok", r"\d+", TokenKind::Number, 0).is_some());
    }

    #[test]
    fn test_rules_sorted_by_order() {
        let mut set = RuleSet::new("Test", "Test");
        set.add_rule(Rule::new("late", r"b", TokenKind::Keyword, 5).unwrap());
        set.add_rule(Rule::new("early", r"a", TokenKind::Comment, 0).unwrap());
        let orders: Vec<i32> = set.rules().iter().map(|r| r.order).collect();
        assert_eq!(orders, vec![0, 5]);
    }

    #[test]
    fn test_id_lowercased() {
        let set = RuleSet::new("JavaScript", "JavaScript");
        assert_eq!(set.id, "javascript");
    }
}
