//! Token classification kinds
//!
//! This module defines the semantic kinds a span of text can be
//! classified as, together with the fixed render priority of each kind.

/// Semantic classification of a text span
///
/// The core set covers lexical kinds (comments, strings, keywords, JSX
/// pieces) and structural kinds produced by the bracket analyzer. The
/// `Custom` variant carries a caller-supplied tag so new kinds can be
/// registered without touching this enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Source code comments (// or /* */)
    Comment,
    /// String literals
    Str,
    /// Regex literals
    Regex,
    /// Numeric literals
    Number,
    /// Language keywords
    Keyword,
    /// Declaration keywords (const, let, fn, class, ...)
    KeywordDecl,
    /// Function names
    Function,
    /// Boolean literals
    Boolean,
    /// Null/undefined literals
    Null,
    /// Operators
    Operator,
    /// Punctuation
    Punctuation,
    /// Object properties
    Property,
    /// Variable names
    Variable,
    /// Type names
    Type,
    /// JSX/HTML tag names
    JsxTag,
    /// JSX component tag names (capitalized)
    JsxTagComponent,
    /// JSX attribute names
    JsxAttribute,
    /// Raw text between JSX tags
    JsxText,
    /// JSX angle delimiters (<, </, >, />)
    JsxDelimiter,
    /// Matched bracket at a nesting depth, after the mod-3 rotation (0..=2)
    BracketDepth(u8),
    /// Bracket with no partner
    BracketUnmatched,
    /// Bracket pair adjacent to the caret
    BracketActive,
    /// Caller-defined kind
    Custom(String),
}

impl TokenKind {
    /// Render priority of this kind
    ///
    /// Higher priority wins when layers of spans overlap. Strings,
    /// comments and regexes are never overdrawn; bracket kinds sit above
    /// the ordinary lexical kinds so depth coloring shows through.
    pub fn priority(&self) -> u8 {
        match self {
            TokenKind::Str | TokenKind::Comment | TokenKind::Regex => 100,
            TokenKind::JsxDelimiter => 95,
            TokenKind::BracketActive => 92,
            TokenKind::BracketUnmatched => 91,
            TokenKind::BracketDepth(_) => 90,
            TokenKind::JsxTagComponent => 80,
            TokenKind::JsxTag => 78,
            TokenKind::JsxAttribute => 76,
            TokenKind::JsxText => 70,
            TokenKind::KeywordDecl => 68,
            TokenKind::Keyword => 66,
            TokenKind::Function => 64,
            TokenKind::Number | TokenKind::Boolean | TokenKind::Null => 62,
            TokenKind::Property | TokenKind::Variable => 60,
            TokenKind::Operator => 50,
            TokenKind::Punctuation => 40,
            _ => 10,
        }
    }

    /// Get a stable name for this kind (used by theme files)
    pub fn name(&self) -> String {
        match self {
            TokenKind::Comment => "comment".into(),
            TokenKind::Str => "string".into(),
            TokenKind::Regex => "regex".into(),
            TokenKind::Number => "number".into(),
            TokenKind::Keyword => "keyword".into(),
            TokenKind::KeywordDecl => "keywordDecl".into(),
            TokenKind::Function => "function".into(),
            TokenKind::Boolean => "boolean".into(),
            TokenKind::Null => "null".into(),
            TokenKind::Operator => "operator".into(),
            TokenKind::Punctuation => "punctuation".into(),
            TokenKind::Property => "property".into(),
            TokenKind::Variable => "variable".into(),
            TokenKind::Type => "type".into(),
            TokenKind::JsxTag => "jsxTag".into(),
            TokenKind::JsxTagComponent => "jsxTagComponent".into(),
            TokenKind::JsxAttribute => "jsxAttr".into(),
            TokenKind::JsxText => "jsxText".into(),
            TokenKind::JsxDelimiter => "jsxDelimiter".into(),
            TokenKind::BracketDepth(d) => format!("bracket{}", d),
            TokenKind::BracketUnmatched => "bracketUnmatched".into(),
            TokenKind::BracketActive => "bracketActive".into(),
            TokenKind::Custom(tag) => tag.clone(),
        }
    }

    /// Parse a kind from its stable name
    ///
    /// Unknown names land in `Custom` so theme files can style kinds the
    /// core does not know about.
    pub fn from_name(name: &str) -> Self {
        match name {
            "comment" => TokenKind::Comment,
            "string" => TokenKind::Str,
            "regex" => TokenKind::Regex,
            "number" => TokenKind::Number,
            "keyword" => TokenKind::Keyword,
            "keywordDecl" => TokenKind::KeywordDecl,
            "function" => TokenKind::Function,
            "boolean" => TokenKind::Boolean,
            "null" => TokenKind::Null,
            "operator" => TokenKind::Operator,
            "punctuation" => TokenKind::Punctuation,
            "property" => TokenKind::Property,
            "variable" => TokenKind::Variable,
            "type" => TokenKind::Type,
            "jsxTag" => TokenKind::JsxTag,
            "jsxTagComponent" => TokenKind::JsxTagComponent,
            "jsxAttr" => TokenKind::JsxAttribute,
            "jsxText" => TokenKind::JsxText,
            "jsxDelimiter" => TokenKind::JsxDelimiter,
            "bracket0" => TokenKind::BracketDepth(0),
            "bracket1" => TokenKind::BracketDepth(1),
            "bracket2" => TokenKind::BracketDepth(2),
            "bracketUnmatched" => TokenKind::BracketUnmatched,
            "bracketActive" => TokenKind::BracketActive,
            other => TokenKind::Custom(other.to_string()),
        }
    }
}
