//! Themes: classification kind to color mapping
//!
//! A theme maps token kinds to colors; kinds a theme does not mention
//! render unstyled. Colors cover the ANSI palette plus 24-bit values so
//! both terminal hosts and pixel hosts can consume them.

use std::collections::HashMap;

use crate::highlight::TokenKind;

/// Color values for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    Rgb(u8, u8, u8),
}

/// A kind-to-color mapping with editor chrome colors
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name
    pub name: String,
    /// Plain text color
    pub foreground: Color,
    /// Surface background color
    pub background: Color,
    colors: HashMap<TokenKind, Color>,
}

impl Theme {
    /// Create an empty theme
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            foreground: Color::Default,
            background: Color::Default,
            colors: HashMap::new(),
        }
    }

    /// Assign a color to a kind
    pub fn set(&mut self, kind: TokenKind, color: Color) {
        self.colors.insert(kind, color);
    }

    /// Color for a kind; `None` renders unstyled
    pub fn color_for(&self, kind: &TokenKind) -> Option<Color> {
        self.colors.get(kind).copied()
    }
}

/// The built-in dark theme (VS Code Dark+ inspired)
pub fn dark_theme() -> Theme {
    let mut theme = Theme::new("dark");
    theme.foreground = Color::Rgb(0xd4, 0xd4, 0xd4);
    theme.background = Color::Rgb(0x1e, 0x1e, 0x1e);
    theme.set(TokenKind::Keyword, Color::Rgb(0xc5, 0x86, 0xc0));
    theme.set(TokenKind::KeywordDecl, Color::Rgb(0x56, 0x9c, 0xd6));
    theme.set(TokenKind::Comment, Color::Rgb(0x6a, 0x99, 0x55));
    theme.set(TokenKind::Str, Color::Rgb(0xce, 0x91, 0x78));
    theme.set(TokenKind::Number, Color::Rgb(0xb5, 0xce, 0xa8));
    theme.set(TokenKind::Boolean, Color::Rgb(0x56, 0x9c, 0xd6));
    theme.set(TokenKind::Null, Color::Rgb(0x56, 0x9c, 0xd6));
    theme.set(TokenKind::Regex, Color::Rgb(0xd1, 0x69, 0x69));
    theme.set(TokenKind::Function, Color::Rgb(0xdc, 0xdc, 0xaa));
    theme.set(TokenKind::Variable, Color::Rgb(0x40, 0xb9, 0xfa));
    theme.set(TokenKind::Property, Color::Rgb(0x9c, 0xdc, 0xfe));
    theme.set(TokenKind::Operator, Color::Rgb(0xd4, 0xd4, 0xd4));
    theme.set(TokenKind::Punctuation, Color::Rgb(0xd4, 0xd4, 0xd4));
    theme.set(TokenKind::Type, Color::Rgb(0x4e, 0xc9, 0xb0));
    theme.set(TokenKind::JsxTag, Color::Rgb(0x56, 0x9c, 0xd6));
    theme.set(TokenKind::JsxTagComponent, Color::Rgb(0x4e, 0xc9, 0xb0));
    theme.set(TokenKind::JsxAttribute, Color::Rgb(0x9c, 0xdc, 0xfe));
    theme.set(TokenKind::JsxDelimiter, Color::Rgb(0x80, 0x80, 0x80));
    theme.set(TokenKind::BracketDepth(0), Color::Rgb(0xff, 0xd7, 0x00));
    theme.set(TokenKind::BracketDepth(1), Color::Rgb(0xda, 0x70, 0xd6));
    theme.set(TokenKind::BracketDepth(2), Color::Rgb(0x17, 0x9f, 0xff));
    theme.set(TokenKind::BracketUnmatched, Color::Rgb(0xf4, 0x47, 0x47));
    theme.set(TokenKind::BracketActive, Color::Rgb(0xff, 0xff, 0xff));
    theme
}

/// The built-in light theme
pub fn light_theme() -> Theme {
    let mut theme = Theme::new("light");
    theme.foreground = Color::Rgb(0x1a, 0x1a, 0x1a);
    theme.background = Color::Rgb(0xff, 0xff, 0xff);
    theme.set(TokenKind::Keyword, Color::Rgb(0xaf, 0x00, 0xdb));
    theme.set(TokenKind::KeywordDecl, Color::Rgb(0x00, 0x00, 0xff));
    theme.set(TokenKind::Comment, Color::Rgb(0x00, 0x80, 0x00));
    theme.set(TokenKind::Str, Color::Rgb(0xa3, 0x15, 0x15));
    theme.set(TokenKind::Number, Color::Rgb(0x09, 0x86, 0x58));
    theme.set(TokenKind::Boolean, Color::Rgb(0x00, 0x00, 0xff));
    theme.set(TokenKind::Null, Color::Rgb(0x00, 0x00, 0xff));
    theme.set(TokenKind::Regex, Color::Rgb(0x81, 0x1f, 0x3f));
    theme.set(TokenKind::Function, Color::Rgb(0x79, 0x5e, 0x26));
    theme.set(TokenKind::Operator, Color::Rgb(0x1a, 0x1a, 0x1a));
    theme.set(TokenKind::Punctuation, Color::Rgb(0x1a, 0x1a, 0x1a));
    theme.set(TokenKind::JsxDelimiter, Color::Rgb(0x80, 0x80, 0x80));
    theme.set(TokenKind::BracketDepth(0), Color::Rgb(0x04, 0x31, 0xfa));
    theme.set(TokenKind::BracketDepth(1), Color::Rgb(0x31, 0x93, 0x31));
    theme.set(TokenKind::BracketDepth(2), Color::Rgb(0x7b, 0x38, 0x14));
    theme.set(TokenKind::BracketUnmatched, Color::Rgb(0xb3, 0x1d, 0x28));
    theme.set(TokenKind::BracketActive, Color::Rgb(0x00, 0x00, 0x00));
    theme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_kind_unstyled() {
        let theme = Theme::new("empty");
        assert_eq!(theme.color_for(&TokenKind::Keyword), None);
    }

    #[test]
    fn test_dark_theme_covers_brackets() {
        let theme = dark_theme();
        for depth in 0..3 {
            assert!(theme.color_for(&TokenKind::BracketDepth(depth)).is_some());
        }
        assert!(theme.color_for(&TokenKind::BracketUnmatched).is_some());
        assert!(theme.color_for(&TokenKind::BracketActive).is_some());
    }

    #[test]
    fn test_custom_kind_stylable() {
        let mut theme = Theme::new("t");
        let kind = TokenKind::Custom("decorator".to_string());
        theme.set(kind.clone(), Color::BrightCyan);
        assert_eq!(theme.color_for(&kind), Some(Color::BrightCyan));
    }
}
