//! Highlighting pipeline
//!
//! Three passes feed the composer: the lexer classifies text against a
//! language's rule set, the JSX scan marks tag delimiters, and the
//! bracket analyzer (masked by the lexer's strings/comments) colors
//! delimiter nesting. The composer flattens the layers into one
//! non-overlapping span sequence for rendering.

pub mod brackets;
pub mod builtin;
pub mod compose;
pub mod jsx;
pub mod kinds;
pub mod lexer;
pub mod rules;
pub mod span;

pub use brackets::{analyze, BracketAnalysis, DelimiterFamily};
pub use compose::compose;
pub use kinds::TokenKind;
pub use lexer::tokenize;
pub use rules::{IndentStyle, Rule, RuleSet};
pub use span::Span;

/// Run the full pipeline: lexer, JSX scan, brackets, composition
///
/// The caret offset, when supplied, selects the active bracket pair.
/// Layer order is fixed so bracket kinds take priority ties over lexical
/// kinds.
pub fn highlight(text: &str, language: &RuleSet, caret: Option<usize>) -> Vec<Span> {
    let lexical = tokenize(text, language);
    let jsx_spans = if language.jsx {
        jsx::scan_delimiters(text)
    } else {
        Vec::new()
    };
    let bracket_spans = analyze(text, &lexical, caret).into_spans();
    compose(text, &[&lexical, &jsx_spans, &bracket_spans])
}
