//! Error types for glint

use thiserror::Error;

/// Result type alias for glint operations
pub type Result<T> = std::result::Result<T, EditorError>;

/// Editor error types
///
/// Almost every fallible lookup in the engine falls back silently
/// (unknown language, unknown theme, invalid rule pattern). The one hard
/// contract violation is constructing an editable editor without a change
/// hook: dropped edits would corrupt the caller's state invisibly.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("a change hook is required when the editor is not read-only")]
    MissingChangeHook,
}
