//! glint - incremental syntax highlighting with live editor behaviors
//!
//! The highlighting pipeline layers a priority-ordered regex lexer, a
//! JSX delimiter scan and a rainbow bracket analyzer, then flattens
//! them into one non-overlapping span sequence per keystroke. On top
//! of it sits an interaction state machine covering delimiter
//! auto-pairing, skip-over, keyword completion and context-sensitive
//! indentation. Languages and themes live in per-session registries,
//! so embedders can ship their own without touching the built-ins.

pub mod config;
pub mod editor;
pub mod error;
pub mod highlight;
pub mod input;
pub mod render;
pub mod session;
pub mod theme;

pub use config::Config;
pub use editor::{ChangeHook, Editor, EditorOptions, LayoutTask, MenuState};
pub use error::{EditorError, Result};
pub use highlight::{highlight, IndentStyle, Rule, RuleSet, Span, TokenKind};
pub use input::{translate_key, EditorEvent};
pub use render::{render_runs, RenderRun};
pub use session::Session;
pub use theme::{dark_theme, light_theme, Color, Theme};
