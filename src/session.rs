//! Highlighting session: language and theme registries
//!
//! A session owns its registries instead of keeping them in process-wide
//! state, so editors with different language or theme catalogs can
//! coexist and tests can build isolated registries.

use std::collections::HashMap;

use crate::highlight::{builtin, RuleSet};
use crate::theme::{dark_theme, light_theme, Theme};

/// Identifier of the language used when a lookup misses
pub const DEFAULT_LANGUAGE: &str = "javascript";
/// Identifier of the theme used when a lookup misses
pub const DEFAULT_THEME: &str = "dark";

/// Owns the language and theme catalogs for a set of editors
pub struct Session {
    languages: HashMap<String, RuleSet>,
    themes: HashMap<String, Theme>,
}

impl Session {
    /// Create a session pre-loaded with the built-in languages and themes
    pub fn new() -> Self {
        let mut session = Self::empty();
        for lang in builtin::all_languages() {
            session.register_language(lang);
        }
        session.register_theme(dark_theme());
        session.register_theme(light_theme());
        session
    }

    /// Create a session with empty registries
    pub fn empty() -> Self {
        Self {
            languages: HashMap::new(),
            themes: HashMap::new(),
        }
    }

    /// Register a language rule set under its id
    pub fn register_language(&mut self, rules: RuleSet) {
        self.languages.insert(rules.id.clone(), rules);
    }

    /// Look up a language by id, case-insensitively
    ///
    /// Unregistered ids fall back to the default language; `None` only
    /// when the registry is empty.
    pub fn language(&self, id: &str) -> Option<&RuleSet> {
        self.languages
            .get(&id.to_lowercase())
            .or_else(|| self.languages.get(DEFAULT_LANGUAGE))
    }

    /// Register a theme under its name
    pub fn register_theme(&mut self, theme: Theme) {
        self.themes.insert(theme.name.clone(), theme);
    }

    /// Look up a theme by name, falling back to the default theme
    pub fn theme(&self, name: &str) -> Option<&Theme> {
        self.themes
            .get(name)
            .or_else(|| self.themes.get(DEFAULT_THEME))
    }

    /// Registered language ids, sorted
    pub fn language_ids(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.languages.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Registered theme names, sorted
    pub fn theme_ids(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.themes.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
