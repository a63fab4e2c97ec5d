//! Configuration file support
//!
//! Loads settings from ~/.glint.toml (or %USERPROFILE%\.glint.toml on
//! Windows).
//!
//! Example:
//! ```toml
//! indent-width = 4
//! line-numbers = true
//! theme = "dark"
//! language = "javascript"
//! ```

use std::fs;
use std::path::PathBuf;

use toml::Table;

use crate::error::Result;

/// Configuration settings
#[derive(Debug, Clone)]
pub struct Config {
    /// Width of one indentation unit, in spaces
    pub indent_width: usize,
    /// Whether to show line numbers
    pub line_numbers: bool,
    /// Theme name
    pub theme: String,
    /// Default language id
    pub language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent_width: 4,
            line_numbers: true,
            theme: "dark".to_string(),
            language: "javascript".to_string(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".glint.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".glint.toml"))
        }
    }

    /// Load configuration from file, falling back to defaults
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Some(path) = Self::config_path() {
            if let Ok(contents) = fs::read_to_string(&path) {
                if let Ok(table) = contents.parse::<Table>() {
                    config.apply(&table);
                }
            }
        }

        config
    }

    /// Apply settings from a parsed TOML table
    fn apply(&mut self, table: &Table) {
        if let Some(n) = table.get("indent-width").and_then(|v| v.as_integer()) {
            self.indent_width = (n.max(1) as usize).min(16);
        }
        if let Some(b) = table.get("line-numbers").and_then(|v| v.as_bool()) {
            self.line_numbers = b;
        }
        if let Some(s) = table.get("theme").and_then(|v| v.as_str()) {
            self.theme = s.to_string();
        }
        if let Some(s) = table.get("language").and_then(|v| v.as_str()) {
            self.language = s.to_string();
        }
    }

    /// The indent string one indentation step inserts
    pub fn indent_unit(&self) -> String {
        " ".repeat(self.indent_width)
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            let contents = format!(
                "# glint configuration\n\n\
                 indent-width = {}\n\
                 line-numbers = {}\n\
                 theme = \"{}\"\n\
                 language = \"{}\"\n",
                self.indent_width, self.line_numbers, self.theme, self.language
            );
            fs::write(path, contents)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_table() {
        let table: Table = r#"
indent-width = 2
line-numbers = false
theme = "light"
language = "python"
        "#
        .parse()
        .unwrap();

        let mut config = Config::default();
        config.apply(&table);

        assert_eq!(config.indent_width, 2);
        assert!(!config.line_numbers);
        assert_eq!(config.theme, "light");
        assert_eq!(config.language, "python");
    }

    #[test]
    fn test_indent_width_clamped() {
        let table: Table = "indent-width = 99".parse().unwrap();
        let mut config = Config::default();
        config.apply(&table);
        assert_eq!(config.indent_width, 16);
    }

    #[test]
    fn test_indent_unit() {
        let config = Config::default();
        assert_eq!(config.indent_unit(), "    ");
    }
}
