//! Built-in language definitions

mod javascript;
mod python;

pub use javascript::javascript;
pub use python::python;

use super::rules::RuleSet;

/// All built-in language rule sets
pub fn all_languages() -> Vec<RuleSet> {
    vec![javascript(), python()]
}
