//! Defines the core NormalizationEngine trait.
//!
//! A `NormalizationEngine` turns the raw text of one dictionary source into
//! the styled description printed to the terminal. Each source gets its own
//! engine because the raw text differs (wikitext vs. an HTML paragraph), but
//! both are driven by a compiled `RuleTable`.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;

use crate::config::RuleTable;
use crate::rules::compiler::CompiledRules;

/// Converts raw source text into a display string.
pub trait NormalizationEngine: Send + Sync {
    /// Runs the full cleanup for this engine's source.
    ///
    /// The result is deterministic: the same input and table always give the
    /// same output.
    fn normalize(&self, raw: &str) -> Result<String>;

    /// Returns the compiled rules used by the engine.
    fn compiled_rules(&self) -> &CompiledRules;

    /// Returns the table the engine was built from.
    fn get_rules(&self) -> &RuleTable;
}
