//! A `NormalizationEngine` for the Dicio description paragraph.
//!
//! The rule table strips the markup; the engine then breaks the description
//! into one capitalized clause per line, the way the site lays it out.
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::casing::capitalize;
use crate::config::{RuleTable, DICIO_TABLE};
use crate::engine::NormalizationEngine;
use crate::pipeline::apply_rules;
use crate::rules::compiler::{get_or_compile_rules, CompiledRules};
use crate::trimmer::trim_at_markers;

/// Separator between clauses in the raw description.
const CLAUSE_SEPARATOR: &str = "; ";
/// Separator between clauses in the output, indented under the headword.
const CLAUSE_JOINER: &str = ";\n    ";

#[derive(Debug)]
pub struct HtmlEngine {
    compiled_rules: Arc<CompiledRules>,
    table: RuleTable,
}

impl HtmlEngine {
    pub fn new(table: RuleTable) -> Result<Self> {
        let compiled_rules = get_or_compile_rules(&table)
            .context("Failed to compile rewrite rules for HtmlEngine")?;

        Ok(Self { compiled_rules, table })
    }

    /// Builds an engine from the built-in Dicio table.
    pub fn with_builtin_rules() -> Result<Self> {
        Self::new(RuleTable::load_builtin(DICIO_TABLE)?)
    }
}

impl NormalizationEngine for HtmlEngine {
    fn normalize(&self, raw: &str) -> Result<String> {
        let text = trim_at_markers(raw, &self.table.boundary_markers);
        let cleaned = apply_rules(text, &self.compiled_rules);

        let description = cleaned
            .split(CLAUSE_SEPARATOR)
            .map(capitalize)
            .collect::<Vec<String>>()
            .join(CLAUSE_JOINER);
        Ok(description.trim().to_string())
    }

    fn compiled_rules(&self) -> &CompiledRules {
        &self.compiled_rules
    }

    fn get_rules(&self) -> &RuleTable {
        &self.table
    }
}
