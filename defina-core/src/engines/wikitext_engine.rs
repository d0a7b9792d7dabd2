//! A `NormalizationEngine` for Wiktionary page sources.
//!
//! The raw wikitext is trimmed at the table's boundary markers, optionally cut
//! after its first definition list, rewritten by the ordered pipeline and
//! finally stripped of surrounding whitespace.
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::debug;
use std::sync::Arc;

use crate::config::{RuleTable, WIKTIONARY_TABLE};
use crate::engine::NormalizationEngine;
use crate::pipeline::apply_rules;
use crate::rules::compiler::{get_or_compile_rules, CompiledRules};
use crate::trimmer::{keep_first_marker_block, trim_at_markers};

#[derive(Debug)]
pub struct WikitextEngine {
    compiled_rules: Arc<CompiledRules>,
    table: RuleTable,
}

impl WikitextEngine {
    pub fn new(table: RuleTable) -> Result<Self> {
        let compiled_rules = get_or_compile_rules(&table)
            .context("Failed to compile rewrite rules for WikitextEngine")?;

        Ok(Self { compiled_rules, table })
    }

    /// Builds an engine from the built-in Wiktionary table.
    pub fn with_builtin_rules() -> Result<Self> {
        Self::new(RuleTable::load_builtin(WIKTIONARY_TABLE)?)
    }
}

impl NormalizationEngine for WikitextEngine {
    fn normalize(&self, raw: &str) -> Result<String> {
        let mut text = trim_at_markers(raw, &self.table.boundary_markers);
        if let Some(marker) = self.table.section_marker {
            text = keep_first_marker_block(text, marker);
        }
        debug!("Rewriting {} of {} bytes of wikitext.", text.len(), raw.len());

        let rewritten = apply_rules(text, &self.compiled_rules);
        Ok(rewritten.trim().to_string())
    }

    fn compiled_rules(&self) -> &CompiledRules {
        &self.compiled_rules
    }

    fn get_rules(&self) -> &RuleTable {
        &self.table
    }
}
