//! Configuration management for `defina-core`.
//!
//! This module defines the rule tables that drive text normalization. A
//! [`RuleTable`] is an ordered, versioned list of [`RewriteRule`]s plus the
//! section boundary markers used to trim the raw text before rewriting.
//! Tables are plain YAML: the built-in ones are embedded in the binary and a
//! user table can be loaded from disk and merged over them.
//!
//! Rule order is part of the table's contract. Later rules routinely consume
//! what earlier rules leave behind (escape sequences, bullet glyphs, collapsed
//! blank lines), so loading, merging and filtering never reorder rules.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use log::{debug, info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::errors::DefinaError;

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Name of the built-in table for the Wiktionary source.
pub const WIKTIONARY_TABLE: &str = "wiktionary";
/// Name of the built-in table for the Dicio source.
pub const DICIO_TABLE: &str = "dicio";

lazy_static! {
    static ref CAPTURE_REFERENCE: Regex = Regex::new(r"\$\{?(\d+)\}?").unwrap();
}

/// A single substitution step of the rewrite pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct RewriteRule {
    /// Unique identifier for the rule within its table (e.g., "list_bullets").
    pub name: String,
    /// Human-readable description of what the rule rewrites.
    pub description: Option<String>,
    /// The regex pattern string.
    pub pattern: String,
    /// Literal replacement text. `${1}` style references pull in capture groups.
    pub replace_with: String,
    /// If true, `^` and `$` match at line boundaries.
    pub multiline: bool,
    /// If true, the dot character `.` in regex will match newlines.
    pub dot_matches_new_line: bool,
    /// Explicit override for enabling/disabling the rule.
    pub enabled: Option<bool>,
}

impl Default for RewriteRule {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            pattern: String::new(),
            replace_with: String::new(),
            multiline: false,
            dot_matches_new_line: false,
            enabled: None,
        }
    }
}

impl RewriteRule {
    /// Returns `false` only when the rule was explicitly disabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

/// The canonical, versioned rule table for one dictionary source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct RuleTable {
    pub name: String,
    pub version: String,
    /// Substrings that start an irrelevant section, applied in this order.
    pub boundary_markers: Vec<String>,
    /// Marker character for the line-based section splitter, if any.
    pub section_marker: Option<char>,
    /// Rewrite rules, applied strictly in this order.
    pub rules: Vec<RewriteRule>,
}

impl RuleTable {
    /// Loads one of the tables embedded in the binary.
    pub fn load_builtin(name: &str) -> Result<Self> {
        debug!("Loading built-in rule table '{}' from embedded string...", name);
        let yaml = match name {
            WIKTIONARY_TABLE => include_str!("../config/wiktionary.yaml"),
            DICIO_TABLE => include_str!("../config/dicio.yaml"),
            other => return Err(DefinaError::UnknownRuleTable(other.to_string()).into()),
        };
        let table: RuleTable = serde_yml::from_str(yaml)
            .with_context(|| format!("Failed to parse built-in rule table '{}'", name))?;

        debug!("Loaded {} rules for table '{}' (v{}).", table.rules.len(), table.name, table.version);
        Ok(table)
    }

    /// Loads a rule table from a YAML file and validates it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom rules from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read rule file {}", path.display()))?;
        let table: RuleTable = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse rule file {}", path.display()))?;

        validate_rules(&table.rules)?;
        info!("Loaded {} rules from file {}.", table.rules.len(), path.display());

        Ok(table)
    }

    /// Looks up a rule by name.
    pub fn rule(&self, name: &str) -> Option<&RewriteRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Disables the named rules, keeping their position in the table.
    pub fn set_disabled_rules(&mut self, disable_rules: &[String]) {
        let disable_set: HashSet<&str> = disable_rules.iter().map(String::as_str).collect();
        let all_rule_names: HashSet<&str> = self.rules.iter().map(|r| r.name.as_str()).collect();

        for rule_name in disable_set.difference(&all_rule_names) {
            warn!("Rule '{}' in `disable` list does not exist.", rule_name);
        }

        for rule in self.rules.iter_mut() {
            if disable_set.contains(rule.name.as_str()) {
                debug!("Disabling rule '{}'.", rule.name);
                rule.enabled = Some(false);
            }
        }
    }
}

/// Merges a user table over a built-in one.
///
/// A user rule whose name already exists replaces the built-in rule at the
/// same position. New rules are appended after the built-in ones. A non-empty
/// user marker list replaces the built-in markers, and a user section marker
/// overrides the built-in one.
pub fn merge_rules(default_table: RuleTable, user_table: Option<RuleTable>) -> RuleTable {
    debug!("merge_rules called. Initial default rules count: {}", default_table.rules.len());

    let Some(user) = user_table else {
        return default_table;
    };

    let mut merged = default_table;
    debug!("User table provided. Merging {} user rules.", user.rules.len());

    for user_rule in user.rules {
        match merged.rules.iter_mut().find(|r| r.name == user_rule.name) {
            Some(existing) => {
                debug!("Replacing rule '{}' with user definition.", user_rule.name);
                *existing = user_rule;
            }
            None => merged.rules.push(user_rule),
        }
    }

    if !user.boundary_markers.is_empty() {
        debug!("Overriding boundary markers with {} user markers.", user.boundary_markers.len());
        merged.boundary_markers = user.boundary_markers;
    }
    if user.section_marker.is_some() {
        merged.section_marker = user.section_marker;
    }
    if !user.version.is_empty() {
        merged.version = format!("{}+{}", merged.version, user.version);
    }

    debug!("Final total rules after merge: {}", merged.rules.len());
    merged
}

/// Validates rule integrity (names, regex compilation, capture references).
fn validate_rules(rules: &[RewriteRule]) -> Result<()> {
    let mut rule_names = HashSet::new();
    let mut errors = Vec::new();

    for rule in rules {
        if rule.name.is_empty() {
            errors.push("A rule has an empty `name` field.".to_string());
        } else if !rule_names.insert(rule.name.clone()) {
            errors.push(format!("Duplicate rule name found: '{}'.", rule.name));
        }

        if rule.pattern.is_empty() {
            errors.push(format!("Rule '{}' has an empty `pattern` field.", rule.name));
            continue;
        }

        let regex = match Regex::new(&rule.pattern) {
            Ok(regex) => regex,
            Err(e) => {
                errors.push(format!("Rule '{}' has an invalid regex pattern: {}", rule.name, e));
                continue;
            }
        };
        let group_count = regex.captures_len() - 1;

        for cap in CAPTURE_REFERENCE.captures_iter(&rule.replace_with) {
            if let Some(group_num) = cap.get(1).and_then(|g| g.as_str().parse::<usize>().ok()) {
                if group_num > group_count {
                    errors.push(format!(
                        "Rule '{}': replacement references non-existent capture group '${}'.",
                        rule.name, group_num
                    ));
                }
            }
        }
    }

    if !errors.is_empty() {
        Err(anyhow!("Rule validation failed:\n{}", errors.join("\n")))
    } else {
        Ok(())
    }
}
