//! compiler.rs - Manages the compilation and caching of rewrite rules.
//!
//! This module converts a `RuleTable` into `CompiledRules`. It uses a global,
//! shared cache to avoid recompiling the same table.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;
use lazy_static::lazy_static;
use log::debug;
use regex::{Regex, RegexBuilder};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use crate::config::{RewriteRule, RuleTable, MAX_PATTERN_LENGTH};
use crate::errors::DefinaError;

/// A single compiled rewrite rule.
#[derive(Debug)]
pub struct CompiledRule {
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    /// Replacement text, with `${n}` capture references.
    pub replace_with: String,
    /// The name of the rule in its table.
    pub name: String,
}

/// The enabled rules of a table, in table order.
#[derive(Debug)]
pub struct CompiledRules {
    pub rules: Vec<CompiledRule>,
}

impl CompiledRules {
    /// Looks up a compiled rule by name.
    pub fn get(&self, name: &str) -> Option<&CompiledRule> {
        self.rules.iter().find(|r| r.name == name)
    }
}

lazy_static! {
    /// A thread-safe, global cache for compiled rules.
    /// The key is a hash of the whole `RuleTable`.
    static ref COMPILED_RULES_CACHE: RwLock<HashMap<u64, Arc<CompiledRules>>> = RwLock::new(HashMap::new());
}

/// Hashes the table to create the cache key.
///
/// Rule order is part of the hash, since reordering changes the output.
fn hash_table(table: &RuleTable) -> u64 {
    let mut hasher = DefaultHasher::new();
    table.hash(&mut hasher);
    hasher.finish()
}

/// Compiles the enabled rules of a list into `CompiledRules`, preserving order.
///
/// Every failing rule is reported, not just the first one.
pub fn compile_rules(rules_to_compile: Vec<RewriteRule>) -> Result<CompiledRules, DefinaError> {
    debug!("Starting compilation of {} rules.", rules_to_compile.len());

    let mut compiled_rules = Vec::new();
    let mut compilation_errors = Vec::new();

    for rule in rules_to_compile {
        if !rule.is_enabled() {
            debug!("Skipping disabled rule '{}'.", rule.name);
            continue;
        }

        if rule.pattern.len() > MAX_PATTERN_LENGTH {
            compilation_errors.push(DefinaError::PatternLengthExceeded(
                rule.name,
                rule.pattern.len(),
                MAX_PATTERN_LENGTH,
            ));
            continue;
        }

        let regex_result = RegexBuilder::new(&rule.pattern)
            .multi_line(rule.multiline)
            .dot_matches_new_line(rule.dot_matches_new_line)
            .size_limit(10 * (1 << 20))
            .build();

        match regex_result {
            Ok(regex) => {
                debug!(
                    target: "defina_core::rules",
                    "Rule '{}' compiled successfully.",
                    &rule.name
                );
                compiled_rules.push(CompiledRule {
                    regex,
                    replace_with: rule.replace_with,
                    name: rule.name,
                });
            }
            Err(e) => {
                compilation_errors.push(DefinaError::RuleCompilationError(rule.name, e));
            }
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        Err(DefinaError::Fatal(format!(
            "Failed to compile {} rule(s):\n{}",
            compilation_errors.len(),
            error_message
        )))
    } else {
        debug!("Finished compiling rules. Total compiled: {}.", compiled_rules.len());
        Ok(CompiledRules { rules: compiled_rules })
    }
}

/// Gets a `CompiledRules` instance from the cache or compiles it if not found.
pub fn get_or_compile_rules(table: &RuleTable) -> Result<Arc<CompiledRules>> {
    let cache_key = hash_table(table);

    {
        let cache = COMPILED_RULES_CACHE.read().unwrap_or_else(|e| e.into_inner());
        if let Some(rules) = cache.get(&cache_key) {
            debug!("Serving compiled rules from cache for key: {}", &cache_key);
            return Ok(Arc::clone(rules));
        }
    }

    debug!("Compiled rules for table '{}' not found in cache. Compiling now.", table.name);
    let compiled = Arc::new(compile_rules(table.rules.clone())?);

    COMPILED_RULES_CACHE
        .write()
        .unwrap_or_else(|e| e.into_inner())
        .insert(cache_key, Arc::clone(&compiled));

    debug!("Successfully compiled and cached rules for key: {}", &cache_key);
    Ok(compiled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str, pattern: &str) -> RewriteRule {
        RewriteRule {
            name: name.to_string(),
            pattern: pattern.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn compile_keeps_order_and_skips_disabled() {
        let mut disabled = rule("b", "b");
        disabled.enabled = Some(false);
        let compiled = compile_rules(vec![rule("c", "c"), disabled, rule("a", "a")]).unwrap();
        let names: Vec<&str> = compiled.rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a"]);
    }

    #[test]
    fn compile_reports_every_failure() {
        let long = "a".repeat(MAX_PATTERN_LENGTH + 1);
        let err = compile_rules(vec![rule("broken", "("), rule("long", &long)]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Failed to compile 2 rule(s)"));
        assert!(message.contains("'broken'"));
        assert!(message.contains("exceeds maximum allowed"));
    }

    #[test]
    fn cache_returns_shared_instance() {
        let table = RuleTable {
            name: "cache-test".into(),
            rules: vec![rule("x", "x+")],
            ..Default::default()
        };
        let first = get_or_compile_rules(&table).unwrap();
        let second = get_or_compile_rules(&table).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn reordered_table_is_a_different_cache_entry() {
        let forward = RuleTable {
            name: "order-test".into(),
            rules: vec![rule("x", "x"), rule("y", "y")],
            ..Default::default()
        };
        let mut backward = forward.clone();
        backward.rules.reverse();
        let a = get_or_compile_rules(&forward).unwrap();
        let b = get_or_compile_rules(&backward).unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(b.rules[0].name, "y");
    }
}
