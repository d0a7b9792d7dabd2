//! The ordered rewrite pipeline.
//!
//! Each compiled rule is applied to the output of the previous one. The
//! result depends on the order of the rules; the order comes from the
//! `RuleTable` and is never changed here.

use log::trace;

use crate::rules::compiler::{CompiledRule, CompiledRules};

/// Applies a single rule to every match in `text`.
pub fn apply_rule(text: &str, rule: &CompiledRule) -> String {
    let rewritten = rule.regex.replace_all(text, rule.replace_with.as_str());
    if rewritten != text {
        trace!("Rule '{}' rewrote the text.", rule.name);
    }
    rewritten.into_owned()
}

/// Runs every rule in order, feeding each one the previous rule's output.
pub fn apply_rules(text: &str, rules: &CompiledRules) -> String {
    rules
        .rules
        .iter()
        .fold(text.to_string(), |acc, rule| apply_rule(&acc, rule))
}
