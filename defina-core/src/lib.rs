//! # defina Core Library
//!
//! `defina-core` holds everything behind the `defina` command except the
//! terminal: the rule tables that clean dictionary text, the ordered rewrite
//! pipeline that applies them, accent folding for lookup keys, and the
//! blocking HTTP fetch against Wiktionary or Dicio.
//!
//! ## Modules
//!
//! * `config`: `RewriteRule` and `RuleTable`, built-in tables, loading and merging.
//! * `rules`: compilation of tables into cached regexes.
//! * `trimmer`: boundary-marker truncation and the line-based section splitter.
//! * `pipeline`: the ordered fold of compiled rules over a text.
//! * `engine`: the `NormalizationEngine` trait.
//! * `engines`: the wikitext and HTML engines.
//! * `fold`: accent folding.
//! * `source`: dictionary sources, lookup outcomes and the HTTP client.
//! * `define`: one-shot lookup for a word.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use defina_core::{build_engine, define_word, DictionarySource, FetchOptions, RuleTable, SourceClient};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let source = DictionarySource::Wiktionary;
//!     let table = RuleTable::load_builtin(source.table_name())?;
//!     let engine = build_engine(source, table)?;
//!     let client = SourceClient::new(source, None, &FetchOptions::default())?;
//!
//!     let definition = define_word("casa", &client, engine.as_ref())?;
//!     println!("{}", definition.description);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! A word that cannot be found is not an error: it comes back as a
//! `Definition` holding a fallback text. Errors (`anyhow::Error`, wrapping
//! `DefinaError` where specific) are reserved for broken rule tables and
//! unusable client settings.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod casing;
pub mod config;
pub mod define;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod fold;
pub mod pipeline;
pub mod rules;
pub mod source;
pub mod trimmer;

/// Re-exports the rule table types and functions.
pub use config::{merge_rules, RewriteRule, RuleTable, DICIO_TABLE, MAX_PATTERN_LENGTH, WIKTIONARY_TABLE};

pub use errors::DefinaError;

pub use engine::NormalizationEngine;
pub use engines::html_engine::HtmlEngine;
pub use engines::wikitext_engine::WikitextEngine;

pub use rules::compiler::{compile_rules, get_or_compile_rules, CompiledRule, CompiledRules};

pub use pipeline::{apply_rule, apply_rules};
pub use trimmer::{keep_first_marker_block, trim_at_markers};
pub use fold::fold_accents;
pub use casing::{capitalize, title_case};

pub use source::{
    encode_word, fallback_for_status, DictionarySource, FetchFailure, FetchOptions, LookupOutcome,
    SourceClient, WordEncoding,
};

pub use define::{build_engine, define_word, Definition};
