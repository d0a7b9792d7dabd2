//! The `define` command: look one word up and print its definition.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use defina_core::{
    build_engine, define_word, merge_rules, DictionarySource, FetchOptions, RuleTable,
    SourceClient, WordEncoding,
};

use crate::cli::Cli;
use crate::ui::output_format::{format_definition, strip_styles};

/// Printed instead of a definition when no word was given.
pub const NO_WORD_MESSAGE: &str = "No search word provided";

/// Everything one lookup needs, detached from clap.
#[derive(Debug, Clone)]
pub struct DefineOptions {
    pub word: Option<String>,
    pub source: DictionarySource,
    pub encoding: WordEncoding,
    /// Overrides the source's public endpoint.
    pub origin: Option<String>,
    pub rules_file: Option<PathBuf>,
    pub disable: Vec<String>,
    pub timeout: Duration,
    /// Keep ANSI styling in the output.
    pub color: bool,
}

impl DefineOptions {
    pub fn from_cli(cli: &Cli, color: bool) -> Self {
        Self {
            word: cli.word.clone(),
            source: cli.source.into(),
            encoding: if cli.keep_accents {
                WordEncoding::PercentEncode
            } else {
                WordEncoding::Fold
            },
            origin: cli.origin().map(str::to_string),
            rules_file: cli.rules.clone(),
            disable: cli.disable.clone(),
            timeout: Duration::from_secs(cli.timeout),
            color,
        }
    }
}

/// Builds the rule table for the selected source: built-in rules, then the
/// user's file, then the disable list.
fn load_rule_table(opts: &DefineOptions) -> Result<RuleTable> {
    let builtin = RuleTable::load_builtin(opts.source.table_name())
        .context("Failed to load built-in rewrite rules")?;

    let user = match &opts.rules_file {
        Some(path) => Some(
            RuleTable::load_from_file(path)
                .context("Failed to load user-defined rule file")?,
        ),
        None => None,
    };

    let mut table = merge_rules(builtin, user);
    table.set_disabled_rules(&opts.disable);
    Ok(table)
}

/// Runs one lookup and writes the formatted result to `writer`.
///
/// A missing word prints a notice and returns `Ok` without touching the
/// network. Lookup failures print their fallback text; only broken rule
/// tables or client settings are errors.
pub fn run_define<W: Write>(opts: DefineOptions, writer: &mut W) -> Result<()> {
    let word = match opts.word.as_deref().map(str::trim) {
        Some(word) if !word.is_empty() => word.to_string(),
        _ => {
            info!("No word given; nothing to look up.");
            writeln!(writer, "\n{}\n", NO_WORD_MESSAGE)?;
            return Ok(());
        }
    };

    let table = load_rule_table(&opts)?;
    debug!("Using rule table '{}' v{} with {} rules.", table.name, table.version, table.rules.len());
    let engine = build_engine(opts.source, table)?;

    let fetch_options = FetchOptions {
        timeout: opts.timeout,
        ..FetchOptions::default()
    };
    let client = SourceClient::new(opts.source, opts.origin.as_deref(), &fetch_options)
        .context("Failed to set up the dictionary client")?
        .with_encoding(opts.encoding);

    let definition = define_word(&word, &client, engine.as_ref())?;
    info!("Lookup of '{}' finished (found: {}).", word, definition.found);

    let formatted = format_definition(&definition);
    let output = if opts.color { formatted } else { strip_styles(&formatted) };
    writeln!(writer, "{}", output)?;
    Ok(())
}
