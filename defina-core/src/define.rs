//! `define.rs`
//! One-shot lookup: fetch a word from a source and clean its text.
//!
//! This is the entry point the CLI uses. It ties a [`SourceClient`] to the
//! [`NormalizationEngine`] for the same source.

use anyhow::Result;
use log::debug;

use crate::config::RuleTable;
use crate::engine::NormalizationEngine;
use crate::engines::html_engine::HtmlEngine;
use crate::engines::wikitext_engine::WikitextEngine;
use crate::source::{DictionarySource, LookupOutcome, SourceClient};

/// A looked-up word, ready for the output formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    /// The word as the user typed it.
    pub word: String,
    pub source: DictionarySource,
    /// Cleaned description, or the fallback text when nothing was found.
    pub description: String,
    /// False when `description` is a fallback.
    pub found: bool,
}

/// Builds the engine that cleans text from `source`.
pub fn build_engine(source: DictionarySource, table: RuleTable) -> Result<Box<dyn NormalizationEngine>> {
    let engine: Box<dyn NormalizationEngine> = match source {
        DictionarySource::Wiktionary => Box::new(WikitextEngine::new(table)?),
        DictionarySource::Dicio => Box::new(HtmlEngine::new(table)?),
    };
    Ok(engine)
}

/// Looks `word` up and returns its description.
///
/// Lookup failures become fallback descriptions; only engine failures are
/// returned as errors.
pub fn define_word(
    word: &str,
    client: &SourceClient,
    engine: &dyn NormalizationEngine,
) -> Result<Definition> {
    let source = client.source();
    let outcome = client.fetch(word);

    let (description, found) = match &outcome {
        LookupOutcome::Found(raw) => {
            debug!("Normalizing {} bytes of raw text from {}.", raw.len(), source);
            (engine.normalize(raw)?, true)
        }
        other => {
            let fallback = other.fallback(source).unwrap_or_default();
            debug!("Lookup of '{}' failed ({:?}); using fallback '{}'.", word, other, fallback);
            (fallback.to_string(), false)
        }
    };

    Ok(Definition {
        word: word.to_string(),
        source,
        description,
        found,
    })
}
