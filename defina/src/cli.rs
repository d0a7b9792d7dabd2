//! This file defines the command-line interface (CLI) for the defina application.
//! License: MIT OR Apache-2.0

use clap::{Parser, ValueEnum};
use defina_core::DictionarySource;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "defina",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Look up the meaning of a Portuguese word",
    long_about = "defina fetches the definition of a word from Portuguese Wiktionary or Dicio, cleans up the wiki markup or HTML, and prints a colorized definition to the terminal.",
)]
pub struct Cli {
    /// The word to look up.
    #[arg(value_name = "WORD")]
    pub word: Option<String>,

    /// Where to look the word up.
    #[arg(long, short = 's', value_enum, default_value = "wiktionary", help = "Dictionary to look the word up in.")]
    pub source: SourceChoice,

    /// Percent-encode the word instead of stripping its accents (Wiktionary only).
    #[arg(long = "keep-accents", help = "Percent-encode the word instead of stripping its accents (Wiktionary only).")]
    pub keep_accents: bool,

    /// Path to a YAML rule table merged over the built-in one.
    #[arg(long = "rules", value_name = "FILE", help = "Path to a YAML rule table merged over the built-in one.")]
    pub rules: Option<PathBuf>,

    /// Disable these rewrite rules (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',', help = "Disable these rewrite rules (comma-separated).")]
    pub disable: Vec<String>,

    /// HTTP timeout in seconds.
    #[arg(long, value_name = "SECS", default_value_t = 10, help = "HTTP timeout in seconds.")]
    pub timeout: u64,

    /// Print plain text without ANSI styling.
    #[arg(long = "no-color", help = "Print plain text without ANSI styling.")]
    pub no_color: bool,

    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all log messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    #[arg(long = "wiktionary-url", env = "DEFINA_WIKTIONARY_URL", hide = true)]
    pub wiktionary_url: Option<String>,

    #[arg(long = "dicio-url", env = "DEFINA_DICIO_URL", hide = true)]
    pub dicio_url: Option<String>,
}

impl Cli {
    /// The origin override for the selected source, if any.
    pub fn origin(&self) -> Option<&str> {
        match self.source {
            SourceChoice::Wiktionary => self.wiktionary_url.as_deref(),
            SourceChoice::Dicio => self.dicio_url.as_deref(),
        }
    }
}

/// Enum for selecting the dictionary source.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum SourceChoice {
    /// Portuguese Wiktionary (REST API, wikitext).
    Wiktionary,
    /// dicio.com.br (HTML page).
    Dicio,
}

impl From<SourceChoice> for DictionarySource {
    fn from(choice: SourceChoice) -> Self {
        match choice {
            SourceChoice::Wiktionary => DictionarySource::Wiktionary,
            SourceChoice::Dicio => DictionarySource::Dicio,
        }
    }
}
