//! Dictionary sources and the single HTTP GET each lookup makes.
//!
//! Fetching never fails with an error. Every way a lookup can go wrong is a
//! [`LookupOutcome`] that the caller matches on and turns into one of the
//! fixed fallback strings.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use log::{debug, info, warn};
use regex::Regex;
use reqwest::blocking::Client;
use reqwest::Url;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

use crate::config::{DICIO_TABLE, WIKTIONARY_TABLE};
use crate::errors::DefinaError;
use crate::fold::fold_accents;

pub const WIKTIONARY_ORIGIN: &str = "https://pt.wiktionary.org/w/rest.php/v1/page/";
pub const DICIO_ORIGIN: &str = "https://www.dicio.com.br/";

/// Dicio serves this text instead of a 404 for words it knows nothing about.
pub const DICIO_NOT_FOUND_MARKER: &str = "Ainda não temos o significado";

/// Fallback for Wiktionary failures with no status-specific text.
pub const GENERIC_FALLBACK: &str = "Result not Found";
/// Fallback for every Dicio failure.
pub const DICIO_FALLBACK: &str = "Result not found";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

lazy_static! {
    static ref DICIO_DESCRIPTION: Regex =
        Regex::new(r#"<p itemprop="description" class=*(.*)</p>"#).unwrap();
}

/// The online sources a word can be looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DictionarySource {
    /// pt.wiktionary.org REST API; the page source is wikitext.
    #[default]
    Wiktionary,
    /// dicio.com.br; the description is scraped from the HTML page.
    Dicio,
}

impl DictionarySource {
    pub fn default_origin(self) -> &'static str {
        match self {
            DictionarySource::Wiktionary => WIKTIONARY_ORIGIN,
            DictionarySource::Dicio => DICIO_ORIGIN,
        }
    }

    /// Name of the built-in rule table that cleans this source's text.
    pub fn table_name(self) -> &'static str {
        match self {
            DictionarySource::Wiktionary => WIKTIONARY_TABLE,
            DictionarySource::Dicio => DICIO_TABLE,
        }
    }
}

impl fmt::Display for DictionarySource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

/// How the word is turned into the URL path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordEncoding {
    /// Lower-case and strip diacritics: "Maçã" → "maca".
    #[default]
    Fold,
    /// Lower-case and percent-encode, keeping diacritics.
    PercentEncode,
}

/// Why a fetch produced no usable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// The server answered with a non-2xx status.
    Status(u16),
    /// The request never got a response (DNS, TLS, timeout, refused).
    Transport(String),
    /// The response body was not what the source promises.
    Decode(String),
}

/// The result of looking a word up in a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Raw source text, ready for the normalization engine.
    Found(String),
    /// The source answered but has no entry for the word.
    NotFound,
    Failed(FetchFailure),
}

impl LookupOutcome {
    /// The fixed text shown in place of a description, or `None` if the word
    /// was found.
    pub fn fallback(&self, source: DictionarySource) -> Option<&'static str> {
        match (self, source) {
            (LookupOutcome::Found(_), _) => None,
            (_, DictionarySource::Dicio) => Some(DICIO_FALLBACK),
            (LookupOutcome::Failed(FetchFailure::Status(code)), DictionarySource::Wiktionary) => {
                Some(fallback_for_status(*code))
            }
            (_, DictionarySource::Wiktionary) => Some(GENERIC_FALLBACK),
        }
    }
}

/// Maps an HTTP status to the message shown instead of a definition.
pub fn fallback_for_status(status: u16) -> &'static str {
    match status {
        400 => "Bad request",
        401 => "Unauthorized request",
        403 => "Forbidden",
        404 => "Not found",
        500 => "Something is wrong with the server",
        _ => GENERIC_FALLBACK,
    }
}

/// Lower-cases the word and, for [`WordEncoding::Fold`], strips diacritics.
pub fn encode_word(word: &str, encoding: WordEncoding) -> String {
    let lowered = word.to_lowercase();
    match encoding {
        WordEncoding::Fold => fold_accents(&lowered),
        WordEncoding::PercentEncode => lowered,
    }
}

/// Pulls the description paragraph out of a Dicio page.
pub fn extract_dicio_description(page: &str) -> Option<&str> {
    DICIO_DESCRIPTION.find(page).map(|m| m.as_str())
}

/// HTTP settings shared by both sources.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("defina/{} (dictionary lookup CLI)", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[derive(Deserialize)]
struct PageSource {
    source: String,
}

/// A blocking client bound to one source and origin.
#[derive(Debug)]
pub struct SourceClient {
    client: Client,
    origin: Url,
    source: DictionarySource,
    encoding: WordEncoding,
}

impl SourceClient {
    /// Creates a client for `source`. `origin` defaults to the source's public
    /// endpoint.
    pub fn new(
        source: DictionarySource,
        origin: Option<&str>,
        options: &FetchOptions,
    ) -> Result<Self, DefinaError> {
        let origin_str = origin.unwrap_or_else(|| source.default_origin());
        let origin = Url::parse(origin_str)
            .map_err(|e| DefinaError::InvalidOrigin(origin_str.to_string(), e.to_string()))?;
        if origin.cannot_be_a_base() {
            return Err(DefinaError::InvalidOrigin(
                origin_str.to_string(),
                "URL cannot take path segments".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            origin,
            source,
            encoding: WordEncoding::Fold,
        })
    }

    /// Sets the word encoding. Dicio only serves folded words, so it always
    /// folds regardless of this setting.
    pub fn with_encoding(mut self, encoding: WordEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn source(&self) -> DictionarySource {
        self.source
    }

    pub fn encoding(&self) -> WordEncoding {
        match self.source {
            DictionarySource::Dicio => WordEncoding::Fold,
            DictionarySource::Wiktionary => self.encoding,
        }
    }

    /// The URL fetched for `word`: the origin with the encoded word appended
    /// as one path segment.
    pub fn lookup_url(&self, word: &str) -> Url {
        let key = encode_word(word, self.encoding());
        let mut url = self.origin.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&key);
        }
        url
    }

    /// Performs the lookup. Exactly one GET is sent.
    pub fn fetch(&self, word: &str) -> LookupOutcome {
        let url = self.lookup_url(word);
        info!("Looking up '{}' on {} at {}", word, self.source, url);

        let response = match self.client.get(url).send() {
            Ok(response) => response,
            Err(e) => {
                warn!("Request to {} failed: {}", self.source, e);
                return LookupOutcome::Failed(FetchFailure::Transport(e.to_string()));
            }
        };

        let status = response.status();
        debug!("{} answered with status {}", self.source, status);
        if !status.is_success() {
            warn!("{} returned HTTP {} for '{}'", self.source, status.as_u16(), word);
            return match self.source {
                DictionarySource::Dicio => LookupOutcome::NotFound,
                DictionarySource::Wiktionary => {
                    LookupOutcome::Failed(FetchFailure::Status(status.as_u16()))
                }
            };
        }

        let body = match response.text() {
            Ok(body) => body,
            Err(e) => {
                warn!("Could not read {} response body: {}", self.source, e);
                return LookupOutcome::Failed(FetchFailure::Decode(e.to_string()));
            }
        };

        match self.source {
            DictionarySource::Wiktionary => wiktionary_outcome(&body),
            DictionarySource::Dicio => dicio_outcome(&body),
        }
    }
}

fn wiktionary_outcome(body: &str) -> LookupOutcome {
    match serde_json::from_str::<PageSource>(body) {
        Ok(page) => LookupOutcome::Found(page.source),
        Err(e) => {
            warn!("Could not decode Wiktionary page: {}", e);
            LookupOutcome::Failed(FetchFailure::Decode(e.to_string()))
        }
    }
}

fn dicio_outcome(page: &str) -> LookupOutcome {
    match extract_dicio_description(page) {
        Some(paragraph) if paragraph.contains(DICIO_NOT_FOUND_MARKER) => {
            debug!("Dicio has no meaning for this word yet.");
            LookupOutcome::NotFound
        }
        Some(paragraph) => LookupOutcome::Found(paragraph.to_string()),
        None => {
            debug!("No description paragraph in Dicio page.");
            LookupOutcome::NotFound
        }
    }
}
