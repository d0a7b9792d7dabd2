//! errors.rs - Custom error types for the defina-core library.
//!
//! Lookup failures are not errors: they are reported as
//! [`LookupOutcome`](crate::source::LookupOutcome) values. The variants here
//! cover the things that make the tool unusable, such as a rule table that
//! does not compile or an origin that is not a URL.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types raised by `defina-core`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DefinaError {
    #[error("Failed to compile rewrite rule '{0}': {1}")]
    RuleCompilationError(String, regex::Error),

    #[error("Rule '{0}': pattern length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("Unknown built-in rule table '{0}'")]
    UnknownRuleTable(String),

    #[error("Invalid source origin '{0}': {1}")]
    InvalidOrigin(String, String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
