//! Concrete `NormalizationEngine` implementations, one per dictionary source.

pub mod html_engine;
pub mod wikitext_engine;
