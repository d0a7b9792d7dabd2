//! Compilation of rule tables into ready-to-apply regexes.
//!
//! Tables are compiled once per process and cached by content hash, so an
//! engine built twice from the same table shares one set of regexes.

pub mod compiler;
