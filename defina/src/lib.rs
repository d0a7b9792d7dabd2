//! # defina CLI Application
//!
//! This crate provides the terminal interface for `defina-core`: argument
//! parsing, logging setup, the `define` command and output formatting.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
