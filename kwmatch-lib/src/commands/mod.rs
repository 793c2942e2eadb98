//! Command-line interface and orchestration for kwmatch
//!
//! This module implements the CLI commands and wires report sources, the aggregation
//! passes, and the report generators together. It handles argument parsing,
//! configuration management, and the high-level workflows.
//!
//! # Implementation Model
//!
//! The module is organized around four commands:
//!
//! ## Commands
//!
//! - **match-type**: Read keyword-view rows, run the keyword pass, and report the
//!   match type comparison views and campaign information
//! - **search-term**: Read search-term-view rows, run the search term pass, and report
//!   the search term comparison views
//! - **init**: Generate a default configuration file
//! - **validate**: Check configuration file syntax and values
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap and routes
//! to the appropriate command handler. Both report commands follow the same pattern:
//!
//! 1. Parse arguments, initialize logging, and load configuration
//! 2. Open each input and drop rows the report query would have excluded
//! 3. Feed the remaining rows through the pass for the command
//! 4. Generate reports from the resulting tables
//!
//! The `common` module provides the shared pieces: logging setup, color mode
//! handling, input processing, and report generation across output formats.

mod common;
mod config;
mod host;
mod init;
mod process;
mod run;
mod validate;

#[cfg(debug_assertions)]
pub use config::Config;

pub use host::Host;
pub use init::{InitArgs, init_config};
pub use process::{ProcessArgs, process_match_types, process_search_terms};
pub use run::run;
pub use validate::{ValidateArgs, validate_config};
