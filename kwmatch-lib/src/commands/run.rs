//! Command dispatch logic for kwmatch

use super::{InitArgs, ProcessArgs, ValidateArgs, init_config, process_match_types, process_search_terms, validate_config};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "kwmatch", author, version, long_about = None, display_name = "kwmatch")]
#[command(about = "Compare keyword performance across match types")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: KwmatchSubcommand,
}

#[derive(Subcommand, Debug)]
enum KwmatchSubcommand {
    /// Compare keywords across match types using keyword-view report rows
    MatchType(Box<ProcessArgs>),
    /// Compare search terms across match types using search-term-view report rows
    SearchTerm(Box<ProcessArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);

    match &cli.command {
        KwmatchSubcommand::MatchType(process_args) => process_match_types(host, process_args),
        KwmatchSubcommand::SearchTerm(process_args) => process_search_terms(host, process_args),
        KwmatchSubcommand::Init(init_args) => init_config(host, init_args),
        KwmatchSubcommand::Validate(validate_args) => validate_config(host, validate_args),
    }
}
