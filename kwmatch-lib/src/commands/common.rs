//! Common processing logic shared between the match-type and search-term commands.

use super::Host;
use super::config::Config;
use crate::Result;
use crate::reports::{RenderOptions, Table, generate_console, generate_csv, generate_json, generate_xlsx};
use crate::source::{self, QueryFilter, ReportKind, SourceFormat};
use crate::views::{PassOptions, ReportPass};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, ValueEnum};
use ohno::IntoAppError;
use std::fs;
use std::io::Write;

const SOURCE_LOG_TARGET: &str = "    source";
const REPORTS_LOG_TARGET: &str = "   reports";

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Common arguments shared between the match-type and search-term commands
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Report file to read (repeatable, `-` for standard input)
    #[arg(long, short = 'i', value_name = "PATH", default_value = "-")]
    pub input: Vec<Utf8PathBuf>,

    /// Format of the report files
    #[arg(long, value_name = "FORMAT", default_value = "auto")]
    pub format: SourceFormat,

    /// Account to use for rows that do not carry a customer id
    #[arg(long, value_name = "NAME")]
    pub account: Option<String>,

    /// Path to configuration file (default is `kwmatch.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,

    /// Output all views to an Excel workbook, one worksheet per view
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub excel: Option<Utf8PathBuf>,

    /// Output each view to `<view>.csv` in this directory
    #[arg(long, value_name = "DIR", help_heading = "Report Output")]
    pub csv_dir: Option<Utf8PathBuf>,

    /// Output all views to a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,

    /// Output all views to the console.
    /// If omitted, console output is shown only when no other reports are generated.
    #[arg(long, help_heading = "Report Output")]
    pub console: bool,
}

pub struct Common<'a, H: Host> {
    pub config: Config,
    host: &'a mut H,
    inputs: Vec<Utf8PathBuf>,
    format: SourceFormat,
    account: Option<String>,
    color: ColorMode,
    console: bool,
    excel: Option<Utf8PathBuf>,
    csv_dir: Option<Utf8PathBuf>,
    json: Option<Utf8PathBuf>,
}

impl<'a, H: Host> Common<'a, H> {
    /// Create a new Common processor with logger and config
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be loaded
    pub fn new(host: &'a mut H, args: &CommonArgs) -> Result<Self> {
        init_logging(args.log_level);

        let config = Config::load(Utf8Path::new("."), args.config.as_ref())?;

        Ok(Self {
            config,
            host,
            inputs: args.input.clone(),
            format: args.format,
            account: args.account.clone(),
            color: args.color,
            console: args.console,
            excel: args.excel.clone(),
            csv_dir: args.csv_dir.clone(),
            json: args.json.clone(),
        })
    }

    /// Settings for a report pass, with `--account` taking precedence over the configured default account.
    pub fn pass_options(&self) -> Result<PassOptions> {
        Ok(PassOptions {
            filter: self.config.view_filter()?,
            default_account: self.account.as_deref().or(self.config.default_account.as_deref()).map(Into::into),
        })
    }

    /// Feeds every input row accepted by the report query into `pass` and returns its tables.
    pub fn process<P: ReportPass>(&self, mut pass: P, kind: ReportKind) -> Result<Vec<Table>> {
        let query = QueryFilter::new(kind, self.config.apply_query_filters).with_keywords(self.config.keywords.iter().map(String::as_str));

        log::info!(target: SOURCE_LOG_TARGET, "Processing {} input(s)", self.inputs.len());

        let mut skipped = 0_usize;
        for path in &self.inputs {
            for record in source::open(path, self.format, kind)? {
                let record = record?;
                if query.accepts(&record) {
                    pass.consume(record);
                } else {
                    skipped += 1;
                }
            }
        }

        log::info!(
            target: SOURCE_LOG_TARGET,
            "Read {} row(s), skipped {skipped} not matching the report query",
            pass.consumed() + skipped
        );

        Ok(pass.finish())
    }

    pub fn report(&mut self, tables: &[Table]) -> Result<()> {
        let options = RenderOptions {
            blank_not_available: self.config.blank_not_available,
        };

        let generating_reports = self.excel.is_some() || self.csv_dir.is_some() || self.json.is_some();

        if self.console || !generating_reports {
            let mut console_output = String::new();
            let use_colors = match self.color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => {
                    use std::io::{IsTerminal, stdout};
                    stdout().is_terminal()
                }
            };
            generate_console(tables, options, use_colors, &mut console_output)?;
            let _ = write!(self.host.output(), "{console_output}");
        }

        if let Some(filename) = &self.excel {
            log::info!(target: REPORTS_LOG_TARGET, "Writing Excel report to '{filename}'");
            let mut file = fs::File::create(filename).into_app_err_with(|| format!("creating Excel report '{filename}'"))?;
            generate_xlsx(tables, options, &mut file)?;
        }

        if let Some(dir) = &self.csv_dir {
            fs::create_dir_all(dir).into_app_err_with(|| format!("creating CSV report directory '{dir}'"))?;
            for table in tables {
                let filename = dir.join(format!("{}.csv", table.name()));
                log::info!(target: REPORTS_LOG_TARGET, "Writing CSV report to '{filename}'");
                let mut csv_output = String::new();
                generate_csv(table, options, &mut csv_output)?;
                fs::write(&filename, csv_output).into_app_err_with(|| format!("writing CSV report '{filename}'"))?;
            }
        }

        if let Some(filename) = &self.json {
            log::info!(target: REPORTS_LOG_TARGET, "Writing JSON report to '{filename}'");
            let mut json_output = String::new();
            generate_json(tables, options, &mut json_output)?;
            fs::write(filename, json_output).into_app_err_with(|| format!("writing JSON report '{filename}'"))?;
        }

        Ok(())
    }
}

/// Initialize logger based on log level
pub fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    // A logger may already be installed when commands run more than once in a process
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}
