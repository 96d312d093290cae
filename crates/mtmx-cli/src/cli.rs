//! CLI argument definitions for the MT converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "mtmx",
    version,
    about = "Convert SWIFT MT messages to ISO 20022 MX documents",
    long_about = "Convert SWIFT MT payment, statement and confirmation messages\n\
                  (MT101/102/103, MT202, MT900/910, MT940/950) into their ISO 20022\n\
                  equivalents (pain.001, pacs.008, pacs.009, camt.053, camt.054)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a single MT message to its MX equivalent.
    Convert(ConvertArgs),

    /// List the supported MT message types and their targets.
    Types,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Path to the MT message file; reads stdin when omitted or "-".
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Message type hint, e.g. MT103 or 910.
    ///
    /// Required for types the tag profile cannot distinguish (MT900 vs
    /// MT910, MT950 vs MT940).
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub message_type: Option<String>,

    /// Write the XML to a file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Emit the full conversion result as JSON (XML, fingerprint, errors).
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
