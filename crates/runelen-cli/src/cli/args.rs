use clap::{Parser, Subcommand};
use runelen_core::{InvalidPolicy, OutputFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "runelen",
    version,
    about = "Count Unicode code points (runes) instead of bytes"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Count code points in arguments, files or stdin
    Count(CountArgs),
    Version,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct CountArgs {
    /// Text to count; each argument is reported separately
    pub text: Vec<String>,

    /// Count the contents of a file (repeatable)
    #[arg(long = "file", short = 'f')]
    pub files: Vec<PathBuf>,

    /// Policy for bytes that are not valid UTF-8 (overrides config)
    #[arg(long, value_enum)]
    pub invalid: Option<InvalidArg>,

    /// Output format (overrides config)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// YAML config file
    #[arg(long, env = "RUNELEN_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidArg {
    Strict,
    Lossy,
    PerByte,
}

impl From<InvalidArg> for InvalidPolicy {
    fn from(arg: InvalidArg) -> Self {
        match arg {
            InvalidArg::Strict => InvalidPolicy::Strict,
            InvalidArg::Lossy => InvalidPolicy::Lossy,
            InvalidArg::PerByte => InvalidPolicy::PerByte,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}
