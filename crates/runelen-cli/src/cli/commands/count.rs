use anyhow::Context;
use runelen_core::{CountConfig, InvalidPolicy, OutputFormat, TextStats};
use serde::Serialize;
use std::borrow::Cow;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use crate::cli::args::CountArgs;
use crate::exit_codes::{INVALID_INPUT, SUCCESS};

const STDIN_LABEL: &str = "<stdin>";

#[derive(Debug, Serialize)]
struct CountRecord<'a> {
    input: &'a str,
    #[serde(flatten)]
    stats: TextStats,
}

#[derive(Debug)]
enum Source {
    Arg(String),
    File(PathBuf),
    Stdin,
}

impl Source {
    fn label(&self) -> String {
        match self {
            Self::Arg(text) => text.clone(),
            Self::File(path) => path.display().to_string(),
            Self::Stdin => STDIN_LABEL.to_string(),
        }
    }

    fn stats(&self, policy: InvalidPolicy) -> anyhow::Result<Option<TextStats>> {
        let bytes = match self {
            // clap already rejected arguments that are not valid UTF-8
            Self::Arg(text) => return Ok(Some(TextStats::of(text))),
            Self::File(path) => std::fs::read(path)
                .with_context(|| format!("failed to read input: {}", path.display()))?,
            Self::Stdin => {
                let mut buf = Vec::new();
                io::stdin()
                    .lock()
                    .read_to_end(&mut buf)
                    .context("failed to read stdin")?;
                buf
            }
        };

        if policy != InvalidPolicy::Strict && std::str::from_utf8(&bytes).is_err() {
            tracing::warn!(input = %self.label(), policy = %policy, "input is not valid utf-8");
        }

        match TextStats::from_bytes(&bytes, policy) {
            Ok(stats) => Ok(Some(stats)),
            Err(e) => {
                eprintln!("error: {}: {}", self.label(), e);
                Ok(None)
            }
        }
    }
}

pub fn run(args: CountArgs) -> anyhow::Result<i32> {
    let cfg = resolve_config(&args)?;
    tracing::debug!(invalid = %cfg.invalid, format = ?cfg.format, "resolved count config");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut code = SUCCESS;

    for source in collect_sources(args) {
        match source.stats(cfg.invalid)? {
            Some(stats) => render(&mut out, cfg.format, &source.label(), stats)?,
            None => code = INVALID_INPUT,
        }
    }
    out.flush().context("failed to flush stdout")?;
    Ok(code)
}

/// Defaults, then the config file, then explicit flags.
fn resolve_config(args: &CountArgs) -> anyhow::Result<CountConfig> {
    let mut cfg = match &args.config {
        Some(path) => CountConfig::from_file(path)?,
        None => CountConfig::default(),
    };
    if let Some(invalid) = args.invalid {
        cfg.invalid = invalid.into();
    }
    if let Some(format) = args.format {
        cfg.format = format.into();
    }
    Ok(cfg)
}

fn collect_sources(args: CountArgs) -> Vec<Source> {
    if args.text.is_empty() && args.files.is_empty() {
        return vec![Source::Stdin];
    }
    args.text
        .into_iter()
        .map(Source::Arg)
        .chain(args.files.into_iter().map(Source::File))
        .collect()
}

fn render(
    out: &mut impl Write,
    format: OutputFormat,
    label: &str,
    stats: TextStats,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => writeln!(
            out,
            "{}\t{}\t{}",
            stats.runes,
            stats.bytes,
            escape_label(label)
        )?,
        OutputFormat::Json => {
            let record = CountRecord {
                input: label,
                stats,
            };
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
        }
    }
    Ok(())
}

/// Keeps a text-mode record on one line with exactly three columns.
fn escape_label(label: &str) -> Cow<'_, str> {
    if !label.chars().any(|c| c.is_control() || c == '\\') {
        return Cow::Borrowed(label);
    }
    let mut escaped = String::with_capacity(label.len() + 8);
    for c in label.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.extend(c.escape_unicode()),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
