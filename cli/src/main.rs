//! Logdoc CLI
//!
//! Builds one structured log document from command-line arguments and prints
//! it as JSON on stdout.
//!
//! # Usage
//!
//! ```bash
//! logdoc --help
//! logdoc --severity warn --body "disk almost full" --attr disk.used_pct=93
//! logdoc --trace-id 4bf92f3577b34da6a3ce929d0e0e4736 --span-id 00f067aa0ba902b7 --pretty
//! ```

#![deny(unsafe_code)]

mod config;

use anyhow::{bail, Context, Result};
use clap::Parser;
use config::OutputConfig;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use shared::{
    AttributeValue, DocumentRecordable, Recordable, Severity, SpanId, SystemTimestamp, TraceFlags,
    TraceId,
};

/// Logdoc CLI - build a structured log document
#[derive(Parser, Debug)]
#[command(name = "logdoc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Severity label (TRACE, DEBUG2, INFO, WARN, ERROR, FATAL4, ...)
    #[arg(short, long, env = "LOGDOC_SEVERITY", default_value = "INFO")]
    severity: Severity,

    /// Event name
    #[arg(short, long)]
    name: Option<String>,

    /// Event body
    #[arg(short, long)]
    body: Option<String>,

    /// Trace id as 32 hex characters
    #[arg(long)]
    trace_id: Option<String>,

    /// Span id as 16 hex characters
    #[arg(long)]
    span_id: Option<String>,

    /// Trace flags as 2 hex characters
    #[arg(long)]
    trace_flags: Option<String>,

    /// Timestamp in nanoseconds since the Unix epoch (default: now)
    #[arg(long, allow_negative_numbers = true)]
    timestamp: Option<i64>,

    /// Event attribute, repeatable
    #[arg(short = 'a', long = "attr", value_name = "KEY=VALUE")]
    attributes: Vec<String>,

    /// Resource attribute, repeatable
    #[arg(short = 'r', long = "resource", value_name = "KEY=VALUE")]
    resources: Vec<String>,

    /// Pretty-print the document (also LOGDOC_PRETTY)
    #[arg(long)]
    pretty: bool,
}

/// Splits `key=value` at the first `=`.
fn parse_key_value(pair: &str) -> Result<(&str, &str)> {
    match pair.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        Some(_) => bail!("attribute key is empty in {pair:?}"),
        None => bail!("expected KEY=VALUE, got {pair:?}"),
    }
}

fn build_document(cli: &Cli) -> Result<Value> {
    let mut record = DocumentRecordable::new();

    record.set_severity(cli.severity);
    if let Some(name) = &cli.name {
        record.set_name(name);
    }
    if let Some(body) = &cli.body {
        record.set_body(body);
    }

    if let Some(hex) = &cli.trace_id {
        record.set_trace_id(TraceId::from_hex(hex).context("invalid --trace-id")?);
    }
    if let Some(hex) = &cli.span_id {
        record.set_span_id(SpanId::from_hex(hex).context("invalid --span-id")?);
    }
    if let Some(hex) = &cli.trace_flags {
        record.set_trace_flags(TraceFlags::from_hex(hex).context("invalid --trace-flags")?);
    }

    let timestamp = cli
        .timestamp
        .map_or_else(SystemTimestamp::now, SystemTimestamp::from_nanos);
    record.set_timestamp(timestamp);

    for pair in &cli.attributes {
        let (key, value) = parse_key_value(pair).context("invalid --attr")?;
        record.set_attribute(key, AttributeValue::parse(value));
    }
    for pair in &cli.resources {
        let (key, value) = parse_key_value(pair).context("invalid --resource")?;
        record.set_resource(key, AttributeValue::parse(value));
    }

    tracing::debug!(
        attributes = cli.attributes.len(),
        resources = cli.resources.len(),
        "Built log document"
    );

    Ok(record.into_document())
}

fn render(document: &Value, output: &OutputConfig) -> Result<String> {
    if !output.pretty {
        return Ok(serde_json::to_string(document)?);
    }

    let indent = " ".repeat(output.indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(Vec::new(), formatter);
    document.serialize(&mut serializer)?;
    Ok(String::from_utf8(serializer.into_inner())?)
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only the document
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut output = OutputConfig::from_env().context("failed to load output configuration")?;
    if cli.pretty {
        output.pretty = true;
    }

    let document = build_document(&cli)?;
    println!("{}", render(&document, &output)?);

    Ok(())
}
