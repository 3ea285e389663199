//! Portcullis - resource inspection CLI
//!
//! The `portcullis` command works on connection diagnostics stored as JSON
//! documents (a single resource or an array of them).
//!
//! ## Commands
//!
//! - `new`: Build a validated diagnostic and print it
//! - `search`: Filter a diagnostic list by free-text terms
//! - `show`: Print one diagnostic's outcome, labels and origin
//! - `set-origin`: Rewrite the origin label of one diagnostic in place

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use portcullis_types::{
    filter_by_search, init_tracing_from_config, is_known_origin, ConnectionDiagnostic,
    ConnectionDiagnosticSpec, ConnectionDiagnostics, Identifiable, Labeled, Labels, LogConfig,
    ResourceSpan,
};

#[derive(Parser)]
#[command(name = "portcullis")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect and filter Portcullis resources", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a connection diagnostic and print it as JSON
    New {
        /// Resource name
        #[arg(short, long)]
        name: String,

        /// Mark the diagnostic as successful
        #[arg(long)]
        success: bool,

        /// Human-readable outcome message (must not be empty)
        #[arg(short, long)]
        message: String,

        /// Static label, repeatable (key=value)
        #[arg(short, long = "label", value_parser = parse_label)]
        labels: Vec<(String, String)>,

        /// Origin to record on the resource
        #[arg(long)]
        origin: Option<String>,
    },

    /// Print names of diagnostics matching every search term
    Search {
        /// JSON file holding a diagnostic or a list of diagnostics
        #[arg(short, long)]
        file: PathBuf,

        /// Search terms (case-insensitive substrings)
        terms: Vec<String>,
    },

    /// Show one diagnostic
    Show {
        /// JSON file holding a diagnostic or a list of diagnostics
        #[arg(short, long)]
        file: PathBuf,

        /// Resource name
        #[arg(short, long)]
        name: String,
    },

    /// Set the origin of one diagnostic and rewrite the file
    SetOrigin {
        /// JSON file holding a diagnostic or a list of diagnostics
        #[arg(short, long)]
        file: PathBuf,

        /// Resource name
        #[arg(short, long)]
        name: String,

        /// New origin value
        #[arg(long)]
        origin: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_config = LogConfig::from_env().with_overrides(cli.json, cli.verbose);
    init_tracing_from_config(&log_config);

    let output = match cli.command {
        Commands::New {
            name,
            success,
            message,
            labels,
            origin,
        } => cmd_new(&name, success, &message, labels, origin.as_deref())?,
        Commands::Search { file, terms } => cmd_search(&file, &terms)?,
        Commands::Show { file, name } => cmd_show(&file, &name)?,
        Commands::SetOrigin { file, name, origin } => cmd_set_origin(&file, &name, &origin)?,
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

/// Parse a `key=value` label argument.
fn parse_label(arg: &str) -> Result<(String, String)> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| anyhow!("label must be key=value, got '{}'", arg))?;
    if key.is_empty() {
        bail!("label key must not be empty in '{}'", arg);
    }
    Ok((key.to_string(), value.to_string()))
}

fn cmd_new(
    name: &str,
    success: bool,
    message: &str,
    labels: Vec<(String, String)>,
    origin: Option<&str>,
) -> Result<String> {
    let _span = ResourceSpan::enter(portcullis_types::KIND_CONNECTION_DIAGNOSTIC, name);
    let labels: Labels = labels.into_iter().collect();

    let mut diagnostic = ConnectionDiagnostic::new(
        name,
        Some(labels),
        ConnectionDiagnosticSpec::new(success, message),
    )
    .context("Failed to create connection diagnostic")?;

    if let Some(origin) = origin {
        warn_unknown_origin(origin);
        diagnostic.set_origin(origin);
    }

    info!(name = %name, success = success, "Created connection diagnostic");
    serde_json::to_string_pretty(&diagnostic).context("Failed to encode diagnostic")
}

fn cmd_search(file: &Path, terms: &[String]) -> Result<String> {
    let diagnostics = load_diagnostics(file)?;
    let matches = filter_by_search(&diagnostics, terms);
    debug!(
        total = diagnostics.len(),
        matched = matches.len(),
        "Filtered diagnostics"
    );

    Ok(matches
        .iter()
        .map(|d| d.name())
        .collect::<Vec<_>>()
        .join("\n"))
}

fn cmd_show(file: &Path, name: &str) -> Result<String> {
    let diagnostics = load_diagnostics(file)?;
    let diagnostic = find_by_name(&diagnostics, name)?;

    let mut lines = vec![
        format!("name:    {}", diagnostic.name()),
        format!("kind:    {}", diagnostic.kind()),
        format!("version: {}", diagnostic.version()),
        format!("success: {}", diagnostic.is_success()),
        format!("message: {}", diagnostic.message()),
        format!("origin:  {}", diagnostic.origin()),
        "labels:".to_string(),
    ];
    for (key, value) in diagnostic.all_labels() {
        lines.push(format!("  {}={}", key, value));
    }
    Ok(lines.join("\n"))
}

fn cmd_set_origin(file: &Path, name: &str, origin: &str) -> Result<String> {
    let (mut diagnostics, was_list) = read_document(file)?;
    let index = diagnostics
        .iter()
        .position(|d| d.name() == name)
        .ok_or_else(|| anyhow!("No connection diagnostic named '{}'", name))?;

    warn_unknown_origin(origin);
    diagnostics[index].set_origin(origin);
    write_document(file, &diagnostics, was_list)?;

    info!(name = %name, origin = %origin, "Updated origin");
    Ok(String::new())
}

fn warn_unknown_origin(origin: &str) {
    if !is_known_origin(origin) {
        tracing::warn!(origin = %origin, "Origin is not one of the well-known values");
    }
}

fn find_by_name<'a>(
    diagnostics: &'a [ConnectionDiagnostic],
    name: &str,
) -> Result<&'a ConnectionDiagnostic> {
    diagnostics
        .iter()
        .find(|d| d.name() == name)
        .ok_or_else(|| anyhow!("No connection diagnostic named '{}'", name))
}

/// Load and validate every diagnostic in `file`.
fn load_diagnostics(file: &Path) -> Result<ConnectionDiagnostics> {
    read_document(file).map(|(diagnostics, _)| diagnostics)
}

/// Read a file holding one diagnostic or an array of them. The flag tells
/// whether the document was an array.
fn read_document(file: &Path) -> Result<(ConnectionDiagnostics, bool)> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON in {}", file.display()))?;

    let was_list = value.is_array();
    let diagnostics = if was_list {
        serde_json::from_value::<ConnectionDiagnostics>(value)
    } else {
        serde_json::from_value::<ConnectionDiagnostic>(value).map(|d| vec![d])
    }
    .with_context(|| format!("Invalid connection diagnostic in {}", file.display()))?;

    for diagnostic in &diagnostics {
        diagnostic
            .check_and_set_defaults()
            .with_context(|| format!("Diagnostic '{}' failed validation", diagnostic.name()))?;
    }
    Ok((diagnostics, was_list))
}

fn write_document(file: &Path, diagnostics: &[ConnectionDiagnostic], as_list: bool) -> Result<()> {
    let json = match (as_list, diagnostics) {
        (false, [single]) => serde_json::to_string_pretty(single),
        _ => serde_json::to_string_pretty(diagnostics),
    }
    .context("Failed to encode diagnostics")?;

    std::fs::write(file, json).with_context(|| format!("Failed to write {}", file.display()))
}
