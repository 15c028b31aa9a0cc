//! duplink - collapse duplicate tracked files into relative symlinks.
//!
//! Usage:
//!   duplink                      Scan ./lab_*/func_tests/scripts
//!   duplink [ROOT]               Scan another root directory
//!   duplink --dry-run            Only print the associations
//!   duplink --format json        Print associations as JSON
//!   duplink --help               Show help

use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use duplink_analyze::{AssociationReport, DuplicateGrouper, FsComparator};
use duplink_core::{AssociationKind, DedupConfig, DedupError};
use duplink_ops::{LinkReplacer, confirm};
use duplink_scan::DirectoryLocator;

#[derive(Parser)]
#[command(
    name = "duplink",
    version,
    about = "Replace duplicate tracked files with symbolic links",
    long_about = "duplink compares a fixed set of files across sibling directories \
                  and, after confirmation, replaces every duplicate with a relative \
                  symbolic link to a single canonical copy.\n\n\
                  Run without arguments to use the built-in configuration."
)]
struct Cli {
    /// Directory whose children are compared
    #[arg(default_value = duplink_core::DEFAULT_ROOT)]
    root: PathBuf,

    /// Only consider children whose name starts with this prefix
    #[arg(short, long, default_value = duplink_core::DEFAULT_PREFIX)]
    prefix: String,

    /// Path inside each child holding the tracked files
    #[arg(short, long, default_value = duplink_core::DEFAULT_SUBPATH)]
    subpath: PathBuf,

    /// Tracked filename (repeat to track several)
    #[arg(short = 'f', long = "file", value_name = "NAME")]
    files: Vec<String>,

    /// Output format for the associations
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Print the associations and exit without prompting
    #[arg(short = 'n', long)]
    dry_run: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse();
    let config = build_config(&cli)?;

    run(&config, cli.format, cli.dry_run)
}

/// Install a stderr log subscriber controlled by `RUST_LOG`.
///
/// Defaults to `info` so every "Creating link" line is shown.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Turn command line values into a validated configuration.
fn build_config(cli: &Cli) -> Result<DedupConfig> {
    let mut builder = DedupConfig::builder();
    builder
        .root(cli.root.clone())
        .prefix(cli.prefix.clone())
        .subpath(cli.subpath.clone());
    if !cli.files.is_empty() {
        builder.tracked_files(cli.files.clone());
    }

    builder
        .build()
        .map_err(|e| DedupError::InvalidConfig {
            message: e.to_string(),
        })
        .context("Invalid arguments")
}

/// Locate, group, report and, once confirmed, replace.
fn run(config: &DedupConfig, format: OutputFormat, dry_run: bool) -> Result<()> {
    debug!(?config, "starting run");

    let dirs = match DirectoryLocator::new(config).locate() {
        Err(e) if e.is_not_found() => {
            return Err(e).with_context(|| {
                format!("Root directory {} does not exist", config.root.display())
            });
        }
        located => located.context("Directory discovery failed")?,
    };

    let grouper = DuplicateGrouper::new(FsComparator::new(), &config.tracked_files);
    let assocs = grouper.group(&dirs).context("Grouping failed")?;
    info!(
        folders = assocs.count_kind(AssociationKind::Directory),
        files = assocs.count_kind(AssociationKind::File),
        "duplicates found"
    );

    let report = AssociationReport::from_map(&assocs);
    match format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if assocs.is_empty() {
        println!("No duplicates found.");
        return Ok(());
    }
    if dry_run {
        return Ok(());
    }

    let confirmed = confirm(io::stdin().lock(), io::stdout()).context("Failed to read answer")?;
    if !confirmed {
        println!("Wise decision, have a nice day");
        return Ok(());
    }

    let outcome = LinkReplacer::new(config).apply(&assocs);

    for err in &outcome.errors {
        eprintln!("{err}");
    }
    let lost = outcome.lost_paths();
    if !lost.is_empty() {
        eprintln!();
        eprintln!("{} file(s) were deleted but could not be linked:", lost.len());
        for path in lost {
            eprintln!("   {}", path.display());
        }
    }
    println!("{}", outcome.summary());

    Ok(())
}
