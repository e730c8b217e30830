//! CLI entry point for filetree

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use clap::Parser;
use filetree::tree::DEFAULT_MAX_DEPTH;
use filetree::{StreamingFormatter, TreeError, TreePrinter, WalkerConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "filetree")]
#[command(about = "Print an indented tree of directories and files with a file count")]
#[command(version)]
struct Args {
    /// Directories to display (default: the current directory)
    paths: Vec<PathBuf>,

    /// Skip directories whose path contains MARKER (can be used multiple times, default: $)
    #[arg(short = 'x', long = "exclude", value_name = "MARKER")]
    exclude: Vec<String>,

    /// Do not skip any directories
    #[arg(long = "no-exclude", conflicts_with = "exclude")]
    no_exclude: bool,

    /// Do not descend more than N levels below a root
    #[arg(long = "max-depth", value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

impl Args {
    fn walker_config(&self) -> WalkerConfig {
        let defaults = WalkerConfig::default();
        let exclude_markers = if self.no_exclude {
            Vec::new()
        } else if self.exclude.is_empty() {
            defaults.exclude_markers
        } else {
            self.exclude.clone()
        };
        WalkerConfig {
            exclude_markers,
            max_depth: self.max_depth,
        }
    }
}

fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
}

/// Walk one root and print its block. Per-root problems are reported to
/// stderr; only an output failure is returned.
fn show_tree<W: Write>(
    root: &Path,
    config: &WalkerConfig,
    formatter: &mut StreamingFormatter<W>,
) -> Result<(), TreeError> {
    let printer = TreePrinter::new(root, config.clone());
    let summary = printer.show(formatter)?;
    for skipped in &summary.skipped {
        eprintln!("filetree: {}", skipped);
    }
    Ok(())
}

fn run<W: Write>(args: &Args, formatter: &mut StreamingFormatter<W>) -> Result<(), TreeError> {
    let config = args.walker_config();

    if args.paths.is_empty() {
        let cwd = std::env::current_dir().map_err(TreeError::CurrentDir)?;
        show_tree(&cwd, &config, formatter)?;
    } else {
        for root in &args.paths {
            show_tree(root, &config, formatter)?;
            formatter.separator()?;
        }
    }
    Ok(())
}

fn main() {
    let start = Instant::now();
    let args = Args::parse();
    setup_tracing();
    tracing::debug!("Parsed CLI arguments: {args:?}");

    let mut formatter = StreamingFormatter::stdout();

    let result = run(&args, &mut formatter).and_then(|()| {
        formatter.elapsed(start.elapsed())?;
        Ok(())
    });

    if let Err(e) = result {
        eprintln!("filetree: {}", e);
        process::exit(1);
    }
}
