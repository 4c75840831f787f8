use anyhow::Result;
use clap::Parser;
use srclist::{GenConfig, run};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(author, version, about = "Emit CMake header/source list declarations for a directory tree", long_about = None)]
struct Args {
    /// Directory to scan (defaults to the current directory)
    root: Option<PathBuf>,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Sort each list instead of keeping traversal order
    #[arg(long)]
    sort: bool,

    /// Name of the header list variable
    #[arg(long)]
    header_list: Option<String>,

    /// Name of the source list variable
    #[arg(long)]
    source_list: Option<String>,

    /// Token substituted for the scan root in emitted paths
    #[arg(long)]
    placeholder: Option<String>,

    /// Read settings from this TOML file instead of ./srclist.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Verbose output on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load from file or default
    let mut config = match &args.config {
        Some(path) => GenConfig::load_from_path(path)?,
        None => GenConfig::load_from_file()?.unwrap_or_default(),
    };

    // 2. Override with CLI args
    if let Some(r) = args.root {
        config.root = r;
    }
    if let Some(o) = args.output {
        config.output = Some(o);
    }
    if args.sort {
        config.sort = true;
    }
    if let Some(h) = args.header_list {
        config.header_list_name = h;
    }
    if let Some(s) = args.source_list {
        config.source_list_name = s;
    }
    if let Some(p) = args.placeholder {
        config.placeholder = p;
    }
    if args.verbose {
        config.verbose = true;
    }

    // stdout carries only the generated fragment
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if config.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    run(config)
}
