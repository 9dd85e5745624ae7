//! depgraph CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "depgraph")]
#[command(about = "Load and inspect build dependency graphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding cached remote graph documents
    #[arg(long, global = true, default_value = ".")]
    cache_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a graph from a URL or local path and summarize it
    Load {
        /// URL (anything starting with "http") or local file path
        source: String,

        /// Build identifier to stamp on the graph
        #[arg(short, long, default_value = "")]
        build: String,

        /// Print the loaded graph as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Download a remote graph into the cache
    Fetch {
        url: String,

        /// Download even if the cached copy is still fresh
        #[arg(short, long)]
        force: bool,
    },
    /// Remove the cached copy of a remote graph
    Clear {
        url: String,
    },
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for command output
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "depgraph={0},depgraph_core={0},depgraph_fetch={0},depgraph_loader={0}",
            log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("depgraph v{}", env!("CARGO_PKG_VERSION"));
    tracing::debug!("Cache directory: {}", cli.cache_dir.display());

    match cli.command {
        Commands::Load { source, build, json } => {
            commands::load(cli.cache_dir, &build, &source, json).await
        }
        Commands::Fetch { url, force } => commands::fetch(cli.cache_dir, &url, force).await,
        Commands::Clear { url } => commands::clear(cli.cache_dir, &url),
        Commands::Version => {
            println!("depgraph v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
