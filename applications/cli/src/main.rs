/// Beatlist - inspect, convert and find beatmap playlists
use anyhow::Context;
use beatlist_catalog::BeatSaverClient;
use beatlist_cli::{report, CliConfig};
use beatlist_core::{Progress, ProgressStatus};
use beatlist_format::PlaylistFormat;
use beatlist_playlist::{LoadOptions, LoadOutcome, PlaylistManager, PlaylistScanner};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "beatlist")]
#[command(about = "Inspect, convert and find beatmap playlists", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "BEATLIST_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a playlist and print its maps
    Inspect {
        /// Playlist file
        path: PathBuf,
    },
    /// Load a legacy playlist and rewrite it in the binary format
    Convert {
        /// Playlist file
        path: PathBuf,
    },
    /// List playlist files in a directory
    Scan {
        /// Directory to scan (defaults to playlists.directory)
        dir: Option<PathBuf>,

        /// Maximum directory depth
        #[arg(long)]
        max_depth: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beatlist=info,beatlist_playlist=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Inspect { path } => {
            let options = LoadOptions {
                force_convert: config.playlists.force_convert,
            };
            let outcome = load(&config, &path, options).await?;
            print!("{}", report::playlist(&outcome.playlist));
            if config.playlists.force_convert {
                println!("{}", report::migration(&outcome.migration));
            }
        }
        Commands::Convert { path } => {
            let outcome = load(&config, &path, LoadOptions::force_convert()).await?;
            println!("{}", report::migration(&outcome.migration));
            if outcome.migration.new_path().is_none() && outcome.format == PlaylistFormat::Legacy {
                anyhow::bail!("conversion of {} failed", path.display());
            }
        }
        Commands::Scan { dir, max_depth } => {
            let dir = dir.unwrap_or_else(|| config.playlists.directory.clone());
            scan(&dir, max_depth)?;
        }
    }

    Ok(())
}

async fn load(
    config: &CliConfig,
    path: &Path,
    options: LoadOptions,
) -> anyhow::Result<LoadOutcome> {
    let client = BeatSaverClient::new(config.catalog_config())?;
    tracing::debug!("Using catalog at {}", client.base_url());

    let manager = PlaylistManager::with_local_fs(Arc::new(client));
    let progress = Progress::new();

    let load = manager.try_load(path, &options, &progress);
    tokio::pin!(load);

    let mut ticker = tokio::time::interval(Duration::from_millis(500));
    let outcome = loop {
        tokio::select! {
            result = &mut load => break result,
            _ = ticker.tick() => {
                let snapshot = progress.snapshot();
                if snapshot.status == ProgressStatus::Running {
                    tracing::info!("Resolving {}", report::progress(&snapshot));
                }
            }
        }
    };

    outcome.with_context(|| format!("failed to load {}", path.display()))
}

fn scan(dir: &Path, max_depth: Option<usize>) -> anyhow::Result<()> {
    let mut scanner = PlaylistScanner::new();
    if let Some(depth) = max_depth {
        scanner = scanner.max_depth(depth);
    }

    let found = scanner
        .scan_directory(dir)
        .with_context(|| format!("failed to scan {}", dir.display()))?;

    for playlist in &found {
        println!("{}", report::scanned(playlist));
    }
    tracing::info!("Found {} playlists in {}", found.len(), dir.display());

    Ok(())
}
