//! Wardrobe Studio command-line driver.
//!
//! Runs an outfit session headlessly: loads a catalog export, applies editor
//! commands, and prints the layer strip; or checks whether a rendered layout
//! forms one connected outfit.
//!
//! ```text
//! wardrobe-studio layers --catalog closet.json random next:top
//! wardrobe-studio connected --positions layout.json --tolerance 12
//! ```
//!
//! # Startup
//!
//! 1. CLI arguments are parsed with `clap`.
//! 2. The TOML config is loaded (`--config` or the platform default).
//! 3. `tracing_subscriber` is initialised.  `RUST_LOG` wins over the
//!    configured `log_level`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wardrobe_core::{ClothingItemPosition, ConnectivityDetector, Mood, RngSource};
use wardrobe_studio::application::compose_outfit::{OutfitCommand, OutfitSession};
use wardrobe_studio::infrastructure::catalog::JsonFileCatalog;
use wardrobe_studio::infrastructure::monitor::ConnectivityMonitor;
use wardrobe_studio::infrastructure::storage::config::{self, StudioConfig};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Outfit layer composer and connectivity checker.
#[derive(Debug, Parser)]
#[command(
    name = "wardrobe-studio",
    about = "Compose outfits from a clothing catalog and check layout connectivity",
    version
)]
struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, env = "WARDROBE_CONFIG")]
    config: Option<PathBuf>,

    /// Seed for random outfit generation.  Unseeded runs draw from the OS.
    #[arg(long, env = "WARDROBE_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load a catalog, apply commands in order, then print every layer.
    Layers {
        /// JSON catalog export (array of clothing items).
        #[arg(long)]
        catalog: PathBuf,

        /// `random`, `clear`, `next:<category>` or `prev:<category>`.
        ops: Vec<OutfitCommand>,
    },
    /// Report whether a rendered layout forms one connected outfit.
    Connected {
        /// JSON array of item boxes (`id`, `x`, `y`, `width`, `height`).
        #[arg(long)]
        positions: PathBuf,

        /// Touching tolerance; overrides the configured value.
        #[arg(long)]
        tolerance: Option<f64>,
    },
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<StudioConfig> {
        let cfg = match &self.config {
            Some(path) => config::load_config_from(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => match config::load_config() {
                Ok(cfg) => cfg,
                // No home directory: run on defaults.
                Err(config::ConfigError::NoPlatformConfigDir) => StudioConfig::default(),
                Err(e) => return Err(e).context("failed to load config"),
            },
        };
        Ok(cfg)
    }

    fn session(&self, cfg: &StudioConfig) -> OutfitSession {
        let rng = match self.seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::from_entropy(),
        };
        OutfitSession::new(&cfg.session_settings(), Box::new(rng))
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut cfg = cli.load_config()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cfg.studio.log_level)),
        )
        .init();

    if let Command::Connected {
        tolerance: Some(tolerance),
        ..
    } = &cli.command
    {
        cfg.connectivity.tolerance = *tolerance;
    }

    let mut session = cli.session(&cfg);

    match &cli.command {
        Command::Layers { catalog, ops } => {
            run_layers(&mut session, catalog, ops).await?;
        }
        Command::Connected { positions, .. } => {
            run_connected(&mut session, &cfg, positions).await?;
        }
    }
    Ok(())
}

async fn run_layers(
    session: &mut OutfitSession,
    catalog: &Path,
    ops: &[OutfitCommand],
) -> anyhow::Result<()> {
    let source = JsonFileCatalog::new(catalog);
    let loaded = session
        .refresh_catalog(&source)
        .await
        .with_context(|| format!("failed to load catalog {}", catalog.display()))?;
    info!(items = loaded, ops = ops.len(), "applying commands");

    for op in ops {
        session.apply(*op)?;
    }

    for (index, layer) in session.layers().layers().iter().enumerate() {
        let item = layer
            .current_item()
            .map(|item| item.name.as_str())
            .unwrap_or("-");
        println!(
            "{:<10} {:>10}  {}",
            layer.display_name(),
            session.layer_info(index)?,
            item
        );
    }

    let outfit = session.current_outfit();
    println!(
        "{} item(s) selected{}",
        outfit.item_count(),
        if outfit.is_complete() { ", complete" } else { "" }
    );
    Ok(())
}

async fn run_connected(
    session: &mut OutfitSession,
    cfg: &StudioConfig,
    positions: &Path,
) -> anyhow::Result<()> {
    let content = tokio::fs::read_to_string(positions)
        .await
        .with_context(|| format!("failed to read positions {}", positions.display()))?;
    let boxes: Vec<ClothingItemPosition> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse positions {}", positions.display()))?;

    let monitor = ConnectivityMonitor::new(
        ConnectivityDetector::with_tolerance(cfg.connectivity.tolerance),
        cfg.debounce(),
    );
    monitor
        .submit(boxes)
        .await
        .context("connectivity check task failed")?;
    let state = monitor
        .latest()
        .context("connectivity check produced no result")?;

    session.apply_connectivity(state);
    let mood = match session.indicator().mood {
        Mood::Alive => "alive",
        Mood::Dead => "dead",
    };
    println!(
        "connected: {} (tolerance {}), indicator: {} #{}",
        state.is_connected,
        state.tolerance,
        mood,
        session.indicator().variation
    );
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use wardrobe_core::ClothingCategory;

    #[test]
    fn test_cli_parses_layers_with_ops() {
        let cli = Cli::parse_from([
            "wardrobe-studio",
            "layers",
            "--catalog",
            "closet.json",
            "random",
            "next:top",
            "prev:shoes",
        ]);
        match cli.command {
            Command::Layers { catalog, ops } => {
                assert_eq!(catalog, PathBuf::from("closet.json"));
                assert_eq!(
                    ops,
                    vec![
                        OutfitCommand::Randomize,
                        OutfitCommand::Next(ClothingCategory::Top),
                        OutfitCommand::Previous(ClothingCategory::Shoes),
                    ]
                );
            }
            other => panic!("expected layers, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_op() {
        let result = Cli::try_parse_from([
            "wardrobe-studio",
            "layers",
            "--catalog",
            "closet.json",
            "next:scarf",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parses_connected_with_tolerance_and_seed() {
        let cli = Cli::parse_from([
            "wardrobe-studio",
            "--seed",
            "7",
            "connected",
            "--positions",
            "layout.json",
            "--tolerance",
            "12.5",
        ]);
        assert_eq!(cli.seed, Some(7));
        match cli.command {
            Command::Connected {
                positions,
                tolerance,
            } => {
                assert_eq!(positions, PathBuf::from("layout.json"));
                assert_eq!(tolerance, Some(12.5));
            }
            other => panic!("expected connected, got {other:?}"),
        }
    }

    #[test]
    fn test_explicit_missing_config_file_loads_defaults() {
        let path = std::env::temp_dir().join("wardrobe_cli_no_such_dir/config.toml");
        let cli = Cli::parse_from([
            "wardrobe-studio",
            "--config",
            path.to_str().unwrap(),
            "connected",
            "--positions",
            "layout.json",
        ]);
        assert_eq!(cli.load_config().unwrap(), StudioConfig::default());
    }
}
