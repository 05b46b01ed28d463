//! raymarch CLI - render circle scenes to PBM occupancy bitmaps.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use raymarch_engine::pbm::parse_pbm;
use raymarch_engine::Scene;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

mod config;

use config::SceneConfig;

#[derive(Parser)]
#[command(name = "raymarch")]
#[command(about = "Ray-marched occupancy renderer for 2D circle scenes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a scene to a P1 bitmap
    Render {
        /// TOML scene description (default: built-in demo scene)
        #[arg(short, long)]
        scene: Option<PathBuf>,
        /// Output bitmap path
        #[arg(short, long, default_value = "out.pbm")]
        output: PathBuf,
        /// March rays on all cores
        #[arg(long)]
        parallel: bool,
    },
    /// Display information about a P1 bitmap
    Info {
        /// Path to the .pbm file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render {
            scene,
            output,
            parallel,
        }) => {
            render(scene.as_deref(), &output, parallel)?;
        }
        Some(Commands::Info { file }) => {
            show_info(&file)?;
        }
        None => {
            render(None, Path::new("out.pbm"), false)?;
        }
    }

    Ok(())
}

fn render(scene_path: Option<&Path>, output: &Path, parallel: bool) -> Result<()> {
    tracing::info!("Running raymarch...");

    let mut config = match scene_path {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };
    config.render.parallel |= parallel;

    let camera = config.camera()?;
    let mut scene = Scene::with_settings(&camera, config.width, config.height, config.render.clone())?;
    for circle in config.circles()? {
        scene.add_entity(circle);
    }

    let start = Instant::now();
    scene.render()?;
    tracing::info!(
        "Total rendering time: {:.6} seconds",
        start.elapsed().as_secs_f64()
    );

    scene
        .export_to_file(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!("Exported bitmap to {}", output.display());

    Ok(())
}

fn show_info(path: &Path) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let bitmap = parse_pbm(&text)?;

    let total = bitmap.width() * bitmap.height();
    let marked = bitmap.count_marked();
    println!("File: {}", path.display());
    println!("Size: {}x{}", bitmap.width(), bitmap.height());
    println!(
        "Marked: {} / {} ({:.2}%)",
        marked,
        total,
        if total == 0 {
            0.0
        } else {
            100.0 * marked as f64 / total as f64
        }
    );

    Ok(())
}
