//! Cairn command-line interface.
//!
//! Composite voxelised models into a single grid:
//! ```sh
//! cairn-cli run scene.yaml --models data/grids
//! cairn-cli validate scene.yaml
//! cairn-cli info composite.vxg
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use cairn_cli::runner;
use cairn_store::{read_archive, write_grid, StorageResolver, DEFAULT_GRID_NAME};

#[derive(Parser)]
#[command(name = "cairn-cli")]
#[command(about = "Cairn: voxel scene compositor")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Composite a scene into a single output grid.
    Run {
        /// Path to the scene description file.
        scene: PathBuf,
        /// Directory holding the voxelised model grids.
        #[arg(short, long)]
        models: PathBuf,
        /// Output grid file (default: composite.vxg).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a scene description without touching any grids.
    Validate {
        /// Path to the scene description file.
        scene: PathBuf,
    },
    /// List the grids stored in an archive file.
    Info {
        /// Path to a grid archive.
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            scene,
            models,
            output,
        } => {
            println!("Cairn Scene Compositor");
            println!("======================");
            let entries = cairn_scene::load_scene(&scene)?;
            println!("Scene: {} ({} models)", scene.display(), entries.len());

            let resolver = StorageResolver::new(models);
            let composed = runner::compose_scene(&entries, &resolver)?;

            let out_path = output.unwrap_or_else(|| PathBuf::from("composite.vxg"));
            write_grid(&out_path, DEFAULT_GRID_NAME, &composed)?;
            println!(
                "Output grid: {} active voxels -> {}",
                composed.active_count(),
                out_path.display()
            );
            Ok(())
        }
        Commands::Validate { scene } => {
            let entries = cairn_scene::load_scene(&scene)?;
            println!("Scene is valid: {} ({} models)", scene.display(), entries.len());
            Ok(())
        }
        Commands::Info { file } => {
            let grids = read_archive(&file)?;
            println!("{}: {} grids", file.display(), grids.len());
            for named in &grids {
                match named.grid.active_bounds() {
                    Some((min, max)) => println!(
                        "  '{}': {} active voxels, bounds {:?}..{:?}",
                        named.name,
                        named.grid.active_count(),
                        min,
                        max
                    ),
                    None => println!("  '{}': empty", named.name),
                }
            }
            Ok(())
        }
    }
}
