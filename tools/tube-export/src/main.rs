//! tube-export - skeleton tube mesh tool
//!
//! Reads a node hierarchy from glTF/GLB and writes the generated tube mesh as
//! OBJ, or inspects the hierarchy and effective settings.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use bone_tubes::{generate, hierarchy, write_obj};
use tube_export::{ConfigOverrides, config_to_toml, load_gltf_skeleton, resolve_config};

#[derive(Parser)]
#[command(name = "tube-export")]
#[command(about = "Skeleton tube mesh generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a tube mesh and write it as OBJ
    Mesh {
        /// Input glTF/GLB file
        input: PathBuf,

        /// Output .obj file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Root node name (default: the scene's single root)
        #[arg(short, long)]
        root: Option<String>,

        /// Path to tubes.toml
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        overrides: ConfigOverrides,
    },

    /// List bones in generation order
    Bones {
        /// Input glTF/GLB file
        input: PathBuf,

        /// Root node name (default: the scene's single root)
        #[arg(short, long)]
        root: Option<String>,
    },

    /// Print the effective settings as TOML
    Config {
        /// Path to tubes.toml
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        overrides: ConfigOverrides,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Mesh {
            input,
            output,
            root,
            config,
            overrides,
        } => {
            let config = resolve_config(config.as_deref(), &overrides)?;
            let output = output.unwrap_or_else(|| input.with_extension("tubes.obj"));
            tracing::info!("Generating tubes {:?} -> {:?}", input, output);

            let skeleton = load_gltf_skeleton(&input, root.as_deref())?;
            let mesh = generate(&skeleton, &config)?;
            write_obj(&mesh, &output, &mesh.name())?;

            tracing::info!(
                "Generated mesh: {} bones, {} vertices, {} quads",
                mesh.bones.len(),
                mesh.vertex_count(),
                mesh.quad_count()
            );
            tracing::info!("Done!");
        }

        Commands::Bones { input, root } => {
            let skeleton = load_gltf_skeleton(&input, root.as_deref())?;
            let bones = hierarchy::walk(&skeleton)?;

            tracing::info!("Bones in {:?}:", input);
            let mut depths: Vec<usize> = Vec::with_capacity(bones.len());
            for (i, bone) in bones.iter().enumerate() {
                let depth = bone.parent.map_or(0, |p| depths[p] + 1);
                depths.push(depth);
                tracing::info!(
                    "  [{}] {}{} ({} children)",
                    i,
                    "  ".repeat(depth),
                    bone.name,
                    bone.child_count
                );
            }
        }

        Commands::Config { config, overrides } => {
            let config = resolve_config(config.as_deref(), &overrides)?;
            print!("{}", config_to_toml(&config)?);
        }
    }

    Ok(())
}
