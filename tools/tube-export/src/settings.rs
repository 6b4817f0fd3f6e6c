//! Tube settings (tubes.toml + command-line overrides)

use anyhow::{Context, Result};
use bone_tubes::TubeConfig;
use clap::Args;
use std::path::Path;

/// Per-field overrides applied on top of the loaded config
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigOverrides {
    /// Tube radius
    #[arg(long)]
    pub radius: Option<f32>,

    /// Leaf stub length (negative disables stubs)
    #[arg(long, allow_negative_numbers = true)]
    pub leaf_axis_length: Option<f32>,

    /// Facets around each tube (3-1000)
    #[arg(long)]
    pub radial: Option<u32>,

    /// Segments along each tube (1-1000)
    #[arg(long)]
    pub lateral: Option<u32>,
}

impl ConfigOverrides {
    /// Replace every field that was given on the command line
    pub fn apply(&self, config: &mut TubeConfig) {
        if let Some(radius) = self.radius {
            config.radius = radius;
        }
        if let Some(length) = self.leaf_axis_length {
            config.leaf_axis_length = length;
        }
        if let Some(radial) = self.radial {
            config.radial_subdivisions = radial;
        }
        if let Some(lateral) = self.lateral {
            config.lateral_subdivisions = lateral;
        }
    }
}

/// Parse a config from TOML text
pub fn parse_config(content: &str) -> Result<TubeConfig> {
    toml::from_str(content).context("Failed to parse tube config")
}

/// Load the config file if given (defaults otherwise), apply overrides and validate
pub fn resolve_config(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<TubeConfig> {
    let mut config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("Invalid config file: {}", path.display()))?
        }
        None => TubeConfig::default(),
    };

    overrides.apply(&mut config);
    config.validate()?;
    Ok(config)
}

/// Render a config as TOML
pub fn config_to_toml(config: &TubeConfig) -> Result<String> {
    toml::to_string(config).context("Failed to serialize tube config")
}
