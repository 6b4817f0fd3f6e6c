//! Tube generation settings
//!
//! Serialized to/from TOML by hosts that persist them; every field falls back
//! to its default when missing.

use serde::{Deserialize, Serialize};

use crate::TubeError;

/// Valid range for [`TubeConfig::radial_subdivisions`]
pub const RADIAL_SUBDIVISIONS: std::ops::RangeInclusive<u32> = 3..=1000;

/// Valid range for [`TubeConfig::lateral_subdivisions`]
pub const LATERAL_SUBDIVISIONS: std::ops::RangeInclusive<u32> = 1..=1000;

/// Parameters shared by every tube in one generated mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TubeConfig {
    /// Cross-section radius of every tube (default: 0.01, must be > 0)
    #[serde(default = "default_radius")]
    pub radius: f32,
    /// Length of the stub drawn at leaf bones (default: 0.01, negative disables)
    #[serde(default = "default_leaf_axis_length")]
    pub leaf_axis_length: f32,
    /// Facets around each tube (default: 6, range: 3-1000)
    #[serde(default = "default_radial_subdivisions")]
    pub radial_subdivisions: u32,
    /// Segments along each tube (default: 3, range: 1-1000)
    #[serde(default = "default_lateral_subdivisions")]
    pub lateral_subdivisions: u32,
}

fn default_radius() -> f32 {
    0.01
}
fn default_leaf_axis_length() -> f32 {
    0.01
}
fn default_radial_subdivisions() -> u32 {
    6
}
fn default_lateral_subdivisions() -> u32 {
    3
}

impl Default for TubeConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            leaf_axis_length: default_leaf_axis_length(),
            radial_subdivisions: default_radial_subdivisions(),
            lateral_subdivisions: default_lateral_subdivisions(),
        }
    }
}

impl TubeConfig {
    /// Whether leaf bones receive a stub tube
    pub fn leaf_stub_enabled(&self) -> bool {
        self.leaf_axis_length >= 0.0
    }

    /// Quads emitted for one tube
    pub fn quads_per_tube(&self) -> usize {
        self.radial_subdivisions as usize * self.lateral_subdivisions as usize
    }

    /// Check every field against its documented range
    pub fn validate(&self) -> Result<(), TubeError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(TubeError::InvalidConfig(format!(
                "radius must be finite and > 0, got {}",
                self.radius
            )));
        }
        if !self.leaf_axis_length.is_finite() {
            return Err(TubeError::InvalidConfig(format!(
                "leaf_axis_length must be finite, got {}",
                self.leaf_axis_length
            )));
        }
        if !RADIAL_SUBDIVISIONS.contains(&self.radial_subdivisions) {
            return Err(TubeError::InvalidConfig(format!(
                "radial_subdivisions must be in {}..={}, got {}",
                RADIAL_SUBDIVISIONS.start(),
                RADIAL_SUBDIVISIONS.end(),
                self.radial_subdivisions
            )));
        }
        if !LATERAL_SUBDIVISIONS.contains(&self.lateral_subdivisions) {
            return Err(TubeError::InvalidConfig(format!(
                "lateral_subdivisions must be in {}..={}, got {}",
                LATERAL_SUBDIVISIONS.start(),
                LATERAL_SUBDIVISIONS.end(),
                self.lateral_subdivisions
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = TubeConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.leaf_stub_enabled());
        assert_eq!(config.quads_per_tube(), 18);
    }

    #[test]
    fn test_radius_must_be_positive() {
        for radius in [0.0, -0.5, f32::NAN, f32::INFINITY] {
            let config = TubeConfig {
                radius,
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(TubeError::InvalidConfig(_))),
                "radius {radius} should be rejected"
            );
        }
    }

    #[test]
    fn test_subdivision_bounds() {
        let at = |radial, lateral| TubeConfig {
            radial_subdivisions: radial,
            lateral_subdivisions: lateral,
            ..Default::default()
        };

        assert!(at(3, 1).validate().is_ok());
        assert!(at(1000, 1000).validate().is_ok());
        assert!(at(2, 3).validate().is_err());
        assert!(at(1001, 3).validate().is_err());
        assert!(at(6, 0).validate().is_err());
        assert!(at(6, 1001).validate().is_err());
    }

    #[test]
    fn test_negative_leaf_length_disables_stub() {
        let config = TubeConfig {
            leaf_axis_length: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert!(!config.leaf_stub_enabled());

        let zero = TubeConfig {
            leaf_axis_length: 0.0,
            ..Default::default()
        };
        assert!(zero.leaf_stub_enabled());
    }

    #[test]
    fn test_nan_leaf_length_rejected() {
        let config = TubeConfig {
            leaf_axis_length: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
