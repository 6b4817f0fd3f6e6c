//! Cross-section and sweep lookup tables
//!
//! Computed once per generation call so tube construction needs no
//! trigonometry per vertex.

use glam::Vec2;
use std::f32::consts::TAU;

/// Radial unit-circle samples and lateral sweep fractions
#[derive(Debug, Clone, PartialEq)]
pub struct FrameCache {
    /// `(cos θ, sin θ)` for θ = 2π·i/n, counter-clockwise from θ = 0
    pub radial: Vec<Vec2>,
    /// `i / lateral_subdivisions` for i in 0..=lateral_subdivisions
    pub lateral: Vec<f32>,
}

impl FrameCache {
    /// Build the tables for the given subdivision counts
    pub fn new(radial_subdivisions: u32, lateral_subdivisions: u32) -> Self {
        let step = TAU / radial_subdivisions as f32;
        let radial = (0..radial_subdivisions)
            .map(|i| {
                let (sin, cos) = (step * i as f32).sin_cos();
                Vec2::new(cos, sin)
            })
            .collect();

        let lateral = (0..=lateral_subdivisions)
            .map(|i| i as f32 / lateral_subdivisions as f32)
            .collect();

        Self { radial, lateral }
    }

    /// Number of facets around the cross-section
    pub fn radial_subdivisions(&self) -> usize {
        self.radial.len()
    }

    /// Number of segments along the sweep
    pub fn lateral_subdivisions(&self) -> usize {
        self.lateral.len() - 1
    }
}
