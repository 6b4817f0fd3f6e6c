//! Tube construction
//!
//! One tube is a strip of quads swept along an axis in a bone's local frame:
//! `lateral_subdivisions` rings, each split into `radial_subdivisions` facets.
//! The cross-section lies in the local XZ plane and the sweep runs from the
//! local origin to the axis endpoint. Every quad gets four fresh vertices.

use glam::{Mat3, Mat4, Vec2, Vec3};

use crate::config::TubeConfig;
use crate::frame_cache::FrameCache;
use crate::hierarchy::Bone;
use crate::types::BoneWeight;

/// Vertex and index streams shared by every tube of one mesh
#[derive(Debug, Clone, Default)]
pub struct TubeStreams {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub bone_weights: Vec<BoneWeight>,
    pub indices: Vec<u32>,
}

impl TubeStreams {
    /// Create streams sized for `quads` quads
    pub fn with_capacity(quads: usize) -> Self {
        let vertices = quads * 4;
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            uvs: Vec::with_capacity(vertices),
            bone_weights: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(vertices),
        }
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    fn push_vertex(&mut self, position: Vec3, normal: Vec3, uv: Vec2, weight: BoneWeight) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position.to_array());
        self.normals.push(normal.to_array());
        self.uvs.push(uv.to_array());
        self.bone_weights.push(weight);
        index
    }
}

/// Append one tube for `bone` to `streams`.
///
/// # Arguments
/// * `bone` - Bone-list index every vertex is rigidly bound to
/// * `local_to_reference` - Bone-local to reference-frame transform
/// * `axis` - Sweep axis in bone-local space
/// * `radius` - Cross-section radius
/// * `cache` - Radial and lateral tables
///
/// Appends exactly `radial * lateral` quads. Winding follows the right-hand
/// rule around the outward normal; it is reversed when exactly one of "axis
/// points down local Y" and "transform mirrors" holds, since either flips the
/// handedness of the swept surface.
pub fn append_tube(
    streams: &mut TubeStreams,
    bone: u32,
    local_to_reference: &Mat4,
    axis: Vec3,
    radius: f32,
    cache: &FrameCache,
) {
    let linear = Mat3::from_mat4(*local_to_reference);
    let reverse = (axis.y < 0.0) != (linear.determinant() < 0.0);

    let radial_count = cache.radial_subdivisions();
    let lateral_count = cache.lateral_subdivisions();
    let weight = BoneWeight::rigid(bone);

    for lateral in 0..lateral_count {
        let next_lateral = lateral + 1;

        for radial in 0..radial_count {
            let next_radial = (radial + 1) % radial_count;

            // (u index, radial sample, lateral index); the u index of the closing
            // facet is radial_count so the seam gets u = 1.0 rather than 0.0
            let mut corners = [
                (radial + 1, next_radial, lateral),
                (radial, radial, lateral),
                (radial, radial, next_lateral),
                (radial + 1, next_radial, next_lateral),
            ];
            if reverse {
                corners.swap(1, 3);
            }

            for (u_index, sample, ring) in corners {
                let sample = cache.radial[sample];
                let offset = Vec3::new(sample.x, 0.0, sample.y);

                let local = cache.lateral[ring] * axis + radius * offset;
                let position = local_to_reference.transform_point3(local);
                let normal = (linear * offset).normalize();
                let uv = Vec2::new(u_index as f32 / radial_count as f32, cache.lateral[ring]);

                let index = streams.push_vertex(position, normal, uv, weight);
                streams.indices.push(index);
            }
        }
    }
}

/// Stub axis for a leaf bone, `None` when the bone has children or stubs are off
pub fn leaf_stub_axis(bone: &Bone, config: &TubeConfig) -> Option<Vec3> {
    if bone.is_leaf() && config.leaf_stub_enabled() {
        Some(Vec3::new(0.0, config.leaf_axis_length, 0.0))
    } else {
        None
    }
}
