//! Output types
//!
//! Shared by the tube builder and the assembler.

use bytemuck::{Pod, Zeroable, cast_slice};
use glam::Mat4;

use crate::hierarchy::Bone;

/// Four-influence skin weight, laid out for direct GPU upload
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct BoneWeight {
    /// Bone-list indices of the influences
    pub joints: [u32; 4],
    /// Influence weights, summing to 1
    pub weights: [f32; 4],
}

impl BoneWeight {
    /// Full influence from `bone`, nothing from the other three slots
    pub fn rigid(bone: u32) -> Self {
        Self {
            joints: [bone, 0, 0, 0],
            weights: [1.0, 0.0, 0.0, 0.0],
        }
    }

    /// Primary influence
    pub fn bone(&self) -> u32 {
        self.joints[0]
    }
}

/// Finished tube mesh, owned by the caller
///
/// Every vertex stream has one entry per vertex. `indices` holds quads: each
/// run of 4 indices is one face, and no vertex is shared between faces.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffers {
    /// Positions in the reference (root) frame
    pub positions: Vec<[f32; 3]>,
    /// Unit normals in the reference frame
    pub normals: Vec<[f32; 3]>,
    /// Per-tube rectangular unwrap
    pub uvs: Vec<[f32; 2]>,
    /// One rigid weight per vertex
    pub bone_weights: Vec<BoneWeight>,
    /// Quad topology, 4 indices per face
    pub indices: Vec<u32>,
    /// Bone transform relative to the reference frame, one per bone
    pub bind_poses: Vec<Mat4>,
    /// Bones in walk order; position is the bone index used by weights
    pub bones: Vec<Bone>,
    /// Bone-list index of the root (always 0)
    pub root: usize,
}

impl MeshBuffers {
    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get quad count
    pub fn quad_count(&self) -> usize {
        self.indices.len() / 4
    }

    /// Root bone
    pub fn root_bone(&self) -> &Bone {
        &self.bones[self.root]
    }

    /// Mesh name derived from the root bone
    pub fn name(&self) -> String {
        format!("Tubes_{}", self.root_bone().name)
    }

    /// Triangle list equivalent of the quad topology
    ///
    /// Quad `[a, b, c, d]` becomes `[a, b, c]` and `[a, c, d]`, keeping winding.
    pub fn triangle_indices(&self) -> Vec<u32> {
        let mut triangles = Vec::with_capacity(self.quad_count() * 6);
        for quad in self.indices.chunks_exact(4) {
            triangles.extend_from_slice(&[quad[0], quad[1], quad[2], quad[0], quad[2], quad[3]]);
        }
        triangles
    }

    /// Positions as raw bytes (12 bytes per vertex)
    pub fn position_bytes(&self) -> &[u8] {
        cast_slice(&self.positions)
    }

    /// Normals as raw bytes (12 bytes per vertex)
    pub fn normal_bytes(&self) -> &[u8] {
        cast_slice(&self.normals)
    }

    /// UVs as raw bytes (8 bytes per vertex)
    pub fn uv_bytes(&self) -> &[u8] {
        cast_slice(&self.uvs)
    }

    /// Bone weights as raw bytes (32 bytes per vertex)
    pub fn bone_weight_bytes(&self) -> &[u8] {
        cast_slice(&self.bone_weights)
    }

    /// Bind poses as column-major floats (16 per bone)
    pub fn bind_pose_arrays(&self) -> Vec<[f32; 16]> {
        self.bind_poses.iter().map(Mat4::to_cols_array).collect()
    }
}
