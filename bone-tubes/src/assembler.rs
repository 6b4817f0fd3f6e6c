//! Mesh assembly
//!
//! Drives one generation pass: walk the skeleton, build a tube from every
//! non-root bone back to its parent (plus a stub at leaves), compute bind
//! poses, then check the structural invariants before handing the buffers out.

use glam::{Mat4, Vec3};
use tracing::{debug, trace};

use crate::TubeError;
use crate::config::TubeConfig;
use crate::frame_cache::FrameCache;
use crate::hierarchy::{self, Bone};
use crate::skeleton::Skeleton;
use crate::tube::{TubeStreams, append_tube, leaf_stub_axis};
use crate::types::MeshBuffers;

/// Generate the tube mesh for `skeleton`.
///
/// All geometry is expressed in the frame of the skeleton's root. A failed call
/// returns no buffers at all.
pub fn generate(skeleton: &Skeleton, config: &TubeConfig) -> Result<MeshBuffers, TubeError> {
    config.validate()?;

    let bones = hierarchy::walk(skeleton)?;
    let world_to_local = inverse_worlds(&bones)?;

    let tubes = count_tubes(&bones, config);
    let quads = tubes * config.quads_per_tube();
    if quads.saturating_mul(4) > u32::MAX as usize {
        return Err(TubeError::InvalidConfig(format!(
            "{quads} quads exceed the u32 index range"
        )));
    }

    let cache = FrameCache::new(config.radial_subdivisions, config.lateral_subdivisions);
    let mut streams = TubeStreams::with_capacity(quads);
    let mut bind_poses = Vec::with_capacity(bones.len());

    let reference_to_world = bones[0].world;
    let world_to_reference = world_to_local[0];

    for (index, bone) in bones.iter().enumerate() {
        bind_poses.push(world_to_local[index] * reference_to_world);

        let Some(parent) = bone.parent else {
            continue;
        };

        let local_to_reference = world_to_reference * bone.world;
        let axis = parent_axis(&world_to_local[index], &bones[parent]);

        trace!(
            bone = %bone.name,
            index,
            axis_length = axis.length(),
            "building tube"
        );
        append_tube(
            &mut streams,
            index as u32,
            &local_to_reference,
            axis,
            config.radius,
            &cache,
        );

        if let Some(stub) = leaf_stub_axis(bone, config) {
            trace!(bone = %bone.name, index, "building leaf stub");
            append_tube(
                &mut streams,
                index as u32,
                &local_to_reference,
                stub,
                config.radius,
                &cache,
            );
        }
    }

    let mesh = MeshBuffers {
        positions: streams.positions,
        normals: streams.normals,
        uvs: streams.uvs,
        bone_weights: streams.bone_weights,
        indices: streams.indices,
        bind_poses,
        bones,
        root: 0,
    };
    validate(&mesh)?;

    debug!(
        root = %mesh.root_bone().name,
        bones = mesh.bones.len(),
        tubes,
        vertices = mesh.vertex_count(),
        quads = mesh.quad_count(),
        "generated tube mesh"
    );

    Ok(mesh)
}

/// Number of tubes the pass will build: one per non-root bone, plus one per
/// non-root leaf when stubs are enabled
pub fn count_tubes(bones: &[Bone], config: &TubeConfig) -> usize {
    bones
        .iter()
        .filter(|bone| bone.parent.is_some())
        .map(|bone| 1 + usize::from(leaf_stub_axis(bone, config).is_some()))
        .sum()
}

/// Axis from a bone's origin to its parent's origin, in the bone's local frame
pub fn parent_axis(world_to_local: &Mat4, parent: &Bone) -> Vec3 {
    world_to_local.transform_point3(parent.world.w_axis.truncate())
}

fn inverse_worlds(bones: &[Bone]) -> Result<Vec<Mat4>, TubeError> {
    bones
        .iter()
        .map(|bone| {
            let det = bone.world.determinant();
            if det == 0.0 || !det.is_finite() {
                return Err(TubeError::SingularTransform(bone.name.clone()));
            }
            Ok(bone.world.inverse())
        })
        .collect()
}

/// Check the invariants every returned mesh must satisfy
pub fn validate(mesh: &MeshBuffers) -> Result<(), TubeError> {
    let bones = mesh.bones.len();

    if mesh.bind_poses.len() != bones {
        return Err(TubeError::BindPoseCountMismatch {
            poses: mesh.bind_poses.len(),
            bones,
        });
    }

    let vertices = mesh.positions.len();
    if mesh.normals.len() != vertices
        || mesh.uvs.len() != vertices
        || mesh.bone_weights.len() != vertices
    {
        return Err(TubeError::VertexStreamMismatch {
            positions: vertices,
            normals: mesh.normals.len(),
            uvs: mesh.uvs.len(),
            weights: mesh.bone_weights.len(),
        });
    }

    if let Some((vertex, weight)) = mesh
        .bone_weights
        .iter()
        .enumerate()
        .find(|(_, weight)| weight.bone() as usize >= bones)
    {
        return Err(TubeError::BoneWeightOutOfRange {
            vertex,
            bone: weight.bone(),
            bones,
        });
    }

    if mesh.indices.len() % 4 != 0 {
        return Err(TubeError::QuadIndexCountMismatch(mesh.indices.len()));
    }

    Ok(())
}
