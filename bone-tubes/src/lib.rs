//! Skinned tube meshes for skeleton visualization
//!
//! Turns a skeleton snapshot into one mesh where every bone is drawn as a
//! cylinder reaching back to its parent, with a short stub on leaf bones.
//! Each vertex is bound rigidly to a single bone, so the mesh follows the
//! skeleton when skinned with the returned bind poses.
//!
//! # Example
//! ```no_run
//! use bone_tubes::*;
//! use glam::{Mat4, Vec3};
//!
//! let mut skeleton = Skeleton::new();
//! let hips = skeleton.add_bone("hips", None, Mat4::IDENTITY);
//! let spine = skeleton.add_bone("spine", Some(hips), Mat4::from_translation(Vec3::Y));
//! skeleton.add_bone("head", Some(spine), Mat4::from_translation(Vec3::Y * 0.5));
//!
//! let mesh = generate(&skeleton, &TubeConfig::default())?;
//! assert_eq!(mesh.bind_poses.len(), 3);
//!
//! write_obj(&mesh, "tubes.obj".as_ref(), &mesh.name())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod assembler;
pub mod config;
mod error;
pub mod export;
pub mod frame_cache;
pub mod hierarchy;
pub mod skeleton;
pub mod tube;
mod types;


pub use assembler::generate;
pub use config::TubeConfig;
pub use error::TubeError;
pub use export::write_obj;
pub use hierarchy::Bone;
pub use skeleton::{Skeleton, SkeletonNode};
pub use types::{BoneWeight, MeshBuffers};
