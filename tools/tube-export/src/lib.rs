//! tube-export library
//!
//! Host-side glue for bone-tubes: reads skeletons from glTF node hierarchies
//! and resolves tube settings from TOML files and command-line overrides.

pub mod gltf_skeleton;
pub mod settings;

pub use gltf_skeleton::{load_gltf_skeleton, skeleton_from_document};
pub use settings::{ConfigOverrides, config_to_toml, parse_config, resolve_config};
