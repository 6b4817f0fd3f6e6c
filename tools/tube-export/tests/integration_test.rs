//! Integration tests for tube-export
//!
//! Tests the full pipeline: write glTF rig -> run tube-export -> verify OBJ

use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

/// hips -> spine -> head, hips -> tail
const RIG: &str = r#"{
    "asset": { "version": "2.0" },
    "scene": 0,
    "scenes": [{ "nodes": [0] }],
    "nodes": [
        { "name": "hips", "children": [1, 3] },
        { "name": "spine", "children": [2], "translation": [0.0, 1.0, 0.0] },
        { "name": "head", "translation": [0.0, 0.5, 0.0] },
        { "name": "tail", "translation": [0.0, -0.5, -0.3] }
    ]
}"#;

fn write_rig(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("rig.gltf");
    std::fs::write(&path, RIG).expect("Failed to write glTF");
    path
}

fn tube_export(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tube-export"))
        .args(args)
        .output()
        .expect("Failed to run tube-export")
}

fn count_lines(text: &str, prefix: &str) -> usize {
    text.lines().filter(|l| l.starts_with(prefix)).count()
}

/// Test glTF -> OBJ without leaf stubs
#[test]
fn test_mesh_without_stubs() {
    let dir = tempdir().expect("Failed to create temp dir");
    let rig = write_rig(dir.path());
    let obj = dir.path().join("rig.obj");

    let output = tube_export(&[
        "mesh",
        rig.to_str().unwrap(),
        "-o",
        obj.to_str().unwrap(),
        "--radial",
        "4",
        "--lateral",
        "1",
        "--leaf-axis-length",
        "-1",
    ]);
    assert!(output.status.success(), "tube-export mesh command failed");

    let text = std::fs::read_to_string(&obj).expect("Failed to read OBJ");
    // spine, head, tail: 3 tubes of 4 quads
    assert_eq!(count_lines(&text, "f "), 12);
    assert_eq!(count_lines(&text, "v "), 48);
    assert!(text.contains("o Tubes_hips"));
}

/// Test glTF -> OBJ with leaf stubs from a config file
#[test]
fn test_mesh_with_config_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let rig = write_rig(dir.path());
    let obj = dir.path().join("rig.obj");
    let config = dir.path().join("tubes.toml");
    std::fs::write(
        &config,
        "radius = 0.05\nleaf_axis_length = 0.1\nradial_subdivisions = 6\nlateral_subdivisions = 2\n",
    )
    .expect("Failed to write config");

    let output = tube_export(&[
        "mesh",
        rig.to_str().unwrap(),
        "-o",
        obj.to_str().unwrap(),
        "-c",
        config.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "tube-export mesh command failed");

    let text = std::fs::read_to_string(&obj).expect("Failed to read OBJ");
    // 3 bone tubes + stubs on head and tail, 12 quads each
    assert_eq!(count_lines(&text, "f "), 5 * 12);
}

/// Test subtree selection by root name
#[test]
fn test_mesh_from_named_root() {
    let dir = tempdir().expect("Failed to create temp dir");
    let rig = write_rig(dir.path());
    let obj = dir.path().join("spine.obj");

    let output = tube_export(&[
        "mesh",
        rig.to_str().unwrap(),
        "-o",
        obj.to_str().unwrap(),
        "--root",
        "spine",
        "--radial",
        "3",
        "--lateral",
        "2",
        "--leaf-axis-length",
        "-1",
    ]);
    assert!(output.status.success(), "tube-export mesh command failed");

    let text = std::fs::read_to_string(&obj).expect("Failed to read OBJ");
    assert_eq!(count_lines(&text, "f "), 6);
    assert!(text.contains("o Tubes_spine"));
}

/// Invalid settings fail without writing output
#[test]
fn test_invalid_config_fails() {
    let dir = tempdir().expect("Failed to create temp dir");
    let rig = write_rig(dir.path());
    let obj = dir.path().join("rig.obj");

    let output = tube_export(&[
        "mesh",
        rig.to_str().unwrap(),
        "-o",
        obj.to_str().unwrap(),
        "--radius",
        "0",
    ]);
    assert!(!output.status.success());
    assert!(!obj.exists(), "No OBJ should be written on failure");
}

/// Test config command prints effective TOML
#[test]
fn test_config_command() {
    let output = tube_export(&["config", "--radial", "9"]);
    assert!(output.status.success(), "tube-export config command failed");

    let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8");
    assert!(stdout.contains("radial_subdivisions = 9"));
    assert!(stdout.contains("lateral_subdivisions = 3"));
}

/// Test bones command succeeds on a valid rig
#[test]
fn test_bones_command() {
    let dir = tempdir().expect("Failed to create temp dir");
    let rig = write_rig(dir.path());

    let output = tube_export(&["bones", rig.to_str().unwrap()]);
    assert!(output.status.success(), "tube-export bones command failed");
}
