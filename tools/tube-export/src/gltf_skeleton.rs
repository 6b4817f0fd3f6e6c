//! Skeleton import (glTF node hierarchy -> bone-tubes snapshot)
//!
//! Any node subtree can serve as a skeleton; skins are not required. The
//! chosen root's own transform becomes its world transform, so ancestors above
//! it are ignored. Tube geometry is expressed relative to the root anyway.

use anyhow::{Context, Result, bail};
use bone_tubes::Skeleton;
use glam::Mat4;
use std::path::Path;

/// Load the node hierarchy under `root` (or the scene's single root node)
pub fn load_gltf_skeleton(input: &Path, root: Option<&str>) -> Result<Skeleton> {
    let gltf =
        gltf::Gltf::open(input).with_context(|| format!("Failed to load glTF: {:?}", input))?;
    skeleton_from_document(&gltf.document, root)
}

/// Build a skeleton snapshot from an already parsed document
pub fn skeleton_from_document(document: &gltf::Document, root: Option<&str>) -> Result<Skeleton> {
    let root = find_root(document, root)?;

    let mut skeleton = Skeleton::new();
    let mut visited = vec![false; document.nodes().len()];
    let mut stack = vec![(root, None)];

    while let Some((node, parent)) = stack.pop() {
        if std::mem::replace(&mut visited[node.index()], true) {
            bail!("Node {} is reachable twice, hierarchy is not a tree", node.index());
        }

        let local = Mat4::from_cols_array_2d(&node.transform().matrix());
        let index = skeleton.add_bone(node_name(&node), parent, local);

        let children: Vec<_> = node.children().collect();
        for child in children.into_iter().rev() {
            stack.push((child, Some(index)));
        }
    }

    Ok(skeleton)
}

fn find_root<'a>(document: &'a gltf::Document, name: Option<&str>) -> Result<gltf::Node<'a>> {
    if let Some(name) = name {
        return document
            .nodes()
            .find(|n| n.name() == Some(name))
            .with_context(|| format!("Node '{}' not found in glTF", name));
    }

    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .context("No scenes found in glTF file")?;

    let roots: Vec<_> = scene.nodes().collect();
    match roots.as_slice() {
        [root] => Ok(root.clone()),
        [] => bail!("Scene has no nodes"),
        _ => bail!(
            "Scene has {} root nodes, select one with --root ({})",
            roots.len(),
            roots.iter().map(node_name).collect::<Vec<_>>().join(", ")
        ),
    }
}

fn node_name(node: &gltf::Node) -> String {
    node.name()
        .map(str::to_owned)
        .unwrap_or_else(|| format!("node{}", node.index()))
}
