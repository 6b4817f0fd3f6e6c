//! Hierarchy walker
//!
//! Flattens a [`Skeleton`] into a pre-order bone list. The position of a bone
//! in that list is its identity for weights and bind poses, so the order must
//! be stable: children are visited in snapshot order.

use glam::Mat4;

use crate::TubeError;
use crate::skeleton::Skeleton;

/// A skeleton node placed in walk order
#[derive(Debug, Clone, PartialEq)]
pub struct Bone {
    /// Node name
    pub name: String,
    /// Index of the source node in the skeleton snapshot
    pub node: usize,
    /// Bone-list index of the parent (`None` for the root)
    pub parent: Option<usize>,
    /// Parent-relative transform
    pub local: Mat4,
    /// Local-to-world transform
    pub world: Mat4,
    /// Number of direct children
    pub child_count: usize,
}

impl Bone {
    /// Whether the bone has no children
    pub fn is_leaf(&self) -> bool {
        self.child_count == 0
    }
}

/// Walk `skeleton` depth-first from its single root.
///
/// Element 0 of the result is the root and every bone's ancestors precede it.
pub fn walk(skeleton: &Skeleton) -> Result<Vec<Bone>, TubeError> {
    let nodes = skeleton.nodes();
    if nodes.is_empty() {
        return Err(TubeError::EmptySkeleton);
    }

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
    let mut roots = Vec::new();
    for (index, node) in nodes.iter().enumerate() {
        match node.parent {
            None => roots.push(index),
            Some(parent) if parent == index => {
                return Err(TubeError::MalformedSkeleton(format!(
                    "node '{}' is its own parent",
                    node.name
                )));
            }
            Some(parent) if parent >= nodes.len() => {
                return Err(TubeError::MalformedSkeleton(format!(
                    "node '{}' references missing parent {}",
                    node.name, parent
                )));
            }
            Some(parent) => children[parent].push(index),
        }
    }

    let root = match roots.as_slice() {
        [root] => *root,
        [] => {
            return Err(TubeError::MalformedSkeleton(
                "no parentless node, parent links form a cycle".to_string(),
            ));
        }
        _ => {
            return Err(TubeError::MalformedSkeleton(format!(
                "{} disconnected roots",
                roots.len()
            )));
        }
    };

    let mut bones: Vec<Bone> = Vec::with_capacity(nodes.len());
    // (node index, parent bone index)
    let mut stack: Vec<(usize, Option<usize>)> = vec![(root, None)];
    while let Some((index, parent)) = stack.pop() {
        let node = &nodes[index];
        let bone_index = bones.len();
        bones.push(Bone {
            name: node.name.clone(),
            node: index,
            parent,
            local: node.local,
            world: node.world,
            child_count: children[index].len(),
        });

        for &child in children[index].iter().rev() {
            stack.push((child, Some(bone_index)));
        }
    }

    if bones.len() != nodes.len() {
        return Err(TubeError::MalformedSkeleton(format!(
            "{} nodes unreachable from root '{}', parent links form a cycle",
            nodes.len() - bones.len(),
            nodes[root].name
        )));
    }

    Ok(bones)
}
