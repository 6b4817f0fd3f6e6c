//! Skeleton snapshot
//!
//! An immutable, flattened copy of a host's node hierarchy. Nodes refer to
//! their parent by index into the same array; the generator never touches the
//! host's live scene graph.

use glam::Mat4;

/// One jointed coordinate frame of a skeleton
#[derive(Debug, Clone, PartialEq)]
pub struct SkeletonNode {
    /// Node name, carried through to the bone list
    pub name: String,
    /// Index of the parent node (`None` for the root)
    pub parent: Option<usize>,
    /// Parent-relative transform
    pub local: Mat4,
    /// Local-to-world transform
    pub world: Mat4,
}

/// Flat array of skeleton nodes linked by parent index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Skeleton {
    nodes: Vec<SkeletonNode>,
}

impl Skeleton {
    /// Create an empty skeleton
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Wrap host-supplied nodes whose world transforms are already resolved
    pub fn from_nodes(nodes: Vec<SkeletonNode>) -> Self {
        Self { nodes }
    }

    /// Append a node given its parent-relative transform, returning its index
    ///
    /// The world transform is accumulated from the parent, which must already
    /// be present. An unknown parent leaves the world equal to `local`; the
    /// hierarchy walker rejects such a link later.
    pub fn add_bone(&mut self, name: impl Into<String>, parent: Option<usize>, local: Mat4) -> usize {
        let world = match parent.and_then(|p| self.nodes.get(p)) {
            Some(parent_node) => parent_node.world * local,
            None => local,
        };

        let index = self.nodes.len();
        self.nodes.push(SkeletonNode {
            name: name.into(),
            parent,
            local,
            world,
        });
        index
    }

    /// All nodes in snapshot order
    pub fn nodes(&self) -> &[SkeletonNode] {
        &self.nodes
    }

    /// Node at `index`
    pub fn node(&self, index: usize) -> Option<&SkeletonNode> {
        self.nodes.get(index)
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the snapshot has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Indices of the direct children of `index`, in snapshot order
    pub fn children(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, node)| node.parent == Some(index))
            .map(|(i, _)| i)
    }

    /// Number of direct children of `index`
    pub fn child_count(&self, index: usize) -> usize {
        self.children(index).count()
    }

    /// Find a node by name
    pub fn find(&self, name: &str) -> Option<usize> {
        self.nodes.iter().position(|node| node.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_add_bone_accumulates_world() {
        let mut skeleton = Skeleton::new();
        let root = skeleton.add_bone("root", None, Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0)));
        let child = skeleton.add_bone("child", Some(root), Mat4::from_translation(Vec3::Y));

        let world = skeleton.nodes()[child].world;
        assert!(world.w_axis.truncate().abs_diff_eq(Vec3::new(1.0, 1.0, 0.0), 1e-6));
    }

    #[test]
    fn test_children_in_snapshot_order() {
        let mut skeleton = Skeleton::new();
        let root = skeleton.add_bone("root", None, Mat4::IDENTITY);
        let a = skeleton.add_bone("a", Some(root), Mat4::IDENTITY);
        let _ = skeleton.add_bone("a1", Some(a), Mat4::IDENTITY);
        let b = skeleton.add_bone("b", Some(root), Mat4::IDENTITY);

        let children: Vec<usize> = skeleton.children(root).collect();
        assert_eq!(children, vec![a, b]);
        assert_eq!(skeleton.child_count(a), 1);
        assert_eq!(skeleton.child_count(b), 0);
    }

    #[test]
    fn test_unknown_parent_keeps_local() {
        let mut skeleton = Skeleton::new();
        let local = Mat4::from_translation(Vec3::Z);
        let index = skeleton.add_bone("orphan", Some(7), local);
        assert_eq!(skeleton.nodes()[index].world, local);
    }

    #[test]
    fn test_find_by_name() {
        let mut skeleton = Skeleton::new();
        skeleton.add_bone("hips", None, Mat4::IDENTITY);
        skeleton.add_bone("spine", Some(0), Mat4::IDENTITY);
        assert_eq!(skeleton.find("spine"), Some(1));
        assert_eq!(skeleton.find("head"), None);
    }
}
