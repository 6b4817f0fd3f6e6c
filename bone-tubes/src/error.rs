//! Error type for tube mesh generation

/// Failure of a [`generate`](crate::generate) call.
///
/// Configuration and hierarchy errors are raised before any geometry is built.
/// The structural variants are checked once after assembly and indicate a bug
/// in the generator rather than bad input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TubeError {
    /// Radius, stub length or subdivision count outside its valid range
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Skeleton snapshot has no nodes
    #[error("skeleton has no root node")]
    EmptySkeleton,

    /// Parent links do not form a single rooted tree
    #[error("malformed skeleton: {0}")]
    MalformedSkeleton(String),

    /// World transform of a bone has no inverse
    #[error("bone '{0}' has a singular world transform")]
    SingularTransform(String),

    /// Bind pose count differs from bone count
    #[error("{poses} bind poses for {bones} bones")]
    BindPoseCountMismatch { poses: usize, bones: usize },

    /// A vertex references a bone outside the bone list
    #[error("vertex {vertex} references bone {bone} but only {bones} bones exist")]
    BoneWeightOutOfRange {
        vertex: usize,
        bone: u32,
        bones: usize,
    },

    /// Index list length is not a multiple of 4
    #[error("index count {0} is not a multiple of 4")]
    QuadIndexCountMismatch(usize),

    /// Position, normal, UV and weight streams disagree in length
    #[error(
        "vertex streams disagree: {positions} positions, {normals} normals, {uvs} uvs, {weights} weights"
    )]
    VertexStreamMismatch {
        positions: usize,
        normals: usize,
        uvs: usize,
        weights: usize,
    },
}
