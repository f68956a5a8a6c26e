use thiserror::Error;

/// Which kind of tag a [`MeshError`] refers to
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TagKind {
    Node,
    Element,
}

impl std::fmt::Display for TagKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagKind::Node => write!(f, "node"),
            TagKind::Element => write!(f, "element"),
        }
    }
}

/// Errors that can occur while building, validating or renumbering a mesh
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// The tags are not exactly the numbers `1..=count`
    #[error("{kind} tags are not contiguous from 1: {reason}")]
    NonContiguousTags { kind: TagKind, reason: String },

    /// A tag is referenced that the mesh does not define
    #[error("unknown {kind} tag {tag}")]
    UnknownTag { kind: TagKind, tag: usize },

    /// Element connectivity is not a multiple of the element type's node count
    #[error("element type {element_type} expects {stride} nodes per element, got {node_tags} node tags for {elements} elements")]
    InvalidConnectivity {
        element_type: i32,
        stride: usize,
        elements: usize,
        node_tags: usize,
    },

    /// The element type id is not known
    #[error("unknown element type {0}")]
    UnknownElementType(i32),

    /// Number of node tags and number of coordinates differ
    #[error("{tags} node tags but {coordinates} coordinates")]
    CoordinateMismatch { tags: usize, coordinates: usize },
}

/// Result type for mesh operations
pub type MeshResult<T> = std::result::Result<T, MeshError>;
