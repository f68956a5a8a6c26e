use neutrino_core::MeshError;
use thiserror::Error;

/// Errors that can occur while building neighbour graphs and other index arrays from a mesh
///
/// All of these are detected before any previously computed result is replaced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NeighbourhoodError {
    /// The physical group does not exist or contains no nodes
    #[error("physical group ({dimension}, {tag}) does not exist or has no nodes")]
    InvalidGroupReference { dimension: i32, tag: i32 },

    /// The element type is unknown to the mesh
    #[error("element type {0} is unknown to the mesh")]
    InvalidElementType(i32),

    /// Node or element tags can't be converted into zero-based indices. Renumbering the mesh fixes this
    #[error("mesh tags are not normalized ({0}), renumber the mesh first")]
    UnnormalizedTags(#[from] MeshError),

    /// A qualifying element lists the same node more than once, which is rejected under
    /// `DuplicateNodePolicy::Reject`
    #[error("element {element} lists node {node} more than once")]
    DegenerateNeighbourRemoval { element: usize, node: usize },

    /// A count or index does not fit into the 32 bit upload format
    #[error("{0} does not fit into a 32 bit index")]
    IndexOverflow(usize),
}

/// Result type for neighbourhood operations
pub type NeighbourhoodResult<T> = std::result::Result<T, NeighbourhoodError>;

/// Converts `value` into the 32 bit index type used for all uploaded arrays
pub(crate) fn to_index(value: usize) -> NeighbourhoodResult<u32> {
    u32::try_from(value).map_err(|_| NeighbourhoodError::IndexOverflow(value))
}
