//! The mesh data model
//!
//! A mesh is organised the way Gmsh organises it: a list of geometric [entities](Entity) of dimension
//! 0 to 3, each of which owns a [block of nodes](NodeBlock) and any number of [element blocks](ElementBlock)
//! (one per element type). Entities can carry physical tags, which group them into *physical groups*.
//! Node and element tags are the native, 1-based and possibly non-contiguous numbers of the mesh source.
//!
//! Algorithms never access the concrete [`Mesh`] type directly but go through the [`MeshProvider`]
//! trait, so that other mesh sources can be plugged in.

mod element_type;
pub use self::element_type::*;

mod in_memory;
pub use self::in_memory::*;

mod provider;
pub use self::provider::*;

mod tags;
pub use self::tags::*;

mod summary;
pub use self::summary::*;

/// Simple generated meshes, mostly useful for tests and benchmarks
pub mod primitives;

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A geometric entity, identified by its dimension (0 = point, 1 = curve, 2 = surface, 3 = volume) and
/// its tag. Tags are unique per dimension only
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Entity {
    pub dimension: i32,
    pub tag: i32,
}

impl Entity {
    pub fn new(dimension: i32, tag: i32) -> Self {
        Self { dimension, tag }
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.dimension, self.tag)
    }
}

/// The nodes of one entity (or of one physical group)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeBlock {
    /// Native node tags
    pub tags: Vec<usize>,
    /// One position per tag
    pub coordinates: Vec<Point3<f64>>,
    /// Parametric coordinates on the entity, `dimension` values per node. Empty if the source had none
    pub parametric_coordinates: Vec<f64>,
}

impl NodeBlock {
    pub fn new(tags: Vec<usize>, coordinates: Vec<Point3<f64>>) -> Self {
        Self {
            tags,
            coordinates,
            parametric_coordinates: vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterate over `(tag, position)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Point3<f64>)> + '_ {
        self.tags.iter().copied().zip(self.coordinates.iter())
    }
}

/// Elements of a single element type. `node_tags` holds the constituent node tags of all elements back
/// to back, `stride` tags per element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementBlock {
    pub element_type: i32,
    pub stride: usize,
    pub tags: Vec<usize>,
    pub node_tags: Vec<usize>,
}

impl ElementBlock {
    /// An element block without any elements
    pub fn empty(element_type: i32, stride: usize) -> Self {
        Self {
            element_type,
            stride,
            tags: vec![],
            node_tags: vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterate over `(element tag, node tags)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        // `chunks` panics on zero
        let stride = self.stride.max(1);
        self.tags
            .iter()
            .copied()
            .zip(self.node_tags.chunks(stride))
    }
}

/// A named physical group
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhysicalName {
    pub dimension: i32,
    pub tag: i32,
    pub name: String,
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn test_entity_json() {
        let json = serde_json::to_string(&Entity::new(2, 7)).unwrap();
        assert_eq!(json, r#"{"dimension":2,"tag":7}"#);
        let entity: Entity = serde_json::from_str(&json).unwrap();
        assert_eq!(entity, Entity::new(2, 7));
    }
}
