use crate::math::AABB;

use std::{any::Any, fmt::Display};

/// Trait that represents metadata of a mesh source. Metadata is everything that is not the mesh itself,
/// e.g. the file format version or the names of physical groups. There are some common accessors in this
/// trait, and a generic accessor for named fields that depend on the actual mesh source.
pub trait Metadata: Display {
    /// Returns the bounding box of all nodes, if the source knows it
    fn bounds(&self) -> Option<AABB<f64>>;
    /// Returns the number of nodes, if the source knows it
    fn number_of_nodes(&self) -> Option<usize>;
    /// Returns the number of elements, if the source knows it
    fn number_of_elements(&self) -> Option<usize>;
    /// Returns the value of the metadata field named `field_name`, if it exists.
    fn get_named_field(&self, field_name: &str) -> Option<Box<dyn Any>>;
    /// Clone the associated `Metadata` and put it into a `Box`
    fn clone_into_box(&self) -> Box<dyn Metadata>;
}
