#![warn(clippy::all)]

//! Core data structures for turning finite element meshes into GPU-ready index arrays
//!
//! neutrino reads a tessellated mesh (nodes, entities, elements, physical groups) and derives flat
//! index/offset arrays from it that can be uploaded into fixed-size device buffers. This crate contains the
//! mesh data model. The best way to get started is to look at the [Mesh](crate::mesh::Mesh) type and the
//! [MeshProvider](crate::mesh::MeshProvider) trait, which is what all algorithms in `neutrino-algorithms`
//! consume.

pub extern crate nalgebra;
extern crate self as neutrino_core;

mod error;
pub use self::error::*;

/// Useful mathematical tools when working with mesh data
pub mod math;
/// Mesh entities, nodes, elements and physical groups
pub mod mesh;
/// Data structures for handling mesh metadata
pub mod meta;
/// Utilities
pub mod util;
