#![warn(clippy::all)]
//! Algorithms that operate on neutrino meshes.
//!
//! The central algorithm is the [neighbour graph builder](crate::neighbourhood::NeighbourGraphBuilder), which
//! turns a physical group of a mesh into flat incidence and adjacency arrays that can be uploaded to a GPU.

// Axis aligned bounds of a whole mesh or a physical group.
pub mod bounds;
mod error;
pub use self::error::*;
// Selection of the nodes and fully contained elements of a physical group.
pub mod group;
// Node to incident element lookup in compressed row layout.
pub mod incidence;
// One-ring neighbourhoods of the nodes of a physical group, with link vectors and lengths.
pub mod neighbourhood;
// Reporting of long running phases.
pub mod progress;
// Flattening of all elements of a mesh into index and stride arrays.
pub mod simplex;
