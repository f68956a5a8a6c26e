//! Whole-mesh upload layout
//!
//! A [`SimplexTable`] flattens every node and every element of a mesh, without regard to physical groups,
//! into arrays that can be copied into device buffers as they are.

use std::collections::HashMap;

use neutrino_core::{
    math::{homogeneous_point, Float4},
    mesh::MeshProvider,
    util::as_upload_bytes,
    MeshError, TagKind,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{to_index, NeighbourhoodResult};

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimplexTable {
    /// Positions of all nodes in entity order (`w = 1`)
    pub node: Vec<Float4>,
    /// Node indices of all elements, back to back
    pub simplex: Vec<u32>,
    /// Number of nodes of each element
    pub simplex_stride: Vec<u32>,
    /// Start of each element in `simplex`
    pub simplex_offset: Vec<u32>,
}

impl SimplexTable {
    /// Flattens `mesh`. A node index is the position of the node's tag in the list of all nodes, so the tags
    /// need not be contiguous. If a tag appears twice its first position wins. Elements referencing a tag
    /// without a node fail with [`MeshError::UnknownTag`]
    pub fn from_mesh<M: MeshProvider + ?Sized>(mesh: &M) -> NeighbourhoodResult<Self> {
        let mut node = Vec::with_capacity(mesh.node_count());
        let mut positions = HashMap::with_capacity(node.capacity());
        for entity in mesh.entities() {
            if let Some(block) = mesh.nodes(entity) {
                for (tag, position) in block.iter() {
                    positions.entry(tag).or_insert(node.len());
                    node.push(homogeneous_point(position));
                }
            }
        }

        let mut table = Self {
            node,
            ..Default::default()
        };
        for entity in mesh.entities() {
            for block in mesh.elements(entity) {
                for (_, element_nodes) in block.iter() {
                    table.simplex_offset.push(to_index(table.simplex.len())?);
                    for tag in element_nodes {
                        let index = positions.get(tag).ok_or(MeshError::UnknownTag {
                            kind: TagKind::Node,
                            tag: *tag,
                        })?;
                        table.simplex.push(to_index(*index)?);
                    }
                    table.simplex_stride.push(to_index(element_nodes.len())?);
                }
            }
        }
        Ok(table)
    }

    pub fn node_count(&self) -> usize {
        self.node.len()
    }

    pub fn simplex_count(&self) -> usize {
        self.simplex_stride.len()
    }

    /// Node indices of element `k`
    pub fn simplex_nodes(&self, k: usize) -> &[u32] {
        let start = self.simplex_offset[k] as usize;
        &self.simplex[start..start + self.simplex_stride[k] as usize]
    }

    pub fn upload_buffers(&self) -> [(&'static str, &[u8]); 4] {
        [
            ("node", as_upload_bytes(&self.node)),
            ("simplex", as_upload_bytes(&self.simplex)),
            ("simplex_stride", as_upload_bytes(&self.simplex_stride)),
            ("simplex_offset", as_upload_bytes(&self.simplex_offset)),
        ]
    }
}
