use std::collections::HashSet;

use neutrino_core::mesh::{MeshProvider, TagIndex};
use neutrino_core::{MeshError, TagKind};

use crate::{to_index, NeighbourhoodError, NeighbourhoodResult};

/// The nodes of a physical group together with all elements of one type that lie fully inside the group
///
/// `element` holds the zero-based node indices of all qualifying elements back to back, and
/// `element_offset[k]` is the end of element `k` in `element` (so element `k` spans
/// `element_offset[k - 1]..element_offset[k]`, with an implicit `0` before the first entry).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupMembership {
    /// Zero-based indices of the group's nodes, in the order the mesh reports them
    pub node: Vec<u32>,
    /// Zero-based node indices of all qualifying elements
    pub element: Vec<u32>,
    /// Cumulative node slot count after each qualifying element
    pub element_offset: Vec<u32>,
}

impl GroupMembership {
    /// Selects the nodes of physical group `(group_dimension, group_tag)` and every element of `element_type`
    /// whose nodes are *all* members of the group. Elements with partial or no membership are skipped.
    ///
    /// `tags` converts native node tags into indices; every tag that ends up in the result must be known to
    /// it.
    pub fn compute<M: MeshProvider + ?Sized>(
        mesh: &M,
        group_dimension: i32,
        group_tag: i32,
        element_type: i32,
        tags: &TagIndex,
    ) -> NeighbourhoodResult<Self> {
        let group = mesh
            .nodes_for_physical_group(group_dimension, group_tag)
            .filter(|group| !group.is_empty())
            .ok_or(NeighbourhoodError::InvalidGroupReference {
                dimension: group_dimension,
                tag: group_tag,
            })?;
        let properties = mesh
            .element_properties(element_type)
            .ok_or(NeighbourhoodError::InvalidElementType(element_type))?;
        let stride = properties.num_nodes;

        let node = group
            .tags
            .iter()
            .map(|tag| to_index(tags.index_of(*tag)?))
            .collect::<NeighbourhoodResult<Vec<_>>>()?;

        let elements = mesh.elements_by_type(element_type);
        if elements.stride != stride || elements.node_tags.len() != elements.len() * stride {
            return Err(NeighbourhoodError::InvalidElementType(element_type));
        }
        validate_element_tags(&elements.tags)?;

        let mut sorted_group = group.tags;
        sorted_group.sort_unstable();

        let mut element = vec![];
        let mut element_offset = vec![];
        for (_, element_nodes) in elements.iter() {
            let members = element_nodes
                .iter()
                .filter(|tag| sorted_group.binary_search(*tag).is_ok())
                .count();
            if members != stride {
                continue;
            }
            for tag in element_nodes {
                element.push(to_index(tags.index_of(*tag)?)?);
            }
            element_offset.push(to_index(element.len())?);
        }

        Ok(Self {
            node,
            element,
            element_offset,
        })
    }

    /// Number of qualifying elements
    pub fn element_count(&self) -> usize {
        self.element_offset.len()
    }

    /// Node indices of qualifying element `k`
    pub fn element_nodes(&self, k: usize) -> &[u32] {
        let start = if k == 0 {
            0
        } else {
            self.element_offset[k - 1] as usize
        };
        &self.element[start..self.element_offset[k] as usize]
    }

    /// Iterate over the node indices of all qualifying elements
    pub fn elements(&self) -> impl Iterator<Item = &[u32]> + '_ {
        (0..self.element_count()).map(move |k| self.element_nodes(k))
    }
}

/// Element tags of one type must be unique and start at 1 at the earliest
fn validate_element_tags(element_tags: &[usize]) -> NeighbourhoodResult<()> {
    let mut seen = HashSet::with_capacity(element_tags.len());
    for tag in element_tags {
        if *tag == 0 {
            return Err(MeshError::NonContiguousTags {
                kind: TagKind::Element,
                reason: "tag 0 is not a valid element tag".to_owned(),
            }
            .into());
        }
        if !seen.insert(*tag) {
            return Err(MeshError::NonContiguousTags {
                kind: TagKind::Element,
                reason: format!("tag {} appears more than once", tag),
            }
            .into());
        }
    }
    Ok(())
}
