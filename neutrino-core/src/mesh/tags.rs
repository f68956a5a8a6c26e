use std::collections::HashMap;

use super::{Mesh, MeshProvider};
use crate::{MeshError, MeshResult, TagKind};

/// Validated conversion from native tags to zero-based indices
///
/// A `TagIndex` can only be created from a set of tags that is exactly `1..=n` (in any order). For such a
/// set, `tag - 1` is a valid index into an array of length `n`, which is what [`index_of`](TagIndex::index_of)
/// returns.
/// ```
/// # use neutrino_core::{mesh::TagIndex, TagKind};
/// let index = TagIndex::contiguous(TagKind::Node, vec![3, 1, 2]).unwrap();
/// assert_eq!(index.index_of(3).unwrap(), 2);
/// assert!(index.index_of(4).is_err());
/// assert!(TagIndex::contiguous(TagKind::Node, vec![1, 3]).is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TagIndex {
    kind: TagKind,
    count: usize,
}

impl TagIndex {
    /// Validates that `tags` are a permutation of `1..=n`
    pub fn contiguous<I: IntoIterator<Item = usize>>(kind: TagKind, tags: I) -> MeshResult<Self> {
        let tags = tags.into_iter().collect::<Vec<_>>();
        let count = tags.len();
        let mut seen = vec![false; count];
        for tag in tags {
            if tag == 0 || tag > count {
                return Err(MeshError::NonContiguousTags {
                    kind,
                    reason: format!("tag {} is outside of 1..={}", tag, count),
                });
            }
            if seen[tag - 1] {
                return Err(MeshError::NonContiguousTags {
                    kind,
                    reason: format!("tag {} appears more than once", tag),
                });
            }
            seen[tag - 1] = true;
        }
        Ok(Self { kind, count })
    }

    /// Zero-based index of `tag`
    pub fn index_of(&self, tag: usize) -> MeshResult<usize> {
        if tag == 0 || tag > self.count {
            return Err(MeshError::UnknownTag {
                kind: self.kind,
                tag,
            });
        }
        Ok(tag - 1)
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Assigns `1, 2, 3, ...` to tags in order of their first appearance. Fails if a tag appears twice
fn first_appearance_mapping<I: IntoIterator<Item = usize>>(
    kind: TagKind,
    tags: I,
) -> MeshResult<HashMap<usize, usize>> {
    let mut mapping = HashMap::new();
    for tag in tags {
        let new_tag = mapping.len() + 1;
        if mapping.insert(tag, new_tag).is_some() {
            return Err(MeshError::NonContiguousTags {
                kind,
                reason: format!("tag {} appears more than once", tag),
            });
        }
    }
    Ok(mapping)
}

impl Mesh {
    fn node_mapping(&self) -> MeshResult<HashMap<usize, usize>> {
        let mapping = first_appearance_mapping(TagKind::Node, self.all_node_tags())?;
        for entity in self.entities() {
            for block in self.elements(entity) {
                if let Some(tag) = block
                    .node_tags
                    .iter()
                    .find(|tag| !mapping.contains_key(*tag))
                {
                    return Err(MeshError::UnknownTag {
                        kind: TagKind::Node,
                        tag: *tag,
                    });
                }
            }
        }
        Ok(mapping)
    }

    fn element_mapping(&self) -> MeshResult<HashMap<usize, usize>> {
        let all_tags = self
            .entities()
            .into_iter()
            .flat_map(|entity| {
                self.elements(entity)
                    .into_iter()
                    .flat_map(|block| block.tags.iter().copied())
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        first_appearance_mapping(TagKind::Element, all_tags)
    }

    fn apply_node_mapping(&mut self, mapping: &HashMap<usize, usize>) {
        for block in self.node_blocks_mut() {
            for tag in block.tags.iter_mut() {
                *tag = mapping[&*tag];
            }
        }
        for block in self.element_blocks_mut() {
            for tag in block.node_tags.iter_mut() {
                *tag = mapping[&*tag];
            }
        }
    }

    fn apply_element_mapping(&mut self, mapping: &HashMap<usize, usize>) {
        for block in self.element_blocks_mut() {
            for tag in block.tags.iter_mut() {
                *tag = mapping[&*tag];
            }
        }
    }

    /// Renumbers all node tags so that they are contiguous from 1, in entity order. Element connectivity is
    /// rewritten accordingly. Fails without modifying the mesh if a node tag is defined by more than one
    /// entity, or if an element references a node tag that no entity defines
    pub fn renumber_nodes(&mut self) -> MeshResult<()> {
        let mapping = self.node_mapping()?;
        self.apply_node_mapping(&mapping);
        Ok(())
    }

    /// Renumbers all element tags so that they are contiguous from 1, in entity order and element type order
    /// within each entity. Fails without modifying the mesh if an element tag appears more than once
    pub fn renumber_elements(&mut self) -> MeshResult<()> {
        let mapping = self.element_mapping()?;
        self.apply_element_mapping(&mapping);
        Ok(())
    }

    /// Renumbers node and element tags, see [`renumber_nodes`](Mesh::renumber_nodes) and
    /// [`renumber_elements`](Mesh::renumber_elements). Both are validated before either is applied, so a
    /// failing call leaves the mesh unchanged
    pub fn renumber(&mut self) -> MeshResult<()> {
        let nodes = self.node_mapping()?;
        let elements = self.element_mapping()?;
        self.apply_node_mapping(&nodes);
        self.apply_element_mapping(&elements);
        Ok(())
    }

    /// Returns true if the node tags of this mesh are exactly `1..=node_count`
    pub fn has_contiguous_node_tags(&self) -> bool {
        TagIndex::contiguous(TagKind::Node, self.all_node_tags()).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::Point3;

    use super::*;
    use crate::mesh::{element_types, Entity};

    fn sparse_mesh() -> Mesh {
        let curve = Entity::new(1, 1);
        let surface = Entity::new(2, 1);
        let mut mesh = Mesh::new();
        mesh.add_nodes(
            curve,
            vec![40, 10],
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)],
        )
        .unwrap();
        mesh.add_nodes(surface, vec![25], vec![Point3::new(0.0, 1.0, 0.0)])
            .unwrap();
        mesh.add_elements(curve, element_types::LINE_2, vec![100], vec![40, 10])
            .unwrap();
        mesh.add_elements(surface, element_types::TRIANGLE_3, vec![7], vec![40, 10, 25])
            .unwrap();
        mesh
    }

    #[test]
    fn test_contiguous_rejects_zero_and_duplicates() {
        assert!(TagIndex::contiguous(TagKind::Node, vec![0, 1]).is_err());
        assert!(TagIndex::contiguous(TagKind::Node, vec![1, 1]).is_err());
        assert!(TagIndex::contiguous(TagKind::Element, Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_renumber_makes_tags_contiguous() {
        let mut mesh = sparse_mesh();
        assert!(!mesh.has_contiguous_node_tags());
        mesh.renumber().unwrap();
        assert!(mesh.has_contiguous_node_tags());
        assert_eq!(mesh.all_node_tags(), vec![1, 2, 3]);

        let lines = mesh.elements_by_type(element_types::LINE_2);
        assert_eq!(lines.tags, vec![1]);
        assert_eq!(lines.node_tags, vec![1, 2]);
        let triangles = mesh.elements_by_type(element_types::TRIANGLE_3);
        assert_eq!(triangles.tags, vec![2]);
        assert_eq!(triangles.node_tags, vec![1, 2, 3]);
    }

    #[test]
    fn test_renumber_keeps_positions_attached() {
        let mut mesh = sparse_mesh();
        mesh.renumber().unwrap();
        let surface = mesh.nodes(Entity::new(2, 1)).unwrap();
        assert_eq!(surface.tags, vec![3]);
        assert_eq!(surface.coordinates[0], Point3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_renumber_fails_atomically_on_unknown_node() {
        let mut mesh = sparse_mesh();
        mesh.add_elements(
            Entity::new(2, 1),
            element_types::TRIANGLE_3,
            vec![8],
            vec![40, 10, 99],
        )
        .unwrap();
        let before = mesh.all_node_tags();
        assert_eq!(
            mesh.renumber_nodes(),
            Err(MeshError::UnknownTag {
                kind: TagKind::Node,
                tag: 99
            })
        );
        assert_eq!(mesh.all_node_tags(), before);
    }

    #[test]
    fn test_renumber_rejects_node_tag_shared_by_entities() {
        let mut mesh = sparse_mesh();
        // Tag 40 is already defined on the curve
        mesh.add_nodes(Entity::new(2, 1), vec![40], vec![Point3::new(5.0, 5.0, 0.0)])
            .unwrap();
        let before = mesh.all_node_tags();
        assert_eq!(
            mesh.renumber(),
            Err(MeshError::NonContiguousTags {
                kind: TagKind::Node,
                reason: "tag 40 appears more than once".to_owned(),
            })
        );
        assert_eq!(mesh.all_node_tags(), before);
        assert!(!mesh.has_contiguous_node_tags());
    }

    #[test]
    fn test_renumber_rejects_repeated_element_tags() {
        let mut mesh = sparse_mesh();
        mesh.add_elements(
            Entity::new(2, 1),
            element_types::TRIANGLE_3,
            vec![100],
            vec![10, 40, 25],
        )
        .unwrap();
        let before = mesh.all_node_tags();
        assert!(matches!(
            mesh.renumber(),
            Err(MeshError::NonContiguousTags {
                kind: TagKind::Element,
                ..
            })
        ));
        // Node tags stay untouched as well
        assert_eq!(mesh.all_node_tags(), before);
        assert!(mesh.renumber_elements().is_err());
    }
}
