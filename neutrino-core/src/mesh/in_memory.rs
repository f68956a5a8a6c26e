use std::collections::HashMap;

use itertools::Itertools;
use nalgebra::Point3;

use super::{
    element_properties, nodes_per_element, ElementBlock, ElementProperties, Entity, MeshProvider,
    NodeBlock, PhysicalName,
};
use crate::{math::AABB, MeshError, MeshResult};

#[derive(Debug, Clone)]
struct EntityRecord {
    entity: Entity,
    physical_tags: Vec<i32>,
    nodes: NodeBlock,
    elements: Vec<ElementBlock>,
}

impl EntityRecord {
    fn new(entity: Entity) -> Self {
        Self {
            entity,
            physical_tags: vec![],
            nodes: NodeBlock::default(),
            elements: vec![],
        }
    }
}

/// In-memory mesh that owns all of its entities, nodes and elements
///
/// Entities are kept in insertion order, which is the order [`MeshProvider::entities`] reports them in.
/// ```
/// # use neutrino_core::mesh::{element_types, Entity, Mesh, MeshProvider};
/// # use nalgebra::Point3;
/// let surface = Entity::new(2, 1);
/// let mut mesh = Mesh::new();
/// mesh.add_entity(surface, &[7]);
/// mesh.add_nodes(
///     surface,
///     vec![1, 2, 3],
///     vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)],
/// ).unwrap();
/// mesh.add_elements(surface, element_types::TRIANGLE_3, vec![1], vec![1, 2, 3]).unwrap();
///
/// let group = mesh.nodes_for_physical_group(2, 7).unwrap();
/// assert_eq!(group.tags, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    entities: Vec<EntityRecord>,
    physical_names: Vec<PhysicalName>,
}

impl Mesh {
    pub fn new() -> Self {
        Default::default()
    }

    fn record(&self, entity: Entity) -> Option<&EntityRecord> {
        self.entities.iter().find(|record| record.entity == entity)
    }

    fn record_mut(&mut self, entity: Entity) -> &mut EntityRecord {
        let position = match self
            .entities
            .iter()
            .position(|record| record.entity == entity)
        {
            Some(position) => position,
            None => {
                self.entities.push(EntityRecord::new(entity));
                self.entities.len() - 1
            }
        };
        &mut self.entities[position]
    }

    pub(crate) fn node_blocks_mut(&mut self) -> impl Iterator<Item = &mut NodeBlock> + '_ {
        self.entities.iter_mut().map(|record| &mut record.nodes)
    }

    pub(crate) fn element_blocks_mut(&mut self) -> impl Iterator<Item = &mut ElementBlock> + '_ {
        self.entities
            .iter_mut()
            .flat_map(|record| record.elements.iter_mut())
    }

    /// Adds `entity` to this mesh, or adds `physical_tags` to it if it already exists
    pub fn add_entity(&mut self, entity: Entity, physical_tags: &[i32]) {
        let record = self.record_mut(entity);
        for tag in physical_tags {
            if !record.physical_tags.contains(tag) {
                record.physical_tags.push(*tag);
            }
        }
    }

    /// Assigns a name to the physical group `(dimension, tag)`
    pub fn add_physical_name<S: Into<String>>(&mut self, dimension: i32, tag: i32, name: S) {
        self.physical_names.push(PhysicalName {
            dimension,
            tag,
            name: name.into(),
        });
    }

    /// Appends nodes to `entity`. The entity is created if it does not exist yet
    pub fn add_nodes(
        &mut self,
        entity: Entity,
        tags: Vec<usize>,
        coordinates: Vec<Point3<f64>>,
    ) -> MeshResult<()> {
        self.add_node_block(entity, NodeBlock::new(tags, coordinates))
    }

    /// Appends a whole [`NodeBlock`] to `entity`, including its parametric coordinates
    pub fn add_node_block(&mut self, entity: Entity, block: NodeBlock) -> MeshResult<()> {
        if block.tags.len() != block.coordinates.len() {
            return Err(MeshError::CoordinateMismatch {
                tags: block.tags.len(),
                coordinates: block.coordinates.len(),
            });
        }
        let nodes = &mut self.record_mut(entity).nodes;
        nodes.tags.extend(block.tags);
        nodes.coordinates.extend(block.coordinates);
        nodes
            .parametric_coordinates
            .extend(block.parametric_coordinates);
        Ok(())
    }

    /// Appends elements of `element_type` to `entity`. `node_tags` holds the node tags of all elements
    /// back to back and must contain exactly `nodes_per_element(element_type)` tags per element
    pub fn add_elements(
        &mut self,
        entity: Entity,
        element_type: i32,
        tags: Vec<usize>,
        node_tags: Vec<usize>,
    ) -> MeshResult<()> {
        let stride =
            nodes_per_element(element_type).ok_or(MeshError::UnknownElementType(element_type))?;
        if node_tags.len() != tags.len() * stride {
            return Err(MeshError::InvalidConnectivity {
                element_type,
                stride,
                elements: tags.len(),
                node_tags: node_tags.len(),
            });
        }

        let record = self.record_mut(entity);
        match record
            .elements
            .iter_mut()
            .find(|block| block.element_type == element_type)
        {
            Some(block) => {
                block.tags.extend(tags);
                block.node_tags.extend(node_tags);
            }
            None => record.elements.push(ElementBlock {
                element_type,
                stride,
                tags,
                node_tags,
            }),
        }
        Ok(())
    }

    /// Physical tags of `entity`
    pub fn physical_tags(&self, entity: Entity) -> &[i32] {
        self.record(entity)
            .map(|record| record.physical_tags.as_slice())
            .unwrap_or(&[])
    }

    pub fn physical_names(&self) -> &[PhysicalName] {
        &self.physical_names
    }

    /// Name of the physical group `(dimension, tag)`, if it has one
    pub fn physical_name(&self, dimension: i32, tag: i32) -> Option<&str> {
        self.physical_names
            .iter()
            .find(|name| name.dimension == dimension && name.tag == tag)
            .map(|name| name.name.as_str())
    }

    /// All physical groups as sorted `(dimension, tag)` pairs
    pub fn physical_groups(&self) -> Vec<(i32, i32)> {
        self.entities
            .iter()
            .flat_map(|record| {
                record
                    .physical_tags
                    .iter()
                    .map(move |tag| (record.entity.dimension, *tag))
            })
            .sorted()
            .dedup()
            .collect()
    }

    /// Total number of elements over all entities and element types
    pub fn element_count(&self) -> usize {
        self.entities
            .iter()
            .flat_map(|record| record.elements.iter())
            .map(ElementBlock::len)
            .sum()
    }

    /// Bounding box of all nodes with finite coordinates, `None` if there are no such nodes
    pub fn bounds(&self) -> Option<AABB<f64>> {
        AABB::from_points(
            self.entities
                .iter()
                .flat_map(|record| record.nodes.coordinates.iter())
                .filter(|pos| pos.x.is_finite() && pos.y.is_finite() && pos.z.is_finite()),
        )
    }

    fn coordinate_lookup(&self) -> HashMap<usize, Point3<f64>> {
        self.entities
            .iter()
            .flat_map(|record| record.nodes.iter())
            .map(|(tag, position)| (tag, *position))
            .collect()
    }
}

impl MeshProvider for Mesh {
    fn entities(&self) -> Vec<Entity> {
        self.entities.iter().map(|record| record.entity).collect()
    }

    fn nodes(&self, entity: Entity) -> Option<&NodeBlock> {
        self.record(entity)
            .map(|record| &record.nodes)
            .filter(|nodes| !nodes.is_empty())
    }

    fn elements(&self, entity: Entity) -> Vec<&ElementBlock> {
        self.record(entity)
            .map(|record| record.elements.iter().collect())
            .unwrap_or_default()
    }

    /// Nodes of a physical group are the nodes of all elements (and all nodes) of the entities that carry
    /// the physical tag. Tags that no entity defines a position for get NaN coordinates
    fn nodes_for_physical_group(&self, dimension: i32, tag: i32) -> Option<NodeBlock> {
        let members = self
            .entities
            .iter()
            .filter(|record| {
                record.entity.dimension == dimension && record.physical_tags.contains(&tag)
            })
            .collect::<Vec<_>>();
        if members.is_empty() {
            return None;
        }

        let tags = members
            .iter()
            .flat_map(|record| {
                record
                    .elements
                    .iter()
                    .flat_map(|block| block.node_tags.iter().copied())
                    .chain(record.nodes.tags.iter().copied())
            })
            .sorted()
            .dedup()
            .collect::<Vec<_>>();

        let lookup = self.coordinate_lookup();
        let unknown = Point3::new(f64::NAN, f64::NAN, f64::NAN);
        let coordinates = tags
            .iter()
            .map(|tag| lookup.get(tag).copied().unwrap_or(unknown))
            .collect();
        Some(NodeBlock::new(tags, coordinates))
    }

    fn element_properties(&self, element_type: i32) -> Option<ElementProperties> {
        element_properties(element_type)
    }

    fn elements_by_type(&self, element_type: i32) -> ElementBlock {
        let mut result = ElementBlock::empty(
            element_type,
            nodes_per_element(element_type).unwrap_or_default(),
        );
        for block in self
            .entities
            .iter()
            .flat_map(|record| record.elements.iter())
            .filter(|block| block.element_type == element_type)
        {
            result.tags.extend_from_slice(&block.tags);
            result.node_tags.extend_from_slice(&block.node_tags);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::element_types;

    fn two_surface_mesh() -> Mesh {
        let left = Entity::new(2, 1);
        let right = Entity::new(2, 2);
        let mut mesh = Mesh::new();
        mesh.add_entity(left, &[10]);
        mesh.add_entity(right, &[]);
        mesh.add_nodes(
            left,
            vec![1, 2, 3],
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
        )
        .unwrap();
        mesh.add_nodes(right, vec![4], vec![Point3::new(1.0, 1.0, 0.0)])
            .unwrap();
        mesh.add_elements(left, element_types::TRIANGLE_3, vec![1], vec![1, 2, 3])
            .unwrap();
        mesh.add_elements(right, element_types::TRIANGLE_3, vec![2], vec![2, 4, 3])
            .unwrap();
        mesh
    }

    #[test]
    fn test_add_elements_rejects_bad_stride() {
        let mut mesh = Mesh::new();
        let result = mesh.add_elements(
            Entity::new(2, 1),
            element_types::TRIANGLE_3,
            vec![1, 2],
            vec![1, 2, 3, 4],
        );
        assert!(matches!(
            result,
            Err(MeshError::InvalidConnectivity { stride: 3, .. })
        ));
    }

    #[test]
    fn test_add_elements_rejects_unknown_type() {
        let mut mesh = Mesh::new();
        let result = mesh.add_elements(Entity::new(2, 1), 999, vec![1], vec![1]);
        assert_eq!(result, Err(MeshError::UnknownElementType(999)));
    }

    #[test]
    fn test_add_nodes_rejects_mismatch() {
        let mut mesh = Mesh::new();
        let result = mesh.add_nodes(Entity::new(0, 1), vec![1, 2], vec![Point3::origin()]);
        assert!(matches!(result, Err(MeshError::CoordinateMismatch { .. })));
    }

    #[test]
    fn test_elements_by_type_concatenates_entities() {
        let mesh = two_surface_mesh();
        let triangles = mesh.elements_by_type(element_types::TRIANGLE_3);
        assert_eq!(triangles.stride, 3);
        assert_eq!(triangles.tags, vec![1, 2]);
        assert_eq!(triangles.node_tags, vec![1, 2, 3, 2, 4, 3]);
        assert!(mesh.elements_by_type(element_types::LINE_2).is_empty());
    }

    #[test]
    fn test_physical_group_nodes() {
        let mesh = two_surface_mesh();
        let group = mesh.nodes_for_physical_group(2, 10).unwrap();
        assert_eq!(group.tags, vec![1, 2, 3]);
        assert_eq!(group.coordinates[1], Point3::new(1.0, 0.0, 0.0));
        assert!(mesh.nodes_for_physical_group(2, 11).is_none());
        assert!(mesh.nodes_for_physical_group(1, 10).is_none());
        assert_eq!(mesh.physical_groups(), vec![(2, 10)]);
    }

    #[test]
    fn test_counts_and_bounds() {
        let mesh = two_surface_mesh();
        assert_eq!(mesh.node_count(), 4);
        assert_eq!(mesh.element_count(), 2);
        assert_eq!(mesh.all_node_tags(), vec![1, 2, 3, 4]);
        let bounds = mesh.bounds().unwrap();
        assert_eq!(*bounds.max(), Point3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_bounds_skip_non_finite_nodes() {
        let mut mesh = two_surface_mesh();
        let expected = mesh.bounds();
        mesh.add_nodes(
            Entity::new(2, 2),
            vec![5, 6],
            vec![
                Point3::new(f64::NAN, 0.0, 0.0),
                Point3::new(0.0, f64::INFINITY, 0.0),
            ],
        )
        .unwrap();
        assert_eq!(mesh.bounds(), expected);

        let mut unknown = Mesh::new();
        unknown
            .add_nodes(Entity::new(0, 1), vec![1], vec![Point3::new(f64::NAN, 0.0, 0.0)])
            .unwrap();
        assert!(unknown.bounds().is_none());
    }
}
