use super::{ElementBlock, ElementProperties, Entity, NodeBlock};

/// Read-only access to a tessellated mesh
///
/// This is the interface all neutrino algorithms consume. The queries mirror the Gmsh model API: entities
/// are enumerated in a fixed order, and node and element queries return native tags. Implementations must
/// return identical answers for identical queries for as long as they are borrowed.
pub trait MeshProvider {
    /// All geometric entities of the mesh, in a fixed order. This order defines the order of nodes in
    /// every algorithm that walks the whole mesh
    fn entities(&self) -> Vec<Entity>;

    /// The nodes classified on `entity`, or `None` if the entity has no nodes
    fn nodes(&self, entity: Entity) -> Option<&NodeBlock>;

    /// All element blocks of `entity`, one per element type
    fn elements(&self, entity: Entity) -> Vec<&ElementBlock>;

    /// The nodes of the physical group with the given `dimension` and `tag`. Returns `None` if no such
    /// physical group exists. Node tags are sorted and unique
    fn nodes_for_physical_group(&self, dimension: i32, tag: i32) -> Option<NodeBlock>;

    /// Properties of the given element type, or `None` if the type is unknown to this provider
    fn element_properties(&self, element_type: i32) -> Option<ElementProperties>;

    /// All elements of `element_type` across all entities, in entity order. Returns an empty block if the
    /// mesh contains no such elements
    fn elements_by_type(&self, element_type: i32) -> ElementBlock;

    /// Total number of nodes over all entities
    fn node_count(&self) -> usize {
        self.entities()
            .into_iter()
            .filter_map(|entity| self.nodes(entity).map(NodeBlock::len))
            .sum()
    }

    /// All node tags in entity order
    fn all_node_tags(&self) -> Vec<usize> {
        let mut tags = Vec::with_capacity(self.node_count());
        for entity in self.entities() {
            if let Some(block) = self.nodes(entity) {
                tags.extend_from_slice(&block.tags);
            }
        }
        tags
    }
}
