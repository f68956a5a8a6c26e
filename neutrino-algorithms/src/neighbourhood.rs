//! One-ring neighbourhoods of the nodes of a physical group
//!
//! For a physical group and an element type, [`NeighbourGraphBuilder::process`] computes
//!
//! - the elements of that type which lie fully inside the group (`element`, `element_offset`),
//! - for every group node the elements containing it (`group`, `group_offset`),
//! - for every group node its distinct neighbour nodes, i.e. all other nodes of its incident elements
//!   (`neighbour`, `neighbour_offset`), together with the centre node of every entry (`neighbour_center`),
//!   the link vector from centre to neighbour (`neighbour_link`) and its length (`neighbour_length`).
//!
//! All arrays are flat and offset-indexed so they can be uploaded into device buffers as they are. Offsets
//! are cumulative: the entries of group node `i` live in `offset[i - 1]..offset[i]` (`0..offset[0]` for the
//! first node). Neighbours of one node are sorted by ascending node index.

use log::debug;
use neutrino_core::{
    math::{homogeneous_point, length3, link_vector, Float4},
    mesh::{MeshProvider, TagIndex},
    util::as_upload_bytes,
    TagKind,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    group::GroupMembership,
    incidence::ElementIncidence,
    progress::{LogProgress, Progress},
    to_index, NeighbourhoodError, NeighbourhoodResult,
};

/// What to do with qualifying elements that list the same node more than once
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DuplicateNodePolicy {
    /// Every occurrence of the centre node is removed from its neighbour candidates, other repeated nodes
    /// collapse into a single neighbour
    #[default]
    RemoveAll,
    /// Fail with [`NeighbourhoodError::DegenerateNeighbourRemoval`]
    Reject,
}

/// Parameters for building a neighbour graph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NeighbourhoodParams {
    pub duplicate_nodes: DuplicateNodePolicy,
}

impl NeighbourhoodParams {
    /// Parameters that reject degenerate elements instead of tolerating them
    pub fn strict() -> Self {
        Self {
            duplicate_nodes: DuplicateNodePolicy::Reject,
        }
    }
}

/// Incidence and adjacency arrays of one physical group, see the [module documentation](self)
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NeighbourGraph {
    node_coordinates: Vec<Float4>,
    node: Vec<u32>,
    element: Vec<u32>,
    element_offset: Vec<u32>,
    group: Vec<u32>,
    group_offset: Vec<u32>,
    neighbour: Vec<u32>,
    neighbour_offset: Vec<u32>,
    neighbour_center: Vec<u32>,
    neighbour_link: Vec<Float4>,
    neighbour_length: Vec<f32>,
}

/// Range `offsets[i - 1]..offsets[i]` of entry `i` in an array indexed by cumulative offsets
fn offset_range(offsets: &[u32], i: usize) -> std::ops::Range<usize> {
    let start = if i == 0 { 0 } else { offsets[i - 1] as usize };
    start..offsets[i] as usize
}

impl NeighbourGraph {
    /// Positions of all mesh nodes (`w = 1`), indexed by zero-based node index
    pub fn node_coordinates(&self) -> &[Float4] {
        &self.node_coordinates
    }

    /// Zero-based indices of the group nodes. This order is the order of all per-node offset arrays
    pub fn node(&self) -> &[u32] {
        &self.node
    }

    /// Node indices of all qualifying elements, back to back
    pub fn element(&self) -> &[u32] {
        &self.element
    }

    /// Cumulative node slot count after each qualifying element
    pub fn element_offset(&self) -> &[u32] {
        &self.element_offset
    }

    /// Indices of the qualifying elements incident to each group node, back to back
    pub fn group(&self) -> &[u32] {
        &self.group
    }

    /// Cumulative number of (node, incident element) pairs after each group node
    pub fn group_offset(&self) -> &[u32] {
        &self.group_offset
    }

    /// Neighbour node indices of all group nodes, back to back
    pub fn neighbour(&self) -> &[u32] {
        &self.neighbour
    }

    /// Cumulative number of distinct neighbours after each group node
    pub fn neighbour_offset(&self) -> &[u32] {
        &self.neighbour_offset
    }

    /// For each entry of [`neighbour`](Self::neighbour), the group node it is a neighbour of
    pub fn neighbour_center(&self) -> &[u32] {
        &self.neighbour_center
    }

    /// For each entry of [`neighbour`](Self::neighbour), the vector from its centre to the neighbour (`w = 0`)
    pub fn neighbour_link(&self) -> &[Float4] {
        &self.neighbour_link
    }

    /// For each entry of [`neighbour`](Self::neighbour), the Euclidean length of its link
    pub fn neighbour_length(&self) -> &[f32] {
        &self.neighbour_length
    }

    /// Number of group nodes
    pub fn node_count(&self) -> usize {
        self.node.len()
    }

    /// Number of qualifying elements
    pub fn element_count(&self) -> usize {
        self.element_offset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node.is_empty()
    }

    /// Node indices of qualifying element `k`
    pub fn element_nodes(&self, k: usize) -> &[u32] {
        &self.element[offset_range(&self.element_offset, k)]
    }

    /// Qualifying elements incident to the `i`-th group node
    pub fn incident_elements(&self, i: usize) -> &[u32] {
        &self.group[offset_range(&self.group_offset, i)]
    }

    /// Distinct neighbours of the `i`-th group node, in ascending order
    pub fn neighbours_of(&self, i: usize) -> &[u32] {
        &self.neighbour[offset_range(&self.neighbour_offset, i)]
    }

    /// Links from the `i`-th group node to each of its neighbours
    pub fn links_of(&self, i: usize) -> &[Float4] {
        &self.neighbour_link[offset_range(&self.neighbour_offset, i)]
    }

    /// Link lengths from the `i`-th group node to each of its neighbours
    pub fn lengths_of(&self, i: usize) -> &[f32] {
        &self.neighbour_length[offset_range(&self.neighbour_offset, i)]
    }

    /// All arrays by name, as raw bytes ready for upload. The byte length of each entry is the size of the
    /// device buffer it needs
    pub fn upload_buffers(&self) -> [(&'static str, &[u8]); 11] {
        [
            ("node_coordinates", as_upload_bytes(&self.node_coordinates)),
            ("node", as_upload_bytes(&self.node)),
            ("element", as_upload_bytes(&self.element)),
            ("element_offset", as_upload_bytes(&self.element_offset)),
            ("group", as_upload_bytes(&self.group)),
            ("group_offset", as_upload_bytes(&self.group_offset)),
            ("neighbour", as_upload_bytes(&self.neighbour)),
            ("neighbour_offset", as_upload_bytes(&self.neighbour_offset)),
            ("neighbour_center", as_upload_bytes(&self.neighbour_center)),
            ("neighbour_link", as_upload_bytes(&self.neighbour_link)),
            ("neighbour_length", as_upload_bytes(&self.neighbour_length)),
        ]
    }
}

/// Builds the neighbour graph of physical group `(group_dimension, group_tag)` for elements of
/// `element_type`. Takes the group tag before its dimension, like [`NeighbourGraphBuilder::process`].
///
/// The node tags of `mesh` must be exactly `1..=n` (see `Mesh::renumber`), otherwise
/// [`NeighbourhoodError::UnnormalizedTags`] is returned.
///
/// # Examples
///
/// ```
/// # use neutrino_core::mesh::{element_types, primitives};
/// # use neutrino_algorithms::neighbourhood::{build_neighbour_graph, NeighbourhoodParams};
/// # use neutrino_algorithms::progress::SilentProgress;
/// let mesh = primitives::single_triangle();
/// let graph = build_neighbour_graph(
///     &mesh,
///     primitives::DOMAIN_GROUP,
///     2,
///     element_types::TRIANGLE_3,
///     &NeighbourhoodParams::default(),
///     &mut SilentProgress,
/// )
/// .unwrap();
/// assert_eq!(graph.element(), &[0, 1, 2]);
/// assert_eq!(graph.neighbours_of(0), &[1, 2]);
/// assert_eq!(graph.lengths_of(0), &[1.0, 1.0]);
/// ```
pub fn build_neighbour_graph<M: MeshProvider + ?Sized>(
    mesh: &M,
    group_tag: i32,
    group_dimension: i32,
    element_type: i32,
    params: &NeighbourhoodParams,
    progress: &mut dyn Progress,
) -> NeighbourhoodResult<NeighbourGraph> {
    progress.action("building node coordinate table");
    let tags = TagIndex::contiguous(TagKind::Node, mesh.all_node_tags())?;
    let mut node_coordinates = vec![Float4::zeros(); tags.len()];
    for entity in mesh.entities() {
        if let Some(block) = mesh.nodes(entity) {
            for (tag, position) in block.iter() {
                node_coordinates[tags.index_of(tag)?] = homogeneous_point(position);
            }
        }
    }
    progress.done();

    progress.action("selecting group nodes and elements");
    let membership =
        GroupMembership::compute(mesh, group_dimension, group_tag, element_type, &tags)?;
    if params.duplicate_nodes == DuplicateNodePolicy::Reject {
        reject_repeated_nodes(&membership)?;
    }
    debug!(
        "group ({}, {}): {} nodes, {} elements of type {}",
        group_dimension,
        group_tag,
        membership.node.len(),
        membership.element_count(),
        element_type
    );
    progress.done();

    progress.action("building incidence and neighbours");
    let incidence = ElementIncidence::build(
        node_coordinates.len(),
        &membership.element,
        &membership.element_offset,
    );

    let mut group = vec![];
    let mut group_offset = Vec::with_capacity(membership.node.len());
    let mut neighbour = vec![];
    let mut neighbour_offset = Vec::with_capacity(membership.node.len());
    let mut neighbour_center = vec![];
    let mut neighbour_link = vec![];
    let mut neighbour_length = vec![];
    let mut candidates = vec![];

    for &center in &membership.node {
        let incident = incidence.incident_elements(center as usize);
        group.extend_from_slice(incident);
        group_offset.push(to_index(group.len())?);

        candidates.clear();
        for k in incident {
            candidates.extend_from_slice(membership.element_nodes(*k as usize));
        }
        candidates.retain(|node| *node != center);
        candidates.sort_unstable();
        candidates.dedup();

        let center_position = &node_coordinates[center as usize];
        for &node in &candidates {
            let link = link_vector(center_position, &node_coordinates[node as usize]);
            neighbour.push(node);
            neighbour_center.push(center);
            neighbour_length.push(length3(&link));
            neighbour_link.push(link);
        }
        neighbour_offset.push(to_index(neighbour.len())?);
    }
    debug!(
        "{} incident elements, {} neighbour links",
        group.len(),
        neighbour.len()
    );
    progress.done();

    Ok(NeighbourGraph {
        node_coordinates,
        node: membership.node,
        element: membership.element,
        element_offset: membership.element_offset,
        group,
        group_offset,
        neighbour,
        neighbour_offset,
        neighbour_center,
        neighbour_link,
        neighbour_length,
    })
}

fn reject_repeated_nodes(membership: &GroupMembership) -> NeighbourhoodResult<()> {
    for (k, nodes) in membership.elements().enumerate() {
        for (position, node) in nodes.iter().enumerate() {
            if nodes[..position].contains(node) {
                return Err(NeighbourhoodError::DegenerateNeighbourRemoval {
                    element: k,
                    node: *node as usize,
                });
            }
        }
    }
    Ok(())
}

/// Computes and owns the [`NeighbourGraph`] of a mesh
///
/// The builder borrows the mesh for its whole lifetime. Every call to [`process`](Self::process) replaces
/// the stored graph; a failing call leaves the previous graph untouched. Since `process` needs `&mut self`, a
/// graph returned by an earlier call can't be read while a new one is built. Clone it to keep a snapshot.
pub struct NeighbourGraphBuilder<'m, M: MeshProvider + ?Sized> {
    mesh: &'m M,
    params: NeighbourhoodParams,
    progress: Box<dyn Progress + 'm>,
    graph: NeighbourGraph,
}

impl<'m, M: MeshProvider + ?Sized> NeighbourGraphBuilder<'m, M> {
    /// Creates a builder with default parameters that reports progress through the `log` crate
    pub fn new(mesh: &'m M) -> Self {
        Self {
            mesh,
            params: NeighbourhoodParams::default(),
            progress: Box::new(LogProgress::new()),
            graph: NeighbourGraph::default(),
        }
    }

    pub fn with_params(mut self, params: NeighbourhoodParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_progress<P: Progress + 'm>(mut self, progress: P) -> Self {
        self.progress = Box::new(progress);
        self
    }

    pub fn params(&self) -> &NeighbourhoodParams {
        &self.params
    }

    /// Builds the neighbour graph of physical group `(group_dimension, group_tag)` for elements of
    /// `element_type` and stores it in this builder. The group tag comes before its dimension, as in
    /// [`build_neighbour_graph`]
    pub fn process(
        &mut self,
        group_tag: i32,
        group_dimension: i32,
        element_type: i32,
    ) -> NeighbourhoodResult<&NeighbourGraph> {
        self.graph = build_neighbour_graph(
            self.mesh,
            group_tag,
            group_dimension,
            element_type,
            &self.params,
            self.progress.as_mut(),
        )?;
        Ok(&self.graph)
    }

    /// The graph of the last successful call to [`process`](Self::process), empty before the first one
    pub fn graph(&self) -> &NeighbourGraph {
        &self.graph
    }

    pub fn into_graph(self) -> NeighbourGraph {
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use neutrino_core::{
        mesh::{element_types, primitives, Entity, Mesh},
        nalgebra::Point3,
        MeshError,
    };

    use super::*;
    use crate::progress::{RecordingProgress, SilentProgress};

    fn build(mesh: &Mesh, tag: i32, dimension: i32, element_type: i32) -> NeighbourGraph {
        build_neighbour_graph(
            mesh,
            tag,
            dimension,
            element_type,
            &NeighbourhoodParams::default(),
            &mut SilentProgress,
        )
        .unwrap()
    }

    #[test]
    fn test_single_triangle() {
        let mesh = primitives::single_triangle();
        let graph = build(&mesh, primitives::DOMAIN_GROUP, 2, element_types::TRIANGLE_3);

        assert_eq!(graph.node(), &[0, 1, 2]);
        assert_eq!(graph.element(), &[0, 1, 2]);
        assert_eq!(graph.element_offset(), &[3]);
        assert_eq!(graph.group(), &[0, 0, 0]);
        assert_eq!(graph.group_offset(), &[1, 2, 3]);
        assert_eq!(graph.neighbour_offset(), &[2, 4, 6]);
        assert_eq!(graph.neighbour(), &[1, 2, 0, 2, 0, 1]);
        assert_eq!(graph.neighbour_center(), &[0, 0, 1, 1, 2, 2]);
        assert_eq!(graph.lengths_of(0), &[1.0, 1.0]);
        assert_approx_eq!(graph.lengths_of(1)[1], 2.0f32.sqrt());
        assert_eq!(graph.links_of(0)[0], Float4::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(graph.node_coordinates()[2], Float4::new(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn test_grid_interior_node_has_six_neighbours() {
        let mesh = primitives::triangle_grid(2, 2, 1.0);
        let graph = build(&mesh, primitives::DOMAIN_GROUP, 2, element_types::TRIANGLE_3);

        // Node (1, 1) has tag 5, i.e. index 4
        let center = graph.node().iter().position(|node| *node == 4).unwrap();
        assert_eq!(graph.incident_elements(center).len(), 6);
        assert_eq!(graph.neighbours_of(center), &[0, 1, 3, 5, 7, 8]);
        for (link, length) in graph
            .links_of(center)
            .iter()
            .zip(graph.lengths_of(center))
        {
            assert_eq!(link.w, 0.0);
            assert_approx_eq!(length3(link), *length);
        }
    }

    #[test]
    fn test_tetrahedral_cube_diagonal_connects_everything() {
        let mesh = primitives::tetrahedral_cube();
        let graph = build(
            &mesh,
            primitives::DOMAIN_GROUP,
            3,
            element_types::TETRAHEDRON_4,
        );
        assert_eq!(graph.element_count(), 6);
        // Corners 0 and 7 are in every tetrahedron
        assert_eq!(graph.neighbours_of(0), &[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(graph.incident_elements(7).len(), 6);
        assert_approx_eq!(graph.lengths_of(0)[6], 3.0f32.sqrt());
    }

    #[test]
    fn test_line_group_with_triangles_has_no_neighbours() {
        let mesh = primitives::triangle_grid(3, 1, 1.0);
        let graph = build(&mesh, primitives::BOTTOM_GROUP, 1, element_types::TRIANGLE_3);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.element_count(), 0);
        assert_eq!(graph.group_offset(), &[0, 0, 0, 0]);
        assert_eq!(graph.neighbour_offset(), &[0, 0, 0, 0]);
        assert!(graph.neighbour().is_empty());

        let lines = build(&mesh, primitives::BOTTOM_GROUP, 1, element_types::LINE_2);
        assert_eq!(lines.neighbours_of(0), &[1]);
        assert_eq!(lines.neighbours_of(1), &[0, 2]);
    }

    #[test]
    fn test_coincident_nodes_keep_zero_length_links() {
        let surface = Entity::new(2, 1);
        let mut mesh = Mesh::new();
        mesh.add_entity(surface, &[1]);
        mesh.add_nodes(
            surface,
            vec![1, 2, 3],
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
        )
        .unwrap();
        mesh.add_elements(surface, element_types::TRIANGLE_3, vec![1], vec![1, 2, 3])
            .unwrap();
        let graph = build(&mesh, 1, 2, element_types::TRIANGLE_3);
        assert_eq!(graph.lengths_of(0), &[0.0, 1.0]);
    }

    fn degenerate_mesh() -> Mesh {
        let surface = Entity::new(2, 1);
        let mut mesh = Mesh::new();
        mesh.add_entity(surface, &[1]);
        mesh.add_nodes(
            surface,
            vec![1, 2, 3],
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
        )
        .unwrap();
        mesh.add_elements(
            surface,
            element_types::TRIANGLE_3,
            vec![1, 2],
            vec![1, 1, 2, 1, 2, 3],
        )
        .unwrap();
        mesh
    }

    #[test]
    fn test_default_params_remove_repeated_nodes() {
        assert_eq!(
            NeighbourhoodParams::default().duplicate_nodes,
            DuplicateNodePolicy::RemoveAll
        );
        assert_eq!(
            NeighbourhoodParams::strict().duplicate_nodes,
            DuplicateNodePolicy::Reject
        );
    }

    #[test]
    fn test_repeated_nodes_are_removed_by_default() {
        let graph = build(&degenerate_mesh(), 1, 2, element_types::TRIANGLE_3);
        assert_eq!(graph.neighbours_of(0), &[1, 2]);
        assert_eq!(graph.incident_elements(0), &[0, 1]);
        assert_eq!(graph.neighbours_of(1), &[0, 2]);
    }

    #[test]
    fn test_repeated_nodes_are_rejected_when_strict() {
        let result = build_neighbour_graph(
            &degenerate_mesh(),
            1,
            2,
            element_types::TRIANGLE_3,
            &NeighbourhoodParams::strict(),
            &mut SilentProgress,
        );
        assert_eq!(
            result,
            Err(NeighbourhoodError::DegenerateNeighbourRemoval {
                element: 0,
                node: 0
            })
        );
    }

    #[test]
    fn test_unnormalized_tags_are_rejected() {
        let surface = Entity::new(2, 1);
        let mut mesh = Mesh::new();
        mesh.add_entity(surface, &[1]);
        mesh.add_nodes(
            surface,
            vec![10, 20, 30],
            vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)],
        )
        .unwrap();
        mesh.add_elements(surface, element_types::TRIANGLE_3, vec![1], vec![10, 20, 30])
            .unwrap();

        let result = build_neighbour_graph(
            &mesh,
            1,
            2,
            element_types::TRIANGLE_3,
            &NeighbourhoodParams::default(),
            &mut SilentProgress,
        );
        assert!(matches!(
            result,
            Err(NeighbourhoodError::UnnormalizedTags(MeshError::NonContiguousTags { .. }))
        ));

        mesh.renumber().unwrap();
        let graph = build(&mesh, 1, 2, element_types::TRIANGLE_3);
        assert_eq!(graph.element(), &[0, 1, 2]);
    }

    #[test]
    fn test_failed_process_keeps_previous_graph() {
        let mesh = primitives::triangle_grid(2, 2, 1.0);
        let mut builder = NeighbourGraphBuilder::new(&mesh).with_progress(SilentProgress);
        assert!(builder.graph().is_empty());

        let node_count = builder
            .process(primitives::DOMAIN_GROUP, 2, element_types::TRIANGLE_3)
            .unwrap()
            .node_count();
        assert_eq!(node_count, 9);
        let snapshot = builder.graph().clone();

        assert_eq!(
            builder.process(77, 2, element_types::TRIANGLE_3).unwrap_err(),
            NeighbourhoodError::InvalidGroupReference {
                dimension: 2,
                tag: 77
            }
        );
        assert_eq!(
            builder.process(primitives::DOMAIN_GROUP, 2, 555).unwrap_err(),
            NeighbourhoodError::InvalidElementType(555)
        );
        assert_eq!(builder.graph(), &snapshot);
    }

    #[test]
    fn test_process_and_free_function_agree() {
        let mesh = primitives::triangle_grid(3, 2, 1.0);
        let mut builder = NeighbourGraphBuilder::new(&mesh).with_progress(SilentProgress);
        for (tag, dimension, element_type) in [
            (primitives::DOMAIN_GROUP, 2, element_types::TRIANGLE_3),
            (primitives::BOTTOM_GROUP, 1, element_types::LINE_2),
        ] {
            let built = build(&mesh, tag, dimension, element_type);
            assert!(!built.is_empty());
            assert_eq!(builder.process(tag, dimension, element_type).unwrap(), &built);
        }
    }

    #[test]
    fn test_process_replaces_previous_graph() {
        let mesh = primitives::triangle_grid(2, 1, 1.0);
        let mut builder = NeighbourGraphBuilder::new(&mesh).with_progress(SilentProgress);
        builder
            .process(primitives::DOMAIN_GROUP, 2, element_types::TRIANGLE_3)
            .unwrap();
        let lines = builder
            .process(primitives::BOTTOM_GROUP, 1, element_types::LINE_2)
            .unwrap();
        assert_eq!(lines.node(), &[0, 1, 2]);
        assert_eq!(lines.element_offset(), &[2, 4]);
        assert_eq!(builder.into_graph().neighbour().len(), 4);
    }

    #[test]
    fn test_progress_reports_every_phase() {
        let mesh = primitives::single_triangle();
        let mut progress = RecordingProgress::default();
        build_neighbour_graph(
            &mesh,
            primitives::DOMAIN_GROUP,
            2,
            element_types::TRIANGLE_3,
            &NeighbourhoodParams::default(),
            &mut progress,
        )
        .unwrap();
        assert_eq!(progress.finished.len(), 3);
    }

    #[test]
    fn test_upload_buffer_sizes() {
        let mesh = primitives::single_triangle();
        let graph = build(&mesh, primitives::DOMAIN_GROUP, 2, element_types::TRIANGLE_3);
        let buffers = graph.upload_buffers();
        let size_of = |name: &str| {
            buffers
                .iter()
                .find(|(buffer, _)| *buffer == name)
                .map(|(_, bytes)| bytes.len())
                .unwrap()
        };
        assert_eq!(size_of("node_coordinates"), 3 * 16);
        assert_eq!(size_of("neighbour"), 6 * 4);
        assert_eq!(size_of("neighbour_link"), 6 * 16);
        assert_eq!(size_of("neighbour_length"), 6 * 4);
    }
}
