use nalgebra::Point3;

use super::{element_types, Entity, Mesh};

/// Physical tag of the surface group created by [`triangle_grid`] and [`single_triangle`]
pub const DOMAIN_GROUP: i32 = 1;
/// Physical tag of the bottom boundary line group created by [`triangle_grid`]
pub const BOTTOM_GROUP: i32 = 2;

/// A structured grid of `nx * ny` square cells with side length `spacing` in the z = 0 plane, each cell split
/// into two triangles along its diagonal.
///
/// Nodes are tagged row by row starting at 1, so node `(i, j)` has tag `j * (nx + 1) + i + 1`. All nodes and
/// triangles live on surface entity `(2, 1)`, which belongs to the physical group `(2, DOMAIN_GROUP)`. The
/// bottom row is additionally covered by line elements on curve entity `(1, 1)`, physical group
/// `(1, BOTTOM_GROUP)`.
/// ```
/// # use neutrino_core::mesh::{primitives::triangle_grid, MeshProvider};
/// let mesh = triangle_grid(4, 2, 0.5);
/// assert_eq!(mesh.node_count(), 15);
/// ```
pub fn triangle_grid(nx: usize, ny: usize, spacing: f64) -> Mesh {
    let surface = Entity::new(2, 1);
    let bottom = Entity::new(1, 1);
    let node_tag = |i: usize, j: usize| j * (nx + 1) + i + 1;

    let mut tags = Vec::with_capacity((nx + 1) * (ny + 1));
    let mut coordinates = Vec::with_capacity((nx + 1) * (ny + 1));
    for j in 0..=ny {
        for i in 0..=nx {
            tags.push(node_tag(i, j));
            coordinates.push(Point3::new(i as f64 * spacing, j as f64 * spacing, 0.0));
        }
    }

    let mut triangle_nodes = Vec::with_capacity(nx * ny * 6);
    for j in 0..ny {
        for i in 0..nx {
            let a = node_tag(i, j);
            let b = node_tag(i + 1, j);
            let c = node_tag(i + 1, j + 1);
            let d = node_tag(i, j + 1);
            triangle_nodes.extend_from_slice(&[a, b, c, a, c, d]);
        }
    }
    let triangle_count = nx * ny * 2;
    let line_nodes = (0..nx)
        .flat_map(|i| [node_tag(i, 0), node_tag(i + 1, 0)])
        .collect::<Vec<_>>();

    let mut mesh = Mesh::new();
    mesh.add_entity(bottom, &[BOTTOM_GROUP]);
    mesh.add_entity(surface, &[DOMAIN_GROUP]);
    mesh.add_physical_name(1, BOTTOM_GROUP, "bottom");
    mesh.add_physical_name(2, DOMAIN_GROUP, "domain");
    mesh.add_nodes(surface, tags, coordinates)
        .expect("grid nodes have one coordinate per tag");
    mesh.add_elements(
        surface,
        element_types::TRIANGLE_3,
        (1..=triangle_count).collect(),
        triangle_nodes,
    )
    .expect("grid triangles have three nodes each");
    mesh.add_elements(
        bottom,
        element_types::LINE_2,
        (triangle_count + 1..=triangle_count + nx).collect(),
        line_nodes,
    )
    .expect("grid lines have two nodes each");
    mesh
}

/// A single triangle with nodes `(0, 0, 0)`, `(1, 0, 0)` and `(0, 1, 0)` in physical group `(2, DOMAIN_GROUP)`
pub fn single_triangle() -> Mesh {
    let surface = Entity::new(2, 1);
    let mut mesh = Mesh::new();
    mesh.add_entity(surface, &[DOMAIN_GROUP]);
    mesh.add_nodes(
        surface,
        vec![1, 2, 3],
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ],
    )
    .expect("three tags, three coordinates");
    mesh.add_elements(surface, element_types::TRIANGLE_3, vec![1], vec![1, 2, 3])
        .expect("one triangle, three nodes");
    mesh
}

/// The unit cube split into six tetrahedra that share the diagonal from `(0, 0, 0)` to `(1, 1, 1)`, in
/// physical group `(3, DOMAIN_GROUP)`
pub fn tetrahedral_cube() -> Mesh {
    let volume = Entity::new(3, 1);
    let corners = (0..8)
        .map(|c| Point3::new((c & 1) as f64, ((c >> 1) & 1) as f64, ((c >> 2) & 1) as f64))
        .collect::<Vec<_>>();
    // Corner c has tag c + 1; every tetrahedron contains corners 0 and 7
    let tetrahedra: [[usize; 4]; 6] = [
        [1, 2, 4, 8],
        [1, 4, 3, 8],
        [1, 3, 7, 8],
        [1, 7, 5, 8],
        [1, 5, 6, 8],
        [1, 6, 2, 8],
    ];

    let mut mesh = Mesh::new();
    mesh.add_entity(volume, &[DOMAIN_GROUP]);
    mesh.add_nodes(volume, (1..=8).collect(), corners)
        .expect("eight tags, eight corners");
    mesh.add_elements(
        volume,
        element_types::TETRAHEDRON_4,
        (1..=6).collect(),
        tetrahedra.iter().flatten().copied().collect(),
    )
    .expect("six tetrahedra, four nodes each");
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::MeshProvider;

    #[test]
    fn test_triangle_grid_groups() {
        let mesh = triangle_grid(3, 2, 1.0);
        let domain = mesh.nodes_for_physical_group(2, DOMAIN_GROUP).unwrap();
        assert_eq!(domain.len(), 12);
        let bottom = mesh.nodes_for_physical_group(1, BOTTOM_GROUP).unwrap();
        assert_eq!(bottom.tags, vec![1, 2, 3, 4]);
        assert_eq!(bottom.coordinates[3], Point3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn test_tetrahedral_cube_nodes_are_corners() {
        let mesh = tetrahedral_cube();
        let nodes = mesh.nodes(Entity::new(3, 1)).unwrap();
        assert_eq!(nodes.coordinates[0], Point3::new(0.0, 0.0, 0.0));
        assert_eq!(nodes.coordinates[7], Point3::new(1.0, 1.0, 1.0));
        assert_eq!(mesh.elements_by_type(element_types::TETRAHEDRON_4).len(), 6);
    }
}
