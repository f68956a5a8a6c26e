use neutrino_core::{
    math::AABB,
    mesh::{MeshProvider, NodeBlock},
    nalgebra::Point3,
};

/// Calculate the bounding box of all nodes of the given `mesh`, skipping nodes with non-finite coordinates.
/// Returns `None` if no node is left. For an in-memory `Mesh` this agrees with `Mesh::bounds`
pub fn calculate_bounds<M: MeshProvider + ?Sized>(mesh: &M) -> Option<AABB<f64>> {
    let blocks = mesh
        .entities()
        .into_iter()
        .filter_map(|entity| mesh.nodes(entity))
        .collect::<Vec<_>>();
    bounds_of_blocks(blocks)
}

/// Calculate the bounding box of the nodes of physical group `(dimension, tag)`. Returns `None` if the group does
/// not exist or none of its nodes has known coordinates
pub fn calculate_group_bounds<M: MeshProvider + ?Sized>(
    mesh: &M,
    dimension: i32,
    tag: i32,
) -> Option<AABB<f64>> {
    let group = mesh.nodes_for_physical_group(dimension, tag)?;
    bounds_of_blocks(std::iter::once(&group))
}

fn bounds_of_blocks<'a, I: IntoIterator<Item = &'a NodeBlock>>(blocks: I) -> Option<AABB<f64>> {
    let mut pos_min = Point3::new(f64::MAX, f64::MAX, f64::MAX);
    let mut pos_max = Point3::new(f64::MIN, f64::MIN, f64::MIN);
    let mut any = false;
    for pos in blocks.into_iter().flat_map(|block| block.coordinates.iter()) {
        // Group nodes without coordinates are NaN
        if !(pos.x.is_finite() && pos.y.is_finite() && pos.z.is_finite()) {
            continue;
        }
        any = true;
        if pos.x < pos_min.x {
            pos_min.x = pos.x;
        }
        if pos.y < pos_min.y {
            pos_min.y = pos.y;
        }
        if pos.z < pos_min.z {
            pos_min.z = pos.z;
        }
        if pos.x > pos_max.x {
            pos_max.x = pos.x;
        }
        if pos.y > pos_max.y {
            pos_max.y = pos.y;
        }
        if pos.z > pos_max.z {
            pos_max.z = pos.z;
        }
    }
    if any {
        Some(AABB::from_min_max(pos_min, pos_max))
    } else {
        None
    }
}
