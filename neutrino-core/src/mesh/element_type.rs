#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Gmsh element type ids known to neutrino
pub mod element_types {
    pub const LINE_2: i32 = 1;
    pub const TRIANGLE_3: i32 = 2;
    pub const QUADRANGLE_4: i32 = 3;
    pub const TETRAHEDRON_4: i32 = 4;
    pub const HEXAHEDRON_8: i32 = 5;
    pub const PRISM_6: i32 = 6;
    pub const PYRAMID_5: i32 = 7;
    pub const LINE_3: i32 = 8;
    pub const TRIANGLE_6: i32 = 9;
    pub const QUADRANGLE_9: i32 = 10;
    pub const TETRAHEDRON_10: i32 = 11;
    pub const POINT: i32 = 15;
    pub const QUADRANGLE_8: i32 = 16;
}

/// Properties of an element type, mirroring what Gmsh reports for it
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ElementProperties {
    pub name: String,
    pub dimension: i32,
    pub order: i32,
    /// Number of nodes per element. This is the stride of the element's connectivity
    pub num_nodes: usize,
    /// Node coordinates in the reference element, `dimension` values per node
    pub local_node_coordinates: Vec<f64>,
    /// Number of corner (first order) nodes
    pub num_primary_nodes: usize,
}

struct ElementTypeEntry {
    id: i32,
    name: &'static str,
    dimension: i32,
    order: i32,
    num_primary_nodes: usize,
    local_node_coordinates: &'static [f64],
}

impl ElementTypeEntry {
    fn num_nodes(&self) -> usize {
        if self.dimension == 0 {
            1
        } else {
            self.local_node_coordinates.len() / self.dimension as usize
        }
    }
}

#[rustfmt::skip]
const ELEMENT_TYPES: &[ElementTypeEntry] = &[
    ElementTypeEntry {
        id: element_types::LINE_2, name: "Line 2", dimension: 1, order: 1, num_primary_nodes: 2,
        local_node_coordinates: &[-1.0, 1.0],
    },
    ElementTypeEntry {
        id: element_types::TRIANGLE_3, name: "Triangle 3", dimension: 2, order: 1, num_primary_nodes: 3,
        local_node_coordinates: &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
    },
    ElementTypeEntry {
        id: element_types::QUADRANGLE_4, name: "Quadrilateral 4", dimension: 2, order: 1, num_primary_nodes: 4,
        local_node_coordinates: &[-1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0, 1.0],
    },
    ElementTypeEntry {
        id: element_types::TETRAHEDRON_4, name: "Tetrahedron 4", dimension: 3, order: 1, num_primary_nodes: 4,
        local_node_coordinates: &[
            0.0, 0.0, 0.0,
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        ],
    },
    ElementTypeEntry {
        id: element_types::HEXAHEDRON_8, name: "Hexahedron 8", dimension: 3, order: 1, num_primary_nodes: 8,
        local_node_coordinates: &[
            -1.0, -1.0, -1.0,
             1.0, -1.0, -1.0,
             1.0,  1.0, -1.0,
            -1.0,  1.0, -1.0,
            -1.0, -1.0,  1.0,
             1.0, -1.0,  1.0,
             1.0,  1.0,  1.0,
            -1.0,  1.0,  1.0,
        ],
    },
    ElementTypeEntry {
        id: element_types::PRISM_6, name: "Prism 6", dimension: 3, order: 1, num_primary_nodes: 6,
        local_node_coordinates: &[
            0.0, 0.0, -1.0,
            1.0, 0.0, -1.0,
            0.0, 1.0, -1.0,
            0.0, 0.0,  1.0,
            1.0, 0.0,  1.0,
            0.0, 1.0,  1.0,
        ],
    },
    ElementTypeEntry {
        id: element_types::PYRAMID_5, name: "Pyramid 5", dimension: 3, order: 1, num_primary_nodes: 5,
        local_node_coordinates: &[
            -1.0, -1.0, 0.0,
             1.0, -1.0, 0.0,
             1.0,  1.0, 0.0,
            -1.0,  1.0, 0.0,
             0.0,  0.0, 1.0,
        ],
    },
    ElementTypeEntry {
        id: element_types::LINE_3, name: "Line 3", dimension: 1, order: 2, num_primary_nodes: 2,
        local_node_coordinates: &[-1.0, 1.0, 0.0],
    },
    ElementTypeEntry {
        id: element_types::TRIANGLE_6, name: "Triangle 6", dimension: 2, order: 2, num_primary_nodes: 3,
        local_node_coordinates: &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.5, 0.0, 0.5, 0.5, 0.0, 0.5],
    },
    ElementTypeEntry {
        id: element_types::QUADRANGLE_9, name: "Quadrilateral 9", dimension: 2, order: 2, num_primary_nodes: 4,
        local_node_coordinates: &[
            -1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0, 1.0,
             0.0, -1.0, 1.0,  0.0, 0.0, 1.0, -1.0, 0.0,
             0.0,  0.0,
        ],
    },
    ElementTypeEntry {
        id: element_types::TETRAHEDRON_10, name: "Tetrahedron 10", dimension: 3, order: 2, num_primary_nodes: 4,
        local_node_coordinates: &[
            0.0, 0.0, 0.0,
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
            0.5, 0.0, 0.0,
            0.5, 0.5, 0.0,
            0.0, 0.5, 0.0,
            0.0, 0.0, 0.5,
            0.0, 0.5, 0.5,
            0.5, 0.0, 0.5,
        ],
    },
    ElementTypeEntry {
        id: element_types::POINT, name: "Point", dimension: 0, order: 0, num_primary_nodes: 1,
        local_node_coordinates: &[],
    },
    ElementTypeEntry {
        id: element_types::QUADRANGLE_8, name: "Quadrilateral 8", dimension: 2, order: 2, num_primary_nodes: 4,
        local_node_coordinates: &[
            -1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0, 1.0,
             0.0, -1.0, 1.0,  0.0, 0.0, 1.0, -1.0, 0.0,
        ],
    },
];

/// Returns the properties of the Gmsh element type with id `element_type`, or `None` if the type is
/// unknown
/// ```
/// # use neutrino_core::mesh::{element_properties, element_types};
/// let triangle = element_properties(element_types::TRIANGLE_3).unwrap();
/// assert_eq!(triangle.num_nodes, 3);
/// assert_eq!(triangle.dimension, 2);
/// assert!(element_properties(1234).is_none());
/// ```
pub fn element_properties(element_type: i32) -> Option<ElementProperties> {
    ELEMENT_TYPES
        .iter()
        .find(|entry| entry.id == element_type)
        .map(|entry| ElementProperties {
            name: entry.name.to_owned(),
            dimension: entry.dimension,
            order: entry.order,
            num_nodes: entry.num_nodes(),
            local_node_coordinates: entry.local_node_coordinates.to_vec(),
            num_primary_nodes: entry.num_primary_nodes,
        })
}

/// Number of nodes per element for `element_type`, or `None` if the type is unknown
pub fn nodes_per_element(element_type: i32) -> Option<usize> {
    ELEMENT_TYPES
        .iter()
        .find(|entry| entry.id == element_type)
        .map(ElementTypeEntry::num_nodes)
}
