use std::collections::BTreeMap;
use std::fmt::Display;

use super::{Mesh, MeshProvider};

/// Per element type statistics of a [`MeshSummary`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementTypeSummary {
    pub element_type: i32,
    pub name: String,
    /// Nodes per element
    pub stride: usize,
    pub count: usize,
}

/// Entity, node and element counts of a mesh
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshSummary {
    pub entities: usize,
    pub nodes: usize,
    pub elements: usize,
    /// One row per element type present in the mesh, sorted by type id
    pub element_types: Vec<ElementTypeSummary>,
}

impl MeshSummary {
    /// Gathers the summary of any [`MeshProvider`]
    pub fn from_provider<M: MeshProvider + ?Sized>(mesh: &M) -> Self {
        let entities = mesh.entities();
        let mut per_type = BTreeMap::<i32, (usize, usize)>::new();
        for entity in entities.iter() {
            for block in mesh.elements(*entity) {
                let row = per_type.entry(block.element_type).or_insert((block.stride, 0));
                row.1 += block.len();
            }
        }

        let element_types = per_type
            .into_iter()
            .map(|(element_type, (stride, count))| ElementTypeSummary {
                element_type,
                name: mesh
                    .element_properties(element_type)
                    .map(|properties| properties.name)
                    .unwrap_or_else(|| format!("Unknown type {}", element_type)),
                stride,
                count,
            })
            .collect::<Vec<_>>();

        Self {
            entities: entities.len(),
            nodes: mesh.node_count(),
            elements: element_types.iter().map(|row| row.count).sum(),
            element_types,
        }
    }
}

impl Display for MeshSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Mesh summary")?;
        writeln!(f, "\tEntities:               {}", self.entities)?;
        writeln!(f, "\tNodes:                  {}", self.nodes)?;
        writeln!(f, "\tElements:               {}", self.elements)?;
        for row in &self.element_types {
            writeln!(
                f,
                "\t\t{:<22} (type {:>2}, {:>2} nodes): {}",
                row.name, row.element_type, row.stride, row.count
            )?;
        }
        Ok(())
    }
}

impl Mesh {
    pub fn summary(&self) -> MeshSummary {
        MeshSummary::from_provider(self)
    }
}
