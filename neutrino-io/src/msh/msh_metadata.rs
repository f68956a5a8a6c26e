use std::fmt::Display;

use anyhow::{bail, Context, Result};
use itertools::Itertools;
use neutrino_core::math::AABB;
use neutrino_core::mesh::{Mesh, MeshProvider, PhysicalName};
use neutrino_core::meta::Metadata;

/// `Metadata` implementation for MSH files
///
/// The format version is known as soon as the reader is created. Counts, bounds and physical names are
/// filled in once the mesh has been read.
#[derive(Debug, Clone, Default)]
pub struct MshMetadata {
    version: String,
    data_size: usize,
    physical_names: Vec<PhysicalName>,
    number_of_entities: Option<usize>,
    number_of_nodes: Option<usize>,
    number_of_elements: Option<usize>,
    bounds: Option<AABB<f64>>,
}

impl MshMetadata {
    /// Parses the `version file-type data-size` line of the `$MeshFormat` section. Only ASCII files of version
    /// 4.1 are accepted
    pub(crate) fn from_format_line(line: &str) -> Result<Self> {
        let (version, file_type, data_size) = line
            .split_whitespace()
            .collect_tuple()
            .with_context(|| format!("Invalid $MeshFormat line '{}'", line))?;
        if version != "4.1" {
            bail!("Unsupported MSH version {}, only version 4.1 can be read", version);
        }
        if file_type != "0" {
            bail!("Binary MSH files are not supported, only ASCII files can be read");
        }
        let data_size = data_size
            .parse()
            .with_context(|| format!("Invalid data size '{}' in $MeshFormat", data_size))?;
        Ok(Self {
            version: version.to_owned(),
            data_size,
            ..Default::default()
        })
    }

    pub(crate) fn update_from_mesh(&mut self, mesh: &Mesh) {
        self.physical_names = mesh.physical_names().to_vec();
        self.number_of_entities = Some(mesh.entities().len());
        self.number_of_nodes = Some(mesh.node_count());
        self.number_of_elements = Some(mesh.element_count());
        self.bounds = mesh.bounds();
    }

    /// The MSH format version, e.g. `4.1`
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Size of a `size_t` on the machine that wrote the file
    pub fn data_size(&self) -> usize {
        self.data_size
    }

    pub fn physical_names(&self) -> &[PhysicalName] {
        &self.physical_names
    }

    pub fn number_of_entities(&self) -> Option<usize> {
        self.number_of_entities
    }
}

impl Display for MshMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "MSH Metadata")?;
        writeln!(f, "\tVersion: {}", self.version)?;
        writeln!(f, "\tData size: {}", self.data_size)?;
        if let Some(entities) = self.number_of_entities {
            writeln!(f, "\tNumber of entities: {}", entities)?;
        }
        if let Some(nodes) = self.number_of_nodes {
            writeln!(f, "\tNumber of nodes: {}", nodes)?;
        }
        if let Some(elements) = self.number_of_elements {
            writeln!(f, "\tNumber of elements: {}", elements)?;
        }
        if let Some(bounds) = &self.bounds {
            writeln!(f, "\tBounds: {}", bounds)?;
        }
        if !self.physical_names.is_empty() {
            writeln!(
                f,
                "\tPhysical names: {}",
                self.physical_names
                    .iter()
                    .map(|name| format!("({}, {}) \"{}\"", name.dimension, name.tag, name.name))
                    .join(", ")
            )?;
        }
        Ok(())
    }
}

impl Metadata for MshMetadata {
    fn bounds(&self) -> Option<AABB<f64>> {
        self.bounds
    }

    fn number_of_nodes(&self) -> Option<usize> {
        self.number_of_nodes
    }

    fn number_of_elements(&self) -> Option<usize> {
        self.number_of_elements
    }

    fn get_named_field(&self, field_name: &str) -> Option<Box<dyn std::any::Any>> {
        match field_name {
            "version" => Some(Box::new(self.version.clone())),
            "data_size" => Some(Box::new(self.data_size)),
            "physical_names" => Some(Box::new(self.physical_names.clone())),
            "number_of_entities" => self
                .number_of_entities
                .map(|count| Box::new(count) as Box<dyn std::any::Any>),
            _ => None,
        }
    }

    fn clone_into_box(&self) -> Box<dyn Metadata> {
        Box::new(self.clone())
    }
}
