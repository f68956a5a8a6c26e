use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use itertools::Itertools;
use log::{debug, warn};
use neutrino_core::mesh::{nodes_per_element, Entity, Mesh, NodeBlock};
use neutrino_core::meta::Metadata;
use neutrino_core::nalgebra::Point3;

use super::{next_line, read_section, MshMetadata, SectionTokens};
use crate::base::MeshReader;

/// `MeshReader` implementation for Gmsh MSH 4.1 ASCII files
///
/// Creating the reader parses the `$MeshFormat` section, so unsupported files are rejected before any mesh
/// data is read. [`read`](MeshReader::read) then parses `$PhysicalNames`, `$Entities`, `$Nodes` and
/// `$Elements`. All other sections are skipped. Elements of types without a known node count are skipped
/// as well.
pub struct MshReader<R: BufRead> {
    reader: Option<R>,
    metadata: MshMetadata,
}

impl<R: BufRead> MshReader<R> {
    pub fn from_read(mut read: R) -> Result<Self> {
        match next_line(&mut read)? {
            Some(header) if header == "$MeshFormat" => {}
            Some(header) => bail!("Expected $MeshFormat at the start of an MSH file, found '{}'", header),
            None => bail!("Empty MSH file"),
        }
        let format_line =
            next_line(&mut read)?.ok_or_else(|| anyhow!("Unexpected end of file in $MeshFormat"))?;
        let metadata = MshMetadata::from_format_line(&format_line)?;
        read_section(&mut read, "MeshFormat")?;

        Ok(Self {
            reader: Some(read),
            metadata,
        })
    }
}

impl MshReader<BufReader<File>> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())
            .with_context(|| format!("Could not open MSH file {}", path.as_ref().display()))?;
        Self::from_read(BufReader::new(file))
    }
}

impl<R: BufRead> MeshReader for MshReader<R> {
    fn read(&mut self) -> Result<Mesh> {
        let mut reader = self
            .reader
            .take()
            .ok_or_else(|| anyhow!("The mesh of this MshReader has already been read"))?;

        let mut mesh = Mesh::new();
        while let Some(header) = next_line(&mut reader)? {
            let name = header
                .strip_prefix('$')
                .ok_or_else(|| anyhow!("Expected a section header, found '{}'", header))?;
            let lines = read_section(&mut reader, name)?;
            match name {
                "PhysicalNames" => parse_physical_names(&lines, &mut mesh)?,
                "Entities" => parse_entities(&lines, &mut mesh)?,
                "Nodes" => parse_nodes(&lines, &mut mesh)?,
                "Elements" => parse_elements(&lines, &mut mesh)?,
                "MeshFormat" => bail!("Duplicate $MeshFormat section"),
                _ => warn!("Skipping unsupported section ${} ({} lines)", name, lines.len()),
            }
        }

        self.metadata.update_from_mesh(&mesh);
        Ok(mesh)
    }

    fn get_metadata(&self) -> &dyn Metadata {
        &self.metadata
    }
}

fn parse_physical_names(lines: &[String], mesh: &mut Mesh) -> Result<()> {
    let (count_line, name_lines) = lines
        .split_first()
        .ok_or_else(|| anyhow!("Empty $PhysicalNames section"))?;
    let count: usize = count_line
        .parse()
        .with_context(|| format!("Invalid number of physical names '{}'", count_line))?;
    if name_lines.len() != count {
        bail!(
            "$PhysicalNames announces {} names but contains {}",
            count,
            name_lines.len()
        );
    }

    for line in name_lines {
        let (dimension, tag) = line
            .split_whitespace()
            .next_tuple()
            .ok_or_else(|| anyhow!("Invalid physical name '{}'", line))?;
        let name_start = line
            .find('"')
            .ok_or_else(|| anyhow!("Physical name '{}' is not quoted", line))?;
        mesh.add_physical_name(
            dimension
                .parse()
                .with_context(|| format!("Invalid physical name dimension in '{}'", line))?,
            tag.parse()
                .with_context(|| format!("Invalid physical tag in '{}'", line))?,
            line[name_start..].trim_matches('"'),
        );
    }
    Ok(())
}

fn parse_entities(lines: &[String], mesh: &mut Mesh) -> Result<()> {
    let mut tokens = SectionTokens::new("Entities", lines);
    let counts: Vec<usize> = tokens.next_vec(4, "number of entities")?;
    for (dimension, count) in counts.into_iter().enumerate() {
        for _ in 0..count {
            let tag: i32 = tokens.next("entity tag")?;
            // Points store their position, all other entities a bounding box
            let geometry = if dimension == 0 { 3 } else { 6 };
            tokens.skip(geometry, "entity geometry")?;
            let physical_count: usize = tokens.next("number of physical tags")?;
            let physical_tags: Vec<i32> = tokens.next_vec(physical_count, "physical tag")?;
            if dimension > 0 {
                let boundary_count: usize = tokens.next("number of bounding entities")?;
                tokens.skip(boundary_count, "bounding entity tag")?;
            }
            mesh.add_entity(Entity::new(dimension as i32, tag), &physical_tags);
        }
    }
    let trailing = tokens.remaining();
    if trailing > 0 {
        warn!("Ignoring {} trailing values in $Entities", trailing);
    }
    Ok(())
}

fn parse_nodes(lines: &[String], mesh: &mut Mesh) -> Result<()> {
    let mut tokens = SectionTokens::new("Nodes", lines);
    let block_count: usize = tokens.next("number of node blocks")?;
    let node_count: usize = tokens.next("number of nodes")?;
    tokens.skip(2, "node tag range")?;

    let mut read = 0;
    for _ in 0..block_count {
        let dimension: i32 = tokens.next("entity dimension")?;
        let tag: i32 = tokens.next("entity tag")?;
        let parametric: i32 = tokens.next("parametric flag")?;
        let count: usize = tokens.next("number of nodes in block")?;

        let parametric_per_node = if parametric != 0 {
            dimension.max(0) as usize
        } else {
            0
        };
        let tags = tokens.next_vec(count, "node tag")?;
        let mut coordinates = Vec::with_capacity(count);
        let mut parametric_coordinates = Vec::with_capacity(count * parametric_per_node);
        for _ in 0..count {
            let xyz: Vec<f64> = tokens.next_vec(3, "node coordinate")?;
            coordinates.push(Point3::new(xyz[0], xyz[1], xyz[2]));
            parametric_coordinates
                .extend(tokens.next_vec::<f64>(parametric_per_node, "parametric coordinate")?);
        }

        mesh.add_node_block(
            Entity::new(dimension, tag),
            NodeBlock {
                tags,
                coordinates,
                parametric_coordinates,
            },
        )?;
        read += count;
    }

    if read != node_count {
        bail!(
            "$Nodes announces {} nodes but contains {}",
            node_count,
            read
        );
    }
    debug!("Read {} nodes in {} blocks", read, block_count);
    Ok(())
}

fn parse_elements(lines: &[String], mesh: &mut Mesh) -> Result<()> {
    let mut lines = lines.iter();
    let mut next_row = |what: &str| {
        lines
            .next()
            .ok_or_else(|| anyhow!("Unexpected end of section $Elements while reading {}", what))
    };

    let mut header = SectionTokens::new("Elements", std::slice::from_ref(next_row("header")?));
    let block_count: usize = header.next("number of element blocks")?;
    let element_count: usize = header.next("number of elements")?;

    let mut read = 0;
    for _ in 0..block_count {
        let mut block_header =
            SectionTokens::new("Elements", std::slice::from_ref(next_row("block header")?));
        let dimension: i32 = block_header.next("entity dimension")?;
        let tag: i32 = block_header.next("entity tag")?;
        let element_type: i32 = block_header.next("element type")?;
        let count: usize = block_header.next("number of elements in block")?;
        let entity = Entity::new(dimension, tag);
        read += count;

        let stride = match nodes_per_element(element_type) {
            Some(stride) => stride,
            None => {
                warn!(
                    "Skipping {} elements of unsupported type {} on entity {}",
                    count, element_type, entity
                );
                for _ in 0..count {
                    next_row("element")?;
                }
                continue;
            }
        };

        let mut tags = Vec::with_capacity(count);
        let mut node_tags = Vec::with_capacity(count * stride);
        for _ in 0..count {
            let line = next_row("element")?;
            let values: Vec<usize> =
                SectionTokens::new("Elements", std::slice::from_ref(line)).rest("element value")?;
            if values.len() != stride + 1 {
                bail!(
                    "Element '{}' of type {} must list exactly {} nodes",
                    line,
                    element_type,
                    stride
                );
            }
            tags.push(values[0]);
            node_tags.extend_from_slice(&values[1..]);
        }
        mesh.add_elements(entity, element_type, tags, node_tags)?;
    }

    if read != element_count {
        bail!(
            "$Elements announces {} elements but contains {}",
            element_count,
            read
        );
    }
    debug!("Read {} elements in {} blocks", read, block_count);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use neutrino_core::mesh::{element_types, MeshProvider};

    use super::*;

    const SQUARE: &str = r#"$MeshFormat
4.1 0 8
$EndMeshFormat
$PhysicalNames
2
1 2 "bottom edge"
2 1 "domain"
$EndPhysicalNames
$Entities
2 1 1 0
1 0 0 0 0
2 1 0 0 0
1 0 0 0 1 0 0 1 2 2 1 -2
1 0 0 0 1 1 0 1 1 1 1
$EndEntities
$Nodes
3 4 1 4
0 1 0 1
1
0 0 0
0 2 0 1
2
1 0 0
2 1 1 2
3
4
1 1 0 1 1
0 1 0 0 1
$EndNodes
$Elements
2 3 1 3
1 1 1 1
1 1 2
2 1 2 2
2 1 2 3
3 1 3 4
$EndElements
$Comments
written by hand
$EndComments
"#;

    fn read_str(content: &str) -> Result<Mesh> {
        MshReader::from_read(Cursor::new(content))?.read()
    }

    #[test]
    fn test_read_square() -> Result<()> {
        let mut reader = MshReader::from_read(Cursor::new(SQUARE))?;
        assert_eq!(reader.get_metadata().number_of_nodes(), None);
        let mesh = reader.read()?;

        assert_eq!(mesh.entities().len(), 4);
        assert_eq!(mesh.node_count(), 4);
        assert_eq!(mesh.element_count(), 3);
        assert_eq!(mesh.physical_name(2, 1), Some("domain"));
        assert_eq!(mesh.physical_name(1, 2), Some("bottom edge"));
        assert_eq!(mesh.physical_tags(Entity::new(1, 1)), &[2]);

        let surface = mesh.nodes(Entity::new(2, 1)).unwrap();
        assert_eq!(surface.tags, vec![3, 4]);
        assert_eq!(surface.coordinates[0], Point3::new(1.0, 1.0, 0.0));
        assert_eq!(surface.parametric_coordinates, vec![1.0, 1.0, 0.0, 1.0]);

        let triangles = mesh.elements_by_type(element_types::TRIANGLE_3);
        assert_eq!(triangles.tags, vec![2, 3]);
        assert_eq!(triangles.node_tags, vec![1, 2, 3, 1, 3, 4]);

        let bottom = mesh.nodes_for_physical_group(1, 2).unwrap();
        assert_eq!(bottom.tags, vec![1, 2]);

        assert_eq!(reader.get_metadata().number_of_nodes(), Some(4));
        assert_eq!(reader.get_metadata().number_of_elements(), Some(3));
        Ok(())
    }

    #[test]
    fn test_mesh_is_read_once() -> Result<()> {
        let mut reader = MshReader::from_read(Cursor::new(SQUARE))?;
        reader.read()?;
        assert!(reader.read().is_err());
        Ok(())
    }

    #[test]
    fn test_unsupported_headers() {
        assert!(MshReader::from_read(Cursor::new("")).is_err());
        assert!(MshReader::from_read(Cursor::new("$Nodes\n0 0 0 0\n$EndNodes\n")).is_err());
        assert!(
            MshReader::from_read(Cursor::new("$MeshFormat\n2.2 0 8\n$EndMeshFormat\n")).is_err()
        );
        assert!(
            MshReader::from_read(Cursor::new("$MeshFormat\n4.1 1 8\n$EndMeshFormat\n")).is_err()
        );
    }

    #[test]
    fn test_unknown_element_types_are_skipped() -> Result<()> {
        let content = SQUARE.replace("1 1 1 1\n1 1 2\n", "1 1 99 1\n1 1 2 3 4 5\n");
        let mesh = read_str(&content)?;
        assert_eq!(mesh.element_count(), 2);
        Ok(())
    }

    #[test]
    fn test_inconsistent_sections_are_errors() {
        // Node count in the header does not match the blocks
        assert!(read_str(&SQUARE.replace("3 4 1 4\n", "3 5 1 4\n")).is_err());
        // Triangle with a missing node
        assert!(read_str(&SQUARE.replace("3 1 3 4\n", "3 1 3\n")).is_err());
        // Truncated section
        assert!(read_str(&SQUARE.replace("$EndElements\n", "")).is_err());
        // Unquoted physical name
        assert!(read_str(&SQUARE.replace("\"domain\"", "domain")).is_err());
    }
}
