use anyhow::{Context, Result};
use neutrino_core::mesh::Mesh;

mod reader;
use std::path::Path;

pub use self::reader::*;

mod io_factory;
pub use self::io_factory::*;

/// Try to read the mesh in the given file. The file type is determined from the file extension of `path`. If
/// this succeeds, an appropriate reader is created and the whole mesh is read
pub fn read_mesh<P: AsRef<Path>>(path: P) -> Result<Mesh> {
    let mut reader = GenericMeshReader::open_file(path.as_ref()).context(format!(
        "Could not create appropriate reader for mesh file {}",
        path.as_ref().display()
    ))?;
    reader.read().context(format!(
        "Could not read mesh file {}",
        path.as_ref().display()
    ))
}
