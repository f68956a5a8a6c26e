use std::{fs::File, io::BufReader, path::Path};

use anyhow::{anyhow, bail, Result};
use neutrino_core::{mesh::Mesh, meta::Metadata};

use crate::msh::MshReader;

use super::MeshReader;

#[derive(Debug)]
enum SupportedFileExtensions {
    Msh,
}

/// Returns a lookup value for the file extension of the given file path
fn get_extension_lookup(path: &Path) -> Result<Option<SupportedFileExtensions>> {
    let extension = match path.extension() {
        Some(ex) => ex,
        None => return Ok(None),
    };
    let extension_str = extension.to_str().ok_or_else(|| {
        anyhow!(
            "File extension of path {} is no valid Unicode string",
            path.display()
        )
    })?;
    match extension_str.to_lowercase().as_str() {
        "msh" => Ok(Some(SupportedFileExtensions::Msh)),
        _ => Ok(None),
    }
}

/// A `MeshReader` for any supported file format, chosen by file extension
pub enum GenericMeshReader {
    Msh(MshReader<BufReader<File>>),
}

impl GenericMeshReader {
    pub fn open_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let extension = get_extension_lookup(path.as_ref())?;
        match extension {
            Some(SupportedFileExtensions::Msh) => {
                let reader = MshReader::from_path(path)?;
                Ok(Self::Msh(reader))
            }
            None => bail!("Unsupported file format of file {}", path.as_ref().display()),
        }
    }

    /// Checks whether the given `path` is a mesh file that can be read using a `GenericMeshReader`. `Err` is
    /// returned only if the file extension of `path` can't be inspected
    pub fn is_supported_file<P: AsRef<Path>>(path: P) -> Result<bool> {
        Ok(get_extension_lookup(path.as_ref())?.is_some())
    }
}

impl MeshReader for GenericMeshReader {
    fn read(&mut self) -> Result<Mesh> {
        match self {
            GenericMeshReader::Msh(reader) => reader.read(),
        }
    }

    fn get_metadata(&self) -> &dyn Metadata {
        match self {
            GenericMeshReader::Msh(reader) => reader.get_metadata(),
        }
    }
}
