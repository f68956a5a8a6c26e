use anyhow::Result;
use neutrino_core::mesh::Mesh;
use neutrino_core::meta::Metadata;

/// Base trait for all types that support reading meshes
pub trait MeshReader {
    /// Reads the mesh. A reader yields its mesh exactly once, calling `read` again is an error
    fn read(&mut self) -> Result<Mesh>;

    /// Returns the `Metadata` of the associated `MeshReader`. Fields that are only known after reading
    /// (e.g. node counts) are `None` before [`read`](Self::read) was called
    fn get_metadata(&self) -> &dyn Metadata;
}
