//! Reading meshes from files
//!
//! [`base`] holds the format-independent reader interface together with [`base::read_mesh`], which picks a
//! reader from the file extension. [`msh`] implements the Gmsh MSH 4.1 ASCII format.

pub mod base;
pub mod msh;
