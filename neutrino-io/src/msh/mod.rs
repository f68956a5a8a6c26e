mod msh_reader;
pub use self::msh_reader::*;

mod msh_metadata;
pub use self::msh_metadata::*;

mod parsing;
pub(crate) use self::parsing::*;
