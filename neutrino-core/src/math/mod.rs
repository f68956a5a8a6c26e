mod bounds;
pub use self::bounds::*;

mod homogeneous;
pub use self::homogeneous::*;
