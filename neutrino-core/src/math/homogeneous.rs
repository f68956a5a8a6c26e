use nalgebra::{Point3, Vector4};
use static_assertions::const_assert_eq;

/// Four component single precision vector, the layout used for all coordinate data that ends up in
/// device buffers (`x, y, z, w`, 16 bytes, no padding)
pub type Float4 = Vector4<f32>;

const_assert_eq!(std::mem::size_of::<Float4>(), 16);
const_assert_eq!(std::mem::align_of::<Float4>(), 4);

/// Converts a mesh position into a homogeneous point with `w = 1`
/// ```
/// # use neutrino_core::math::homogeneous_point;
/// # use nalgebra::Point3;
/// let p = homogeneous_point(&Point3::new(1.0, 2.0, 3.0));
/// assert_eq!(p.w, 1.0);
/// ```
pub fn homogeneous_point(position: &Point3<f64>) -> Float4 {
    Float4::new(position.x as f32, position.y as f32, position.z as f32, 1.0)
}

/// Displacement from `from` to `to` as a homogeneous direction (`w = 0`)
pub fn link_vector(from: &Float4, to: &Float4) -> Float4 {
    let mut link = to - from;
    link.w = 0.0;
    link
}

/// Euclidean length of the `x, y, z` part of `v`; `w` is ignored
/// ```
/// # use neutrino_core::math::{length3, Float4};
/// assert_eq!(length3(&Float4::new(3.0, 4.0, 0.0, 7.0)), 5.0);
/// ```
pub fn length3(v: &Float4) -> f32 {
    (v.x * v.x + v.y * v.y + v.z * v.z).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_vector_drops_w() {
        let a = homogeneous_point(&Point3::new(1.0, 1.0, 1.0));
        let b = homogeneous_point(&Point3::new(2.0, 3.0, 1.0));
        let link = link_vector(&a, &b);
        assert_eq!(link, Float4::new(1.0, 2.0, 0.0, 0.0));
        assert_eq!(link_vector(&b, &a), -link);
    }

    #[test]
    fn test_zero_length_link() {
        let a = homogeneous_point(&Point3::new(0.5, 0.5, 0.5));
        assert_eq!(length3(&link_vector(&a, &a)), 0.0);
    }
}
