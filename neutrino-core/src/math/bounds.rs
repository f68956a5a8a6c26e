use nalgebra::{ClosedSub, Point3, Scalar, Vector3};

/// 3D axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB<T: Scalar + PartialOrd> {
    min: Point3<T>,
    max: Point3<T>,
}

impl<T: Scalar + ClosedSub + PartialOrd + Copy> AABB<T> {
    /// Creates a new AABB from the given minimum and maximum coordinates. Panics if the minimum position is
    /// not less than or equal to the maximum position
    /// ```
    /// # use neutrino_core::math::AABB;
    /// let bounds = AABB::from_min_max(nalgebra::Point3::new(0.0, 0.0, 0.0), nalgebra::Point3::new(1.0, 1.0, 1.0));
    /// ```
    pub fn from_min_max(min: Point3<T>, max: Point3<T>) -> Self {
        if min.x > max.x || min.y > max.y || min.z > max.z {
            panic!("AABB::from_min_max: Minimum position must be <= maximum position!");
        }
        Self { min, max }
    }

    /// Computes the tightest AABB around all `points`. Returns `None` if `points` is empty
    /// ```
    /// # use neutrino_core::math::AABB;
    /// # use nalgebra::Point3;
    /// let points = [Point3::new(0.0, 2.0, -1.0), Point3::new(1.0, -2.0, 0.5)];
    /// let bounds = AABB::from_points(points.iter()).unwrap();
    /// assert_eq!(*bounds.min(), Point3::new(0.0, -2.0, -1.0));
    /// assert_eq!(*bounds.max(), Point3::new(1.0, 2.0, 0.5));
    /// ```
    pub fn from_points<'a, I: IntoIterator<Item = &'a Point3<T>>>(points: I) -> Option<Self>
    where
        T: 'a,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let init = Self {
            min: *first,
            max: *first,
        };
        Some(iter.fold(init, |bounds, point| bounds.extend_with_point(point)))
    }

    /// Returns the minimum point of this AABB
    pub fn min(&self) -> &Point3<T> {
        &self.min
    }

    /// Returns the maximum point of this AABB
    pub fn max(&self) -> &Point3<T> {
        &self.max
    }

    /// Returns the extent of this AABB. The extent is the size between the minimum and maximum position of this AABB
    pub fn extent(&self) -> Vector3<T> {
        self.max - self.min
    }

    /// Returns true if the given point is contained within this AABB. Points right on the boundary
    /// count as contained
    pub fn contains(&self, point: &Point3<T>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Returns the smallest AABB that contains both `self` and `other`
    pub fn union(&self, other: &AABB<T>) -> Self {
        self.extend_with_point(&other.min)
            .extend_with_point(&other.max)
    }

    /// Returns a copy of this AABB that is grown so that it contains `point`
    pub fn extend_with_point(&self, point: &Point3<T>) -> Self {
        let pick_min = |a: T, b: T| if a < b { a } else { b };
        let pick_max = |a: T, b: T| if a > b { a } else { b };
        Self {
            min: Point3::new(
                pick_min(self.min.x, point.x),
                pick_min(self.min.y, point.y),
                pick_min(self.min.z, point.z),
            ),
            max: Point3::new(
                pick_max(self.max.x, point.x),
                pick_max(self.max.y, point.y),
                pick_max(self.max.z, point.z),
            ),
        }
    }
}

impl<T: Scalar + PartialOrd + std::fmt::Display> std::fmt::Display for AABB<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}, {}] - [{}, {}, {}]",
            self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_empty() {
        let points: Vec<Point3<f64>> = vec![];
        assert!(AABB::from_points(points.iter()).is_none());
    }

    #[test]
    fn test_union_contains_both() {
        let a = AABB::from_min_max(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        let b = AABB::from_min_max(Point3::new(2.0, -1.0, 0.5), Point3::new(3.0, 0.0, 0.7));
        let merged = a.union(&b);
        assert_eq!(*merged.min(), Point3::new(0.0, -1.0, 0.0));
        assert_eq!(*merged.max(), Point3::new(3.0, 1.0, 1.0));
        assert!(merged.contains(&Point3::new(2.5, -0.5, 0.6)));
        assert!(!a.contains(&Point3::new(2.5, -0.5, 0.6)));
    }

    #[test]
    #[should_panic]
    fn test_from_min_max_rejects_inverted() {
        AABB::from_min_max(Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 1.0));
    }
}
