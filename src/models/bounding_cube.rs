use crate::models::{Octant, Point3, Vector3};
use crate::utils::{BarnesHutError, MIN_ROOT_LENGTH};

/// An axis-aligned cube given by its center and edge length.
///
/// Containment is inclusive on every face, so a point lying exactly on the boundary of the
/// root cube can still be inserted.
///
/// # Examples
///
/// ```
/// use rs_barnes_hut::models::{BoundingCube, Point3};
///
/// let cube = BoundingCube::new(Point3::origin(), 2.0);
/// assert!(cube.contains(Point3::new(1.0, -1.0, 0.5)));
/// assert!(!cube.contains(Point3::new(1.01, 0.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingCube {
    pub center: Point3,
    pub length: f64,
}

impl BoundingCube {
    pub fn new(center: Point3, length: f64) -> Self {
        BoundingCube { center, length }
    }

    pub fn half_length(&self) -> f64 {
        self.length / 2.0
    }

    pub fn min(&self) -> Point3 {
        let h = self.half_length();
        self.center - Vector3::new(h, h, h)
    }

    pub fn max(&self) -> Point3 {
        let h = self.half_length();
        self.center + Vector3::new(h, h, h)
    }

    pub fn contains(&self, p: Point3) -> bool {
        let h = self.half_length();
        p.x >= self.center.x - h && p.x <= self.center.x + h &&
            p.y >= self.center.y - h && p.y <= self.center.y + h &&
            p.z >= self.center.z - h && p.z <= self.center.z + h
    }

    /// The sub-cube for one octant: half the edge length, centered a quarter edge away
    /// from this cube's center on every axis.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_barnes_hut::models::{BoundingCube, Octant, Point3};
    ///
    /// let cube = BoundingCube::new(Point3::origin(), 4.0);
    /// let sub = cube.octant_cube(Octant::new(false, true, false));
    /// assert_eq!(sub.center, Point3::new(-1.0, 1.0, -1.0));
    /// assert_eq!(sub.length, 2.0);
    /// ```
    pub fn octant_cube(&self, octant: Octant) -> BoundingCube {
        let quarter = self.length / 4.0;
        let (sx, sy, sz) = octant.signs();
        BoundingCube {
            center: self.center + Vector3::new(sx * quarter, sy * quarter, sz * quarter),
            length: self.length / 2.0,
        }
    }

    /// The smallest cube centered on the extent of `positions`, grown by `padding` times
    /// its edge length. The result contains every position, whatever the padding.
    ///
    /// When every position coincides the extent is empty, and the cube gets an edge length
    /// of `MIN_ROOT_LENGTH` so that it still has volume.
    ///
    /// # Errors
    ///
    /// Returns `EmptyParticleSet` for no positions, `InvalidPosition` if any position is not
    /// finite, and `InvalidRootLength` for a negative or non-finite padding.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_barnes_hut::models::{BoundingCube, Point3};
    ///
    /// let positions = [Point3::new(-1.0, 0.0, 0.0), Point3::new(3.0, 1.0, 0.5)];
    /// let cube = BoundingCube::enclosing(positions, 0.0).unwrap();
    /// assert_eq!(cube.center, Point3::new(1.0, 0.5, 0.25));
    /// assert_eq!(cube.length, 4.0);
    /// ```
    pub fn enclosing<I>(positions: I, padding: f64) -> Result<BoundingCube, BarnesHutError>
    where
        I: IntoIterator<Item = Point3>,
    {
        if !padding.is_finite() || padding < 0.0 {
            return Err(BarnesHutError::InvalidRootLength(padding));
        }

        let mut positions = positions.into_iter();
        let first = positions.next().ok_or(BarnesHutError::EmptyParticleSet)?;
        if !first.is_finite() {
            return Err(BarnesHutError::InvalidPosition);
        }

        let mut lower = first;
        let mut upper = first;
        for p in positions {
            if !p.is_finite() {
                return Err(BarnesHutError::InvalidPosition);
            }
            lower = Point3::new(lower.x.min(p.x), lower.y.min(p.y), lower.z.min(p.z));
            upper = Point3::new(upper.x.max(p.x), upper.y.max(p.y), upper.z.max(p.z));
        }

        let center = Point3::new(
            lower.x / 2.0 + upper.x / 2.0,
            lower.y / 2.0 + upper.y / 2.0,
            lower.z / 2.0 + upper.z / 2.0,
        );
        let half = (center.x - lower.x).max(upper.x - center.x)
            .max((center.y - lower.y).max(upper.y - center.y))
            .max((center.z - lower.z).max(upper.z - center.z));
        let mut length = if half > 0.0 { 2.0 * half * (1.0 + padding) } else { MIN_ROOT_LENGTH };

        // `center ± length/2` is rounded again by `contains`, which can leave the extreme
        // positions an ulp outside. Every position lies between `lower` and `upper`.
        let covers = |length: f64| {
            let cube = BoundingCube { center, length };
            cube.contains(lower) && cube.contains(upper)
        };
        while !covers(length) {
            length += length * f64::EPSILON;
        }

        Ok(BoundingCube { center, length })
    }
}
