use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub};

use crate::models::{Octant, Vector3};
use crate::utils::BarnesHutError;

/// A position in 3D space.
///
/// Points and vectors are kept apart: the difference of two points is a [`Vector3`], and a
/// point moves by adding a vector to it.
///
/// # Examples
///
/// ```
/// use rs_barnes_hut::models::{Point3, Vector3};
///
/// let a = Point3::new(1.0, 2.0, 2.0);
/// let origin = Point3::origin();
///
/// assert_eq!(a - origin, Vector3::new(1.0, 2.0, 2.0));
/// assert_eq!(a.distance(origin), 3.0);
/// assert_eq!(a.distance2(origin), 9.0);
/// assert_eq!(origin + Vector3::new(0.0, 0.0, 1.0), Point3::new(0.0, 0.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Point3 { x, y, z }
    }

    pub const fn origin() -> Self {
        Point3 { x: 0.0, y: 0.0, z: 0.0 }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn distance(&self, to: Point3) -> f64 {
        self.distance2(to).sqrt()
    }

    /// Squared distance. Cheaper than [`Point3::distance`] and exact for coincidence tests.
    pub fn distance2(&self, to: Point3) -> f64 {
        let dx = self.x - to.x;
        let dy = self.y - to.y;
        let dz = self.z - to.z;
        dx * dx + dy * dy + dz * dz
    }

    /// The octant this point falls into around `reference`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_barnes_hut::models::{Octant, Point3};
    ///
    /// let center = Point3::new(1.0, 1.0, 1.0);
    /// assert_eq!(Point3::new(2.0, 0.0, 1.0).octant_of(center), Octant::new(true, false, true));
    /// // Points on a dividing plane go to the positive side.
    /// assert_eq!(center.octant_of(center), Octant::new(true, true, true));
    /// ```
    pub fn octant_of(&self, reference: Point3) -> Octant {
        Octant::from_offset(self.x - reference.x, self.y - reference.y, self.z - reference.z)
    }

    pub fn to_vector(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl Add<Vector3> for Point3 {
    type Output = Point3;

    fn add(self, offset: Vector3) -> Point3 {
        Point3::new(self.x + offset.x, self.y + offset.y, self.z + offset.z)
    }
}

impl AddAssign<Vector3> for Point3 {
    fn add_assign(&mut self, offset: Vector3) {
        self.x += offset.x;
        self.y += offset.y;
        self.z += offset.z;
    }
}

impl Sub for Point3 {
    type Output = Vector3;

    fn sub(self, other: Point3) -> Vector3 {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Sub<Vector3> for Point3 {
    type Output = Point3;

    fn sub(self, offset: Vector3) -> Point3 {
        Point3::new(self.x - offset.x, self.y - offset.y, self.z - offset.z)
    }
}

impl Mul<f64> for Point3 {
    type Output = Point3;

    fn mul(self, scalar: f64) -> Point3 {
        Point3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Div<f64> for Point3 {
    type Output = Point3;

    fn div(self, scalar: f64) -> Point3 {
        Point3::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

pub fn distance(from: Point3, to: Point3) -> f64 {
    from.distance(to)
}

pub fn distance2(from: Point3, to: Point3) -> f64 {
    from.distance2(to)
}

/// Unnormalized displacement pointing from `to` toward `from`.
///
/// # Examples
///
/// ```
/// use rs_barnes_hut::models::{direction, Point3, Vector3};
///
/// let d = direction(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0));
/// assert_eq!(d, Vector3::new(-10.0, 0.0, 0.0));
/// ```
pub fn direction(from: Point3, to: Point3) -> Vector3 {
    from - to
}

/// Unit-length version of [`direction`].
///
/// # Errors
///
/// Returns `BarnesHutError::ZeroLengthVector` when both points coincide.
pub fn normalized_direction(from: Point3, to: Point3) -> Result<Vector3, BarnesHutError> {
    direction(from, to).normalize()
}
