use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use crate::utils::BarnesHutError;

/// A displacement or force in 3D space.
///
/// # Examples
///
/// ```
/// use rs_barnes_hut::models::Vector3;
///
/// let mut force = Vector3::zero();
/// force += Vector3::new(3.0, 0.0, 4.0);
/// assert_eq!(force.magnitude(), 5.0);
/// assert_eq!(force * 2.0, Vector3::new(6.0, 0.0, 8.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    pub const fn zero() -> Self {
        Vector3 { x: 0.0, y: 0.0, z: 0.0 }
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude2().sqrt()
    }

    /// Squared magnitude, without the square root.
    pub fn magnitude2(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// # Errors
    ///
    /// Returns `BarnesHutError::ZeroLengthVector` when the vector has no direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_barnes_hut::models::Vector3;
    /// use rs_barnes_hut::utils::BarnesHutError;
    ///
    /// let unit = Vector3::new(0.0, 2.0, 0.0).normalize().unwrap();
    /// assert_eq!(unit, Vector3::new(0.0, 1.0, 0.0));
    ///
    /// assert_eq!(Vector3::zero().normalize(), Err(BarnesHutError::ZeroLengthVector));
    /// ```
    pub fn normalize(&self) -> Result<Vector3, BarnesHutError> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(BarnesHutError::ZeroLengthVector);
        }
        Ok(*self / magnitude)
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, other: Vector3) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, scalar: f64) -> Vector3 {
        Vector3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(self, scalar: f64) -> Vector3 {
        Vector3::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<{}, {}, {}>", self.x, self.y, self.z)
    }
}
