use crate::models::Point3;
use crate::utils::BarnesHutError;

/// A point mass. Particles carry no identity beyond their values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Point3,
    pub mass: f64,
}

impl Particle {
    /// Creates a new particle.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMass` if `mass` is not a finite positive number and
    /// `InvalidPosition` if any coordinate is NaN or infinite.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_barnes_hut::models::{Particle, Point3};
    ///
    /// let particle = Particle::new(Point3::new(1.0, 0.0, 0.0), 2.0).expect("valid particle");
    /// assert_eq!(particle.mass, 2.0);
    /// assert!(Particle::new(Point3::origin(), 0.0).is_err());
    /// ```
    pub fn new(position: Point3, mass: f64) -> Result<Self, BarnesHutError> {
        validate_mass(mass)?;
        if !position.is_finite() {
            return Err(BarnesHutError::InvalidPosition);
        }
        Ok(Particle { position, mass })
    }
}

pub(crate) fn validate_mass(mass: f64) -> Result<(), BarnesHutError> {
    if !mass.is_finite() || mass <= 0.0 {
        return Err(BarnesHutError::InvalidMass(mass));
    }
    Ok(())
}
