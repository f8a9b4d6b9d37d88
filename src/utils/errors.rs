use std::fmt;
use std::error::Error;

use crate::models::Point3;

/// Represents errors that can occur while building or querying a Barnes-Hut tree.
#[derive(Debug, Clone, PartialEq)]
pub enum BarnesHutError {
    /// A particle lies outside the root cube of the tree.
    PositionOutOfBounds {
        position: Point3,
        center: Point3,
        length: f64,
    },
    /// Indicates an invalid mass value (negative, zero or not finite).
    InvalidMass(f64),
    /// Indicates a position with a NaN or infinite component.
    InvalidPosition,
    /// Indicates an acceptance threshold that is not a finite positive number.
    InvalidTheta(f64),
    /// Indicates a root cube edge length that is not a finite positive number.
    InvalidRootLength(f64),
    /// Indicates a filler scale that is negative or not finite.
    InvalidFillerScale(f64),
    /// Indicates an attempt to normalize a vector of zero magnitude.
    ZeroLengthVector,
    /// Indicates that bounds were requested for an empty set of particles.
    EmptyParticleSet,
    /// Flat coordinate and mass inputs disagree on the number of particles.
    MismatchedInput { positions: usize, masses: usize },
}

impl fmt::Display for BarnesHutError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BarnesHutError::PositionOutOfBounds { position, center, length } => write!(
                f,
                "Position {} is outside the cube centered at {} with edge length {}",
                position, center, length
            ),
            BarnesHutError::InvalidMass(mass) => write!(f, "Invalid mass value: {}", mass),
            BarnesHutError::InvalidPosition => write!(f, "Position has a non-finite component"),
            BarnesHutError::InvalidTheta(theta) => write!(f, "Invalid theta value: {}", theta),
            BarnesHutError::InvalidRootLength(length) => write!(f, "Invalid root edge length: {}", length),
            BarnesHutError::InvalidFillerScale(scale) => write!(f, "Invalid filler scale: {}", scale),
            BarnesHutError::ZeroLengthVector => write!(f, "Cannot normalize a zero-length vector"),
            BarnesHutError::EmptyParticleSet => write!(f, "No particles to bound"),
            BarnesHutError::MismatchedInput { positions, masses } => write!(
                f,
                "Got {} positions but {} masses",
                positions, masses
            ),
        }
    }
}


impl Error for BarnesHutError {}
