use std::fmt::Debug;

use rand::Rng;

use crate::models::Vector3;

/// Supplies the force returned when a query point sits exactly on the mass center of a
/// cell that aggregates several particles.
///
/// That configuration has no meaningful answer. The approximator gives up on the whole
/// query and returns whatever the filler produces, so the value only has to be bounded and
/// independent of position. Implementations must be shareable across threads because force
/// queries run in parallel.
pub trait FillerSource: Send + Sync + Debug {
    fn filler(&self) -> Vector3;
}

/// Random components drawn uniformly from `[0, scale)` using the thread-local generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomFiller {
    pub scale: f64,
}

impl RandomFiller {
    pub fn new(scale: f64) -> Self {
        RandomFiller { scale }
    }
}

impl Default for RandomFiller {
    fn default() -> Self {
        RandomFiller { scale: 1.0 }
    }
}

impl FillerSource for RandomFiller {
    fn filler(&self) -> Vector3 {
        let mut rng = rand::rng();
        Vector3::new(
            rng.random::<f64>() * self.scale,
            rng.random::<f64>() * self.scale,
            rng.random::<f64>() * self.scale,
        )
    }
}

/// Always returns the same vector. Makes degenerate queries reproducible.
///
/// # Examples
///
/// ```
/// use rs_barnes_hut::barnes_hut::{FillerSource, FixedFiller};
/// use rs_barnes_hut::models::Vector3;
///
/// let filler = FixedFiller(Vector3::new(1.0, 0.0, 0.0));
/// assert_eq!(filler.filler(), Vector3::new(1.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedFiller(pub Vector3);

impl FillerSource for FixedFiller {
    fn filler(&self) -> Vector3 {
        self.0
    }
}
