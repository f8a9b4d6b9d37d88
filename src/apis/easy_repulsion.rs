// src/apis/easy_repulsion.rs

use log::debug;
use rayon::prelude::*;

use crate::barnes_hut::BarnesHutApproximator;
use crate::models::{BoundingCube, Particle, Point3, Vector3};
use crate::utils::{ApproximatorConfig, BarnesHutError};

/// A simplified interface for one repulsion pass of a force-directed layout.
///
/// Each call derives root bounds from the particles, builds a fresh tree and queries the
/// force on every particle. Callers that want to reuse the tree for extra queries can get
/// it from [`build_tree`](Self::build_tree).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EasyRepulsion {
    config: ApproximatorConfig,
}

impl EasyRepulsion {
    /// Creates a new `EasyRepulsion` with the default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_barnes_hut::apis::easy_repulsion::EasyRepulsion;
    ///
    /// let repulsion = EasyRepulsion::new();
    /// assert_eq!(repulsion.config().theta, 0.5);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `EasyRepulsion` with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns the error of [`ApproximatorConfig::validate`] for an unusable configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_barnes_hut::apis::easy_repulsion::EasyRepulsion;
    /// use rs_barnes_hut::utils::ApproximatorConfig;
    ///
    /// let precise = EasyRepulsion::with_config(ApproximatorConfig::new(Some(0.2), None, None, None));
    /// assert!(precise.is_ok());
    ///
    /// let broken = EasyRepulsion::with_config(ApproximatorConfig::new(Some(-1.0), None, None, None));
    /// assert!(broken.is_err());
    /// ```
    pub fn with_config(config: ApproximatorConfig) -> Result<Self, BarnesHutError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ApproximatorConfig {
        &self.config
    }

    /// Builds a tree holding every particle.
    ///
    /// The root cube is the padded bounding cube of the particle positions, so no particle
    /// is dropped for lying outside it.
    ///
    /// # Errors
    ///
    /// Returns `EmptyParticleSet` for no particles, and `InvalidMass` or `InvalidPosition`
    /// if any particle is invalid.
    pub fn build_tree(&self, particles: &[Particle]) -> Result<BarnesHutApproximator, BarnesHutError> {
        let bounds = BoundingCube::enclosing(particles.iter().map(|p| p.position), self.config.bounds_padding)?;
        let mut tree = BarnesHutApproximator::with_config(bounds.center, bounds.length, &self.config)?;

        #[cfg(feature = "bulk-build")]
        let inserted = tree.insert_particles_morton(particles)?;
        #[cfg(not(feature = "bulk-build"))]
        let inserted = tree.insert_particles(particles)?;

        debug!(
            "Built Barnes-Hut tree over {} particles, center {} and edge length {}",
            inserted, bounds.center, bounds.length
        );
        Ok(tree)
    }

    /// Approximates the repulsive force on every particle from all the others.
    ///
    /// # Returns
    ///
    /// One force per particle, in input order. No particles give no forces.
    ///
    /// # Errors
    ///
    /// The errors of [`build_tree`](Self::build_tree), except `EmptyParticleSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_barnes_hut::apis::easy_repulsion::EasyRepulsion;
    /// use rs_barnes_hut::models::{Particle, Point3};
    ///
    /// let particles = vec![
    ///     Particle::new(Point3::new(-1.0, 0.0, 0.0), 1.0).unwrap(),
    ///     Particle::new(Point3::new(1.0, 0.0, 0.0), 1.0).unwrap(),
    /// ];
    /// let forces = EasyRepulsion::new().compute_forces(&particles).unwrap();
    ///
    /// // The two particles push each other apart.
    /// assert!(forces[0].x < 0.0);
    /// assert!(forces[1].x > 0.0);
    /// ```
    pub fn compute_forces(&self, particles: &[Particle]) -> Result<Vec<Vector3>, BarnesHutError> {
        if particles.is_empty() {
            return Ok(Vec::new());
        }
        let tree = self.build_tree(particles)?;
        Ok(tree.approximate_forces(particles))
    }

    /// [`compute_forces`](Self::compute_forces) on flat arrays, as handed over by bindings.
    ///
    /// `positions` holds `x, y, z` for each particle in turn and `masses` one mass per
    /// particle. The result is flattened the same way as `positions`.
    ///
    /// # Errors
    ///
    /// Returns `MismatchedInput` unless `positions` holds exactly three values per mass,
    /// plus the errors of [`compute_forces`](Self::compute_forces).
    pub fn compute_forces_flat(&self, positions: &[f64], masses: &[f64]) -> Result<Vec<f64>, BarnesHutError> {
        if positions.len() != masses.len() * 3 {
            return Err(BarnesHutError::MismatchedInput {
                positions: positions.len(),
                masses: masses.len(),
            });
        }

        let particles: Vec<Particle> = positions
            .par_chunks_exact(3)
            .zip(masses.par_iter())
            .map(|(xyz, &mass)| Particle {
                position: Point3::new(xyz[0], xyz[1], xyz[2]),
                mass,
            })
            .collect();

        let forces = self.compute_forces(&particles)?;
        Ok(forces.iter().flat_map(|f| [f.x, f.y, f.z]).collect())
    }
}
