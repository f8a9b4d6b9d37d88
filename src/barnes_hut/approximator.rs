use std::collections::VecDeque;

use log::{debug, trace, warn};
use rayon::prelude::*;

use crate::barnes_hut::{BarnesHutCell, FillerSource, RandomFiller};
use crate::models::{direction, validate_mass, BoundingCube, Particle, Point3, Vector3};
use crate::utils::{ApproximatorConfig, BarnesHutError, BoundsPolicy};

/// Where an accepted particle ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The tree was empty and the particle became the root.
    Root,
    /// The particle got its own leaf cell `depth` levels below the root.
    NewLeaf { depth: usize },
    /// The particle landed exactly on an existing leaf particle `depth` levels below the root
    /// and was merged into it.
    Merged { depth: usize },
}

/// Barnes-Hut octree approximating the repulsive force a set of particles exerts on a point.
///
/// A layout pass calls [`reset`](Self::reset) with root bounds covering every particle,
/// inserts the particles one by one, then queries the force on each particle. The tree is
/// rebuilt from scratch whenever positions change; particles cannot be moved in place.
///
/// # Examples
///
/// ```
/// use rs_barnes_hut::barnes_hut::BarnesHutApproximator;
/// use rs_barnes_hut::models::Point3;
///
/// let mut tree = BarnesHutApproximator::new(Point3::origin(), 100.0, 0.5).unwrap();
/// tree.insert_particle(Point3::new(10.0, 0.0, 0.0), 1.0);
/// tree.insert_particle(Point3::new(-10.0, 0.0, 0.0), 1.0);
///
/// // A probe between the two particles is pushed equally hard from both sides along x,
/// // and away from both along y.
/// let force = tree.approximate_force(Point3::new(0.0, 5.0, 0.0), 1.0, 0.0001);
/// assert!(force.x.abs() < 1e-12);
/// assert!(force.y > 0.0);
///
/// // A probe to the right is pushed further right.
/// let force = tree.approximate_force(Point3::new(20.0, 0.0, 0.0), 1.0, 0.0001);
/// assert!(force.x > 0.0);
/// ```
#[derive(Debug)]
pub struct BarnesHutApproximator {
    root: Option<Box<BarnesHutCell>>,
    root_center: Point3,
    root_length: f64,
    theta: f64,
    bounds_policy: BoundsPolicy,
    filler: Box<dyn FillerSource>,
}

impl BarnesHutApproximator {
    /// Creates an empty tree over the cube `root_center ± root_length/2`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTheta` unless `theta` is a finite positive number, and the errors of
    /// [`reset`](Self::reset) for bad bounds.
    pub fn new(root_center: Point3, root_length: f64, theta: f64) -> Result<Self, BarnesHutError> {
        let config = ApproximatorConfig::default().with_theta(theta);
        Self::with_config(root_center, root_length, &config)
    }

    /// Creates an empty tree using the theta, bounds policy and filler scale of `config`.
    pub fn with_config(
        root_center: Point3,
        root_length: f64,
        config: &ApproximatorConfig,
    ) -> Result<Self, BarnesHutError> {
        config.validate()?;
        validate_bounds(root_center, root_length)?;
        Ok(Self {
            root: None,
            root_center,
            root_length,
            theta: config.theta,
            bounds_policy: config.bounds_policy,
            filler: Box::new(RandomFiller::new(config.filler_scale)),
        })
    }

    /// Replaces the source of the vector returned for degenerate queries.
    pub fn with_filler(mut self, filler: Box<dyn FillerSource>) -> Self {
        self.filler = filler;
        self
    }

    /// Drops the current tree and records new root bounds.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPosition` for a non-finite center and `InvalidRootLength` unless the
    /// length is a finite positive number. The tree is left untouched on error.
    pub fn reset(&mut self, root_center: Point3, root_length: f64) -> Result<(), BarnesHutError> {
        validate_bounds(root_center, root_length)?;
        trace!("Resetting Barnes-Hut tree to center {} and edge length {}", root_center, root_length);
        // Dropping the root releases every cell below it.
        self.root = None;
        self.root_center = root_center;
        self.root_length = root_length;
        Ok(())
    }

    pub fn root(&self) -> Option<&BarnesHutCell> {
        self.root.as_deref()
    }

    pub fn root_center(&self) -> Point3 {
        self.root_center
    }

    pub fn root_length(&self) -> f64 {
        self.root_length
    }

    pub fn bounds(&self) -> BoundingCube {
        BoundingCube::new(self.root_center, self.root_length)
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    pub fn bounds_policy(&self) -> BoundsPolicy {
        self.bounds_policy
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts one particle, silently dropping it if it cannot be placed.
    ///
    /// A particle outside the root cube (or with an invalid mass or position) is ignored and
    /// the tree stays exactly as it was. Callers are responsible for picking root bounds that
    /// cover their particles; see [`try_insert_particle`](Self::try_insert_particle) for the
    /// variant that reports the problem.
    pub fn insert_particle(&mut self, position: Point3, mass: f64) {
        if let Err(e) = self.try_insert_particle(position, mass) {
            debug!("Dropping particle at {} with mass {}: {}", position, mass, e);
        }
    }

    /// Inserts one particle and reports where it went.
    ///
    /// Every cell the particle passes through absorbs its mass into the aggregates and
    /// counts it as one more sub-particle. A particle landing exactly on a leaf's particle
    /// is merged into it: the masses add up and the leaf does not split. The same happens
    /// when a leaf is too small to be split any further.
    ///
    /// # Errors
    ///
    /// Returns `PositionOutOfBounds` for a position outside the root cube, `InvalidMass`
    /// for a non-positive or non-finite mass and `InvalidPosition` for a non-finite position.
    /// The tree is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_barnes_hut::barnes_hut::{BarnesHutApproximator, InsertOutcome};
    /// use rs_barnes_hut::models::Point3;
    /// use rs_barnes_hut::utils::BarnesHutError;
    ///
    /// let mut tree = BarnesHutApproximator::new(Point3::origin(), 10.0, 0.5).unwrap();
    /// assert_eq!(tree.try_insert_particle(Point3::new(1.0, 1.0, 1.0), 1.0), Ok(InsertOutcome::Root));
    /// assert_eq!(
    ///     tree.try_insert_particle(Point3::new(-1.0, 1.0, 1.0), 1.0),
    ///     Ok(InsertOutcome::NewLeaf { depth: 1 })
    /// );
    /// assert!(matches!(
    ///     tree.try_insert_particle(Point3::new(6.0, 0.0, 0.0), 1.0),
    ///     Err(BarnesHutError::PositionOutOfBounds { .. })
    /// ));
    /// ```
    pub fn try_insert_particle(&mut self, position: Point3, mass: f64) -> Result<InsertOutcome, BarnesHutError> {
        validate_mass(mass)?;
        if !position.is_finite() {
            return Err(BarnesHutError::InvalidPosition);
        }
        // Octants are picked by comparing against the cell center alone, so a position inside
        // the root always has a slot to descend into and one check covers every level. Doing it
        // up front keeps rejected particles from touching any aggregate.
        if !self.bounds().contains(position) {
            return Err(BarnesHutError::PositionOutOfBounds {
                position,
                center: self.root_center,
                length: self.root_length,
            });
        }

        let mut cell = match self.root.as_deref_mut() {
            Some(root) => root,
            None => {
                self.root = Some(Box::new(BarnesHutCell::new(
                    self.root_center,
                    self.root_length,
                    position,
                    mass,
                )));
                return Ok(InsertOutcome::Root);
            }
        };

        let mut depth = 0;
        loop {
            let octant = cell.octant_for(position);

            if cell.subparticle_count == 0 {
                // Each split halves the edge length, so descent ends once the particles part or
                // the edge is too small to move a child center. Past that point the two cannot
                // be told apart and act as one particle with the summed mass.
                if position == cell.mass_center || cell.length() / 4.0 == 0.0 {
                    cell.mass_total += mass;
                    return Ok(InsertOutcome::Merged { depth });
                }
                cell.transplant_seed();
            }

            cell.absorb(position, mass);

            match cell.children[octant.index()] {
                Some(ref mut child) => {
                    cell.subparticle_count += 1;
                    cell = &mut **child;
                    depth += 1;
                }
                None => {
                    cell.add_leaf_cell(octant, mass, position);
                    return Ok(InsertOutcome::NewLeaf { depth: depth + 1 });
                }
            }
        }
    }

    /// Inserts a particle according to the configured [`BoundsPolicy`].
    ///
    /// Returns `Ok(None)` when a lenient tree drops an out-of-bounds particle.
    ///
    /// # Errors
    ///
    /// A strict tree returns `PositionOutOfBounds`. Invalid masses and positions are
    /// reported under either policy.
    pub fn insert(&mut self, particle: Particle) -> Result<Option<InsertOutcome>, BarnesHutError> {
        match self.try_insert_particle(particle.position, particle.mass) {
            Ok(outcome) => Ok(Some(outcome)),
            Err(e @ BarnesHutError::PositionOutOfBounds { .. }) => match self.bounds_policy {
                BoundsPolicy::Lenient => {
                    debug!("Dropping out-of-bounds particle: {}", e);
                    Ok(None)
                }
                BoundsPolicy::Strict => Err(e),
            },
            Err(e) => Err(e),
        }
    }

    /// Inserts particles in the given order. Returns how many were placed.
    pub fn insert_particles(&mut self, particles: &[Particle]) -> Result<usize, BarnesHutError> {
        let mut inserted = 0;
        for particle in particles {
            if self.insert(*particle)?.is_some() {
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    /// Approximates the force every inserted particle exerts on a particle of `mass` at
    /// `position`.
    ///
    /// Cells are visited breadth first from the root. A cell whose edge length over its
    /// distance to `position` is below `theta` (or that holds a single particle) acts as one
    /// point mass at its mass center, contributing
    /// `(position - mass_center) * mass * mass_total / distance²`. The displacement is not
    /// normalized, so contributions fall off with the distance rather than its square, and
    /// point away from the mass (repulsion). Larger cells are opened and their children
    /// queued.
    ///
    /// A leaf sitting exactly on `position` is the query particle itself and contributes
    /// nothing. If instead the mass center of a multi-particle cell coincides with
    /// `position`, there is no usable direction: the whole query returns the filler vector.
    ///
    /// An empty tree exerts no force. A non-positive `theta` never accepts an internal cell,
    /// which turns the traversal into the exact pairwise sum.
    pub fn approximate_force(&self, position: Point3, mass: f64, theta: f64) -> Vector3 {
        let mut force = Vector3::zero();
        let root = match self.root.as_deref() {
            Some(root) => root,
            None => return force,
        };

        let theta2 = theta * theta;
        let mut cells_to_check: VecDeque<&BarnesHutCell> = VecDeque::new();
        cells_to_check.push_back(root);

        while let Some(cell) = cells_to_check.pop_front() {
            let d2 = position.distance2(cell.mass_center);
            if d2 == 0.0 {
                if cell.subparticle_count == 0 {
                    continue;
                }
                warn!(
                    "Query at {} coincides with the mass center of {} particles, returning filler force",
                    position, cell.subparticle_count
                );
                return self.filler.filler();
            }

            let length = cell.length();
            if length * length / d2 < theta2 || cell.subparticle_count == 0 {
                force += direction(position, cell.mass_center) * (mass * cell.mass_total / d2);
            } else {
                cells_to_check.extend(cell.children().map(|(_, child)| child));
            }
        }

        force
    }

    /// [`approximate_force`](Self::approximate_force) with the tree's own theta.
    pub fn approximate_force_default(&self, position: Point3, mass: f64) -> Vector3 {
        self.approximate_force(position, mass, self.theta)
    }

    /// Approximates the force on every particle of `particles`, in parallel.
    ///
    /// Queries only read the tree, so they run independently on the rayon pool.
    pub fn approximate_forces(&self, particles: &[Particle]) -> Vec<Vector3> {
        particles
            .par_iter()
            .map(|p| self.approximate_force(p.position, p.mass, self.theta))
            .collect()
    }
}

/// Exact pairwise sum of the same force term [`BarnesHutApproximator::approximate_force`]
/// approximates. Particles sitting exactly on `position` are skipped.
///
/// # Examples
///
/// ```
/// use rs_barnes_hut::barnes_hut::direct_force;
/// use rs_barnes_hut::models::{Particle, Point3, Vector3};
///
/// let particles = [Particle { position: Point3::new(2.0, 0.0, 0.0), mass: 3.0 }];
/// // (0 - 2) * 1 * 3 / 4
/// assert_eq!(direct_force(&particles, Point3::origin(), 1.0), Vector3::new(-1.5, 0.0, 0.0));
/// ```
pub fn direct_force(particles: &[Particle], position: Point3, mass: f64) -> Vector3 {
    let mut force = Vector3::zero();
    for p in particles {
        let d2 = position.distance2(p.position);
        if d2 == 0.0 {
            continue;
        }
        force += direction(position, p.position) * (mass * p.mass / d2);
    }
    force
}

fn validate_bounds(root_center: Point3, root_length: f64) -> Result<(), BarnesHutError> {
    if !root_center.is_finite() {
        return Err(BarnesHutError::InvalidPosition);
    }
    if !root_length.is_finite() || root_length <= 0.0 {
        return Err(BarnesHutError::InvalidRootLength(root_length));
    }
    Ok(())
}
