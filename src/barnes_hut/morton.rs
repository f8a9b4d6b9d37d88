use log::debug;
use rayon::prelude::*;

use crate::barnes_hut::BarnesHutApproximator;
use crate::models::{validate_mass, BoundingCube, Particle, Point3};
use crate::utils::{BarnesHutError, BoundsPolicy};

/// Bits of resolution per axis. Three axes fit in the low 63 bits of a `u64`.
pub const MORTON_BITS_PER_AXIS: u32 = 21;

const MORTON_AXIS_MAX: u64 = (1 << MORTON_BITS_PER_AXIS) - 1;

/// Z-order key of `position` inside `bounds`.
///
/// Bits are interleaved x, y, z from the most significant end, matching the octant bit order
/// of the tree, so the top three bits are the root octant, the next three the octant one
/// level down, and so on. Positions outside `bounds` are clamped to its faces.
///
/// # Examples
///
/// ```
/// use rs_barnes_hut::barnes_hut::morton_code;
/// use rs_barnes_hut::models::{BoundingCube, Point3};
///
/// let bounds = BoundingCube::new(Point3::origin(), 2.0);
/// assert_eq!(morton_code(&bounds, Point3::new(-1.0, -1.0, -1.0)), 0);
/// // Top octant bits: x positive, y negative, z positive.
/// assert_eq!(morton_code(&bounds, Point3::new(0.5, -0.5, 0.5)) >> 60, 0b101);
/// ```
pub fn morton_code(bounds: &BoundingCube, position: Point3) -> u64 {
    let min = bounds.min();
    let quantize = |value: f64, lower: f64| -> u64 {
        let unit = ((value - lower) / bounds.length).clamp(0.0, 1.0);
        ((unit * (1u64 << MORTON_BITS_PER_AXIS) as f64) as u64).min(MORTON_AXIS_MAX)
    };

    let x = spread_bits(quantize(position.x, min.x));
    let y = spread_bits(quantize(position.y, min.y));
    let z = spread_bits(quantize(position.z, min.z));
    (x << 2) | (y << 1) | z
}

/// Spreads the low 21 bits of `v` so that two zero bits separate each of them.
fn spread_bits(v: u64) -> u64 {
    let mut x = v & MORTON_AXIS_MAX;
    x = (x | x << 32) & 0x001f_0000_0000_ffff;
    x = (x | x << 16) & 0x001f_0000_ff00_00ff;
    x = (x | x << 8) & 0x100f_00f0_0f00_f00f;
    x = (x | x << 4) & 0x10c3_0c30_c30c_30c3;
    x = (x | x << 2) & 0x1249_2492_4924_9249;
    x
}

impl BarnesHutApproximator {
    /// Inserts a batch of particles in Morton order.
    ///
    /// Sorting along the Z-order curve makes consecutive insertions walk mostly the same
    /// root-to-leaf paths. The resulting tree has the same cells as one built in any other
    /// order, and the same aggregates up to rounding.
    ///
    /// Every particle is validated before the first insertion, so an error leaves the tree
    /// unchanged. Out-of-bounds particles follow the tree's [`BoundsPolicy`]. Returns how
    /// many particles were inserted.
    ///
    /// # Errors
    ///
    /// `InvalidMass` or `InvalidPosition` for a bad particle, and `PositionOutOfBounds` for
    /// a particle outside a strict tree's root cube.
    pub fn insert_particles_morton(&mut self, particles: &[Particle]) -> Result<usize, BarnesHutError> {
        let bounds = self.bounds();
        for p in particles {
            validate_mass(p.mass)?;
            if !p.position.is_finite() {
                return Err(BarnesHutError::InvalidPosition);
            }
            if self.bounds_policy() == BoundsPolicy::Strict && !bounds.contains(p.position) {
                return Err(BarnesHutError::PositionOutOfBounds {
                    position: p.position,
                    center: bounds.center,
                    length: bounds.length,
                });
            }
        }

        let mut keyed: Vec<(u64, usize)> = particles
            .par_iter()
            .enumerate()
            .filter(|(_, p)| bounds.contains(p.position))
            .map(|(i, p)| (morton_code(&bounds, p.position), i))
            .collect();
        keyed.par_sort_unstable();

        let dropped = particles.len() - keyed.len();
        if dropped > 0 {
            debug!("Dropping {} out-of-bounds particles from bulk insertion", dropped);
        }

        for &(_, i) in &keyed {
            let p = particles[i];
            self.try_insert_particle(p.position, p.mass)?;
        }
        Ok(keyed.len())
    }
}
