use crate::models::{BoundingCube, Octant, Point3};

/// One cube of the octree, aggregating the mass of everything inserted beneath it.
///
/// A cell is never empty: it is created holding a single seed particle. While
/// `subparticle_count` is zero the seed sits in the cell itself and the cell has no
/// children. As soon as a second, distinct particle arrives, the seed is pushed down into
/// the child for its octant and the cell only keeps aggregates (total mass and
/// mass-weighted center).
///
/// Children are owned through `Box`, so dropping a cell drops its whole subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct BarnesHutCell {
    center: Point3,
    length: f64,
    pub(crate) mass_center: Point3,
    pub(crate) mass_total: f64,
    pub(crate) subparticle_count: usize,
    pub(crate) children: [Option<Box<BarnesHutCell>>; 8],
}

impl BarnesHutCell {
    /// Creates a cell covering the cube `center ± length/2`, seeded with one particle.
    pub fn new(center: Point3, length: f64, particle_position: Point3, particle_mass: f64) -> Self {
        BarnesHutCell {
            center,
            length,
            mass_center: particle_position,
            mass_total: particle_mass,
            subparticle_count: 0,
            children: Default::default(),
        }
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    /// Edge length of the cube.
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn bounds(&self) -> BoundingCube {
        BoundingCube::new(self.center, self.length)
    }

    pub fn mass_total(&self) -> f64 {
        self.mass_total
    }

    pub fn mass_center(&self) -> Point3 {
        self.mass_center
    }

    /// Number of particles that reached this cell's children, the transplanted seed
    /// included. Zero means the cell still holds its seed directly.
    pub fn subparticle_count(&self) -> usize {
        self.subparticle_count
    }

    pub fn is_leaf(&self) -> bool {
        self.subparticle_count == 0
    }

    pub fn child(&self, octant: Octant) -> Option<&BarnesHutCell> {
        self.children[octant.index()].as_deref()
    }

    /// Present children, paired with their octant.
    pub fn children(&self) -> impl Iterator<Item = (Octant, &BarnesHutCell)> + '_ {
        Octant::ALL
            .iter()
            .filter_map(move |&octant| self.child(octant).map(|child| (octant, child)))
    }

    /// Number of cells in this subtree, this one included.
    pub fn cell_count(&self) -> usize {
        1 + self.children().map(|(_, child)| child.cell_count()).sum::<usize>()
    }

    /// Depth of this subtree. A lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children().map(|(_, child)| child.depth()).max().unwrap_or(0)
    }

    /// The octant `position` falls into around this cell's center.
    pub(crate) fn octant_for(&self, position: Point3) -> Octant {
        position.octant_of(self.center)
    }

    /// Materializes the child for `octant`, seeded with one particle.
    ///
    /// The child covers the octant's sub-cube of this cell. Counts the particle as one more
    /// below this cell.
    pub(crate) fn add_leaf_cell(&mut self, octant: Octant, mass: f64, position: Point3) {
        let child = self.bounds().octant_cube(octant);

        debug_assert!(self.children[octant.index()].is_none(), "octant {:?} already occupied", octant);
        self.children[octant.index()] = Some(Box::new(BarnesHutCell::new(
            child.center,
            child.length,
            position,
            mass,
        )));
        self.subparticle_count += 1;
    }

    /// Pushes the seed particle down into the child for its own octant.
    pub(crate) fn transplant_seed(&mut self) {
        let seed_octant = self.octant_for(self.mass_center);
        self.add_leaf_cell(seed_octant, self.mass_total, self.mass_center);
    }

    /// Folds one more particle into the aggregates.
    pub(crate) fn absorb(&mut self, position: Point3, mass: f64) {
        let total = self.mass_total + mass;
        self.mass_center = (self.mass_center * self.mass_total + (position * mass).to_vector()) / total;
        self.mass_total = total;
    }
}
