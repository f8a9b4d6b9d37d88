/// One of the eight regions a cube is split into around its center.
///
/// The octant is stored as three bits, one per axis, set when the point lies on the
/// positive side (or exactly on the dividing plane) of that axis. The bit pattern doubles
/// as the child slot index of a cell.
///
/// # Examples
///
/// ```
/// use rs_barnes_hut::models::Octant;
///
/// let octant = Octant::new(true, false, true);
/// assert_eq!(octant.index(), 0b101);
/// assert_eq!(octant.signs(), (1.0, -1.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Octant(u8);

const X_POSITIVE: u8 = 0b100;
const Y_POSITIVE: u8 = 0b010;
const Z_POSITIVE: u8 = 0b001;

impl Octant {
    pub const ALL: [Octant; 8] = [
        Octant(0),
        Octant(1),
        Octant(2),
        Octant(3),
        Octant(4),
        Octant(5),
        Octant(6),
        Octant(7),
    ];

    pub fn new(x_positive: bool, y_positive: bool, z_positive: bool) -> Self {
        let mut bits = 0;
        if x_positive {
            bits |= X_POSITIVE;
        }
        if y_positive {
            bits |= Y_POSITIVE;
        }
        if z_positive {
            bits |= Z_POSITIVE;
        }
        Octant(bits)
    }

    /// Classifies an offset from a reference point, checking x, then y, then z.
    /// A zero offset on an axis counts as positive.
    pub fn from_offset(dx: f64, dy: f64, dz: f64) -> Self {
        Self::new(dx >= 0.0, dy >= 0.0, dz >= 0.0)
    }

    /// Child slot index in `0..8`.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn x_positive(self) -> bool {
        self.0 & X_POSITIVE != 0
    }

    pub fn y_positive(self) -> bool {
        self.0 & Y_POSITIVE != 0
    }

    pub fn z_positive(self) -> bool {
        self.0 & Z_POSITIVE != 0
    }

    /// The ±1 per axis used to move from a cube center to the center of this octant.
    pub fn signs(self) -> (f64, f64, f64) {
        let sign = |positive: bool| if positive { 1.0 } else { -1.0 };
        (sign(self.x_positive()), sign(self.y_positive()), sign(self.z_positive()))
    }
}
