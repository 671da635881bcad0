//! Integer lattice coordinates and layout maps.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};

use indexmap::IndexMap;

use crate::id::ModuleId;

/// One of the three principal axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis.
    Y,
    /// The Z axis.
    Z,
}

impl Axis {
    /// All axes in `x, y, z` order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of the axis in `x, y, z` order.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// A cell of the integer lattice, or an offset between two cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord3 {
    /// X component.
    pub x: i32,
    /// Y component.
    pub y: i32,
    /// Z component.
    pub z: i32,
}

impl Coord3 {
    /// The origin / zero offset.
    pub const ZERO: Coord3 = Coord3 { x: 0, y: 0, z: 0 };

    /// The six unit offsets to face neighbours: `+x, -x, +y, -y, +z, -z`.
    pub const FACE_OFFSETS: [Coord3; 6] = [
        Coord3::new(1, 0, 0),
        Coord3::new(-1, 0, 0),
        Coord3::new(0, 1, 0),
        Coord3::new(0, -1, 0),
        Coord3::new(0, 0, 1),
        Coord3::new(0, 0, -1),
    ];

    /// Create a coordinate.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Create a coordinate from an `[x, y, z]` array.
    pub const fn from_array(v: [i32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    /// The components as `[x, y, z]`.
    pub const fn to_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// Component along `axis`.
    pub fn get(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Copy of `self` with the component along `axis` replaced.
    pub fn with(self, axis: Axis, value: i32) -> Self {
        let mut out = self;
        match axis {
            Axis::X => out.x = value,
            Axis::Y => out.y = value,
            Axis::Z => out.z = value,
        }
        out
    }

    /// Component-wise `self + rhs`, or `None` on overflow.
    pub fn checked_add(self, rhs: Coord3) -> Option<Coord3> {
        Some(Coord3::new(
            self.x.checked_add(rhs.x)?,
            self.y.checked_add(rhs.y)?,
            self.z.checked_add(rhs.z)?,
        ))
    }

    /// Component-wise `self - rhs`, or `None` on overflow.
    pub fn checked_sub(self, rhs: Coord3) -> Option<Coord3> {
        Some(Coord3::new(
            self.x.checked_sub(rhs.x)?,
            self.y.checked_sub(rhs.y)?,
            self.z.checked_sub(rhs.z)?,
        ))
    }

    /// Sum of absolute components.
    pub fn manhattan(self) -> i32 {
        self.x.abs() + self.y.abs() + self.z.abs()
    }

    /// Manhattan distance between two cells.
    pub fn manhattan_to(self, other: Coord3) -> i32 {
        (self - other).manhattan()
    }

    /// Whether the two cells share a face.
    pub fn is_face_adjacent(self, other: Coord3) -> bool {
        self.manhattan_to(other) == 1
    }
}

impl fmt::Display for Coord3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add for Coord3 {
    type Output = Coord3;
    fn add(self, rhs: Coord3) -> Coord3 {
        Coord3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Coord3 {
    fn add_assign(&mut self, rhs: Coord3) {
        *self = *self + rhs;
    }
}

impl Sub for Coord3 {
    type Output = Coord3;
    fn sub(self, rhs: Coord3) -> Coord3 {
        Coord3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Coord3 {
    type Output = Coord3;
    fn neg(self) -> Coord3 {
        Coord3::new(-self.x, -self.y, -self.z)
    }
}

impl From<(i32, i32, i32)> for Coord3 {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[i32; 3]> for Coord3 {
    fn from(v: [i32; 3]) -> Self {
        Self::from_array(v)
    }
}

/// A module-to-position map, iterated in insertion order.
///
/// Used for engine input (initial and goal layouts) and for snapshots.
pub type Layout = IndexMap<ModuleId, Coord3>;
