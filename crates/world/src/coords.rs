//! Map coordinates
//!
//! World coordinates are measured in map units: one tile is 32 units wide and
//! one land step is 8 units high (16 units per "big" height step).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};

/// Size of one tile edge in world units
pub const COORDS_XY_STEP: i32 = 32;

/// Height of one land step in world units
pub const COORDS_Z_STEP: i32 = 8;

/// One of the four cardinal rotations (0..=3)
pub type Direction = u8;

/// Number of cardinal directions
pub const NUM_DIRECTIONS: u8 = 4;

/// All four directions in order
pub const ALL_DIRECTIONS: [Direction; 4] = [0, 1, 2, 3];

/// Offset to the neighbouring tile in each direction
pub const COORDS_DIRECTION_DELTA: [CoordsXY; 4] = [
    CoordsXY::new(-COORDS_XY_STEP, 0),
    CoordsXY::new(0, COORDS_XY_STEP),
    CoordsXY::new(COORDS_XY_STEP, 0),
    CoordsXY::new(0, -COORDS_XY_STEP),
];

/// Rotate a direction by a number of quarter turns
pub const fn direction_add(direction: Direction, quarter_turns: u8) -> Direction {
    (direction + quarter_turns) & 3
}

/// The opposite direction
pub const fn direction_reverse(direction: Direction) -> Direction {
    direction ^ 2
}

/// Mirror a direction across the x axis
pub const fn direction_flip_x_axis(direction: Direction) -> Direction {
    (direction * 3) % 4
}

/// Check that a raw value is a valid direction
pub const fn direction_valid(direction: u8) -> bool {
    direction < NUM_DIRECTIONS
}

/// A 2D world position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoordsXY {
    pub x: i32,
    pub y: i32,
}

impl CoordsXY {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Rotate the coordinates around the origin by a number of quarter turns
    pub const fn rotate(self, direction: Direction) -> Self {
        match direction & 3 {
            0 => Self::new(self.x, self.y),
            1 => Self::new(self.y, -self.x),
            2 => Self::new(-self.x, -self.y),
            _ => Self::new(-self.y, self.x),
        }
    }

    /// Round down to the containing tile's corner
    pub const fn to_tile_start(self) -> Self {
        Self::new(
            self.x.div_euclid(COORDS_XY_STEP) * COORDS_XY_STEP,
            self.y.div_euclid(COORDS_XY_STEP) * COORDS_XY_STEP,
        )
    }

    pub const fn to_tile(self) -> TileCoordsXY {
        TileCoordsXY::new(self.x.div_euclid(COORDS_XY_STEP), self.y.div_euclid(COORDS_XY_STEP))
    }

    pub const fn with_z(self, z: i32) -> CoordsXYZ {
        CoordsXYZ::new(self.x, self.y, z)
    }
}

impl Add for CoordsXY {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for CoordsXY {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for CoordsXY {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for CoordsXY {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl fmt::Display for CoordsXY {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A 3D world position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoordsXYZ {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl CoordsXYZ {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub const fn xy(self) -> CoordsXY {
        CoordsXY::new(self.x, self.y)
    }

    /// Rotate the horizontal part, keeping z
    pub const fn rotate(self, direction: Direction) -> Self {
        let xy = self.xy().rotate(direction);
        Self::new(xy.x, xy.y, self.z)
    }
}

impl Add for CoordsXYZ {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl fmt::Display for CoordsXYZ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A tile position (one unit per tile)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoordsXY {
    pub x: i32,
    pub y: i32,
}

impl TileCoordsXY {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn to_coords(self) -> CoordsXY {
        CoordsXY::new(self.x * COORDS_XY_STEP, self.y * COORDS_XY_STEP)
    }
}

impl fmt::Display for TileCoordsXY {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// A tile position with a land height and facing, used for station entrances and exits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoordsXYZD {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub direction: Direction,
}

impl TileCoordsXYZD {
    pub const fn new(x: i32, y: i32, z: i32, direction: Direction) -> Self {
        Self { x, y, z, direction }
    }

    pub const fn xy(self) -> TileCoordsXY {
        TileCoordsXY::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_quarter_turns() {
        let c = CoordsXY::new(3, 5);
        assert_eq!(c.rotate(0), CoordsXY::new(3, 5));
        assert_eq!(c.rotate(1), CoordsXY::new(5, -3));
        assert_eq!(c.rotate(2), CoordsXY::new(-3, -5));
        assert_eq!(c.rotate(3), CoordsXY::new(-5, 3));
        assert_eq!(c.rotate(4), c);
    }

    #[test]
    fn test_direction_helpers() {
        assert_eq!(direction_add(3, 1), 0);
        assert_eq!(direction_reverse(1), 3);
        assert_eq!(direction_flip_x_axis(0), 0);
        assert_eq!(direction_flip_x_axis(1), 3);
        assert_eq!(direction_flip_x_axis(3), 1);
        assert!(direction_valid(3));
        assert!(!direction_valid(4));
    }

    #[test]
    fn test_tile_conversion() {
        let c = CoordsXY::new(70, -1);
        assert_eq!(c.to_tile(), TileCoordsXY::new(2, -1));
        assert_eq!(c.to_tile_start(), CoordsXY::new(64, -32));
        assert_eq!(TileCoordsXY::new(2, 3).to_coords(), CoordsXY::new(64, 96));
    }

    #[test]
    fn test_direction_delta_walks_round() {
        let mut pos = CoordsXY::new(64, 64);
        for delta in COORDS_DIRECTION_DELTA {
            pos += delta;
        }
        assert_eq!(pos, CoordsXY::new(64, 64));
    }
}
