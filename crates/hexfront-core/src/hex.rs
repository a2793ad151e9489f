//! Cube coordinates and pointy-top hex math.
//!
//! A cube coordinate is a triple `(q, r, s)` with `q + r + s == 0`.
//! Conversion to and from the plane uses the pointy-top layout with a
//! packing factor that tightens spacing between neighbors.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{HEX_PACKING, SQRT_3};
use crate::error::HexError;

/// The six unit directions. Neighbor scans always follow this order.
pub const DIRECTIONS: [CubeCoordinate; 6] = [
    CubeCoordinate { q: 1, r: -1, s: 0 },
    CubeCoordinate { q: 1, r: 0, s: -1 },
    CubeCoordinate { q: 0, r: 1, s: -1 },
    CubeCoordinate { q: -1, r: 1, s: 0 },
    CubeCoordinate { q: -1, r: 0, s: 1 },
    CubeCoordinate { q: 0, r: -1, s: 1 },
];

/// A hex cell address. Fields are private so the invariant can't be broken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCube")]
pub struct CubeCoordinate {
    q: i32,
    r: i32,
    s: i32,
}

#[derive(Deserialize)]
struct RawCube {
    q: i32,
    r: i32,
    s: i32,
}

impl TryFrom<RawCube> for CubeCoordinate {
    type Error = HexError;

    fn try_from(raw: RawCube) -> Result<Self, Self::Error> {
        CubeCoordinate::new(raw.q, raw.r, raw.s)
    }
}

impl CubeCoordinate {
    pub const ORIGIN: CubeCoordinate = CubeCoordinate { q: 0, r: 0, s: 0 };

    /// Build a coordinate, rejecting triples that don't sum to zero.
    pub fn new(q: i32, r: i32, s: i32) -> Result<Self, HexError> {
        if q + r + s != 0 {
            return Err(HexError::InvalidCoordinate { q, r, s });
        }
        Ok(Self { q, r, s })
    }

    /// Build a coordinate from its axial part; `s` is derived.
    pub const fn axial(q: i32, r: i32) -> Self {
        Self { q, r, s: -q - r }
    }

    pub fn q(&self) -> i32 {
        self.q
    }

    pub fn r(&self) -> i32 {
        self.r
    }

    pub fn s(&self) -> i32 {
        self.s
    }

    /// Neighbor in `direction` (taken modulo 6).
    pub fn neighbor(&self, direction: usize) -> Self {
        *self + DIRECTIONS[direction % 6]
    }

    /// All six neighbors in direction order.
    pub fn neighbors(&self) -> [Self; 6] {
        DIRECTIONS.map(|d| *self + d)
    }

    /// Number of single-cell steps between two coordinates.
    pub fn distance(&self, other: &Self) -> i32 {
        ((self.q - other.q).abs() + (self.r - other.r).abs() + (self.s - other.s).abs()) / 2
    }

    /// Plane position of this cell's center for hexes of `size`.
    pub fn to_pixel(&self, size: f32) -> Vec2 {
        cube_to_pixel(*self, size)
    }
}

impl Add for CubeCoordinate {
    type Output = CubeCoordinate;

    fn add(self, rhs: CubeCoordinate) -> Self::Output {
        CubeCoordinate {
            q: self.q + rhs.q,
            r: self.r + rhs.r,
            s: self.s + rhs.s,
        }
    }
}

impl Sub for CubeCoordinate {
    type Output = CubeCoordinate;

    fn sub(self, rhs: CubeCoordinate) -> Self::Output {
        CubeCoordinate {
            q: self.q - rhs.q,
            r: self.r - rhs.r,
            s: self.s - rhs.s,
        }
    }
}

impl Ord for CubeCoordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.q, self.r, self.s).cmp(&(other.q, other.r, other.s))
    }
}

impl PartialOrd for CubeCoordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CubeCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s)
    }
}

/// Pointy-top layout: cube coordinate to plane position.
pub fn cube_to_pixel(cube: CubeCoordinate, size: f32) -> Vec2 {
    let q = cube.q as f32;
    let r = cube.r as f32;
    Vec2::new(
        size * SQRT_3 * (q + r / 2.0) * HEX_PACKING,
        size * 1.5 * r * HEX_PACKING,
    )
}

/// Pointy-top layout: plane position to the cube coordinate of the cell containing it.
pub fn pixel_to_cube(pixel: Vec2, size: f32) -> CubeCoordinate {
    let x = pixel.x as f64;
    let y = pixel.y as f64;
    let scale = size as f64 * HEX_PACKING as f64;
    let q = x / (3f64.sqrt() * scale) - y / (3.0 * scale);
    let r = y * 2.0 / (3.0 * scale);
    round(q, r, -q - r)
}

/// Round fractional cube components to the nearest valid coordinate.
///
/// The component with the largest rounding error is recomputed from the
/// other two so the result sums to zero exactly.
pub fn round(q0: f64, r0: f64, s0: f64) -> CubeCoordinate {
    let mut q = q0.round();
    let mut r = r0.round();
    let mut s = s0.round();

    let q_diff = (q - q0).abs();
    let r_diff = (r - r0).abs();
    let s_diff = (s - s0).abs();

    if q_diff > r_diff && q_diff > s_diff {
        q = -r - s;
    } else if r_diff > s_diff {
        r = -q - s;
    } else {
        s = -q - r;
    }

    CubeCoordinate {
        q: q as i32,
        r: r as i32,
        s: s as i32,
    }
}

/// Hex size bundled with the conversions that depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HexLayout {
    pub size: f32,
}

impl Default for HexLayout {
    fn default() -> Self {
        Self {
            size: crate::constants::HEX_SIZE,
        }
    }
}

impl HexLayout {
    pub fn new(size: f32) -> Self {
        Self { size }
    }

    pub fn to_pixel(&self, cube: CubeCoordinate) -> Vec2 {
        cube_to_pixel(cube, self.size)
    }

    pub fn to_cube(&self, pixel: Vec2) -> CubeCoordinate {
        pixel_to_cube(pixel, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_zero_sum() {
        assert_eq!(
            CubeCoordinate::new(1, 1, 1),
            Err(HexError::InvalidCoordinate { q: 1, r: 1, s: 1 })
        );
        assert!(CubeCoordinate::new(2, -3, 1).is_ok());
    }

    #[test]
    fn test_axial_derives_s() {
        let c = CubeCoordinate::axial(3, -5);
        assert_eq!(c.s(), 2);
        assert_eq!(c.q() + c.r() + c.s(), 0);
    }

    #[test]
    fn test_neighbor_distance_is_one() {
        let a = CubeCoordinate::axial(2, -1);
        for d in 0..6 {
            assert_eq!(a.distance(&a.neighbor(d)), 1, "direction {d}");
        }
        // Direction wraps modulo 6.
        assert_eq!(a.neighbor(7), a.neighbor(1));
    }

    #[test]
    fn test_distance_properties() {
        let a = CubeCoordinate::axial(-3, 1);
        let b = CubeCoordinate::axial(2, 2);
        assert_eq!(a.distance(&a), 0);
        assert_eq!(a.distance(&b), b.distance(&a));
        assert_eq!(a.distance(&b), 6);
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let mut coords = vec![
            CubeCoordinate::axial(1, -1),
            CubeCoordinate::axial(0, 1),
            CubeCoordinate::axial(0, -1),
            CubeCoordinate::axial(-1, 0),
        ];
        coords.sort();
        assert_eq!(
            coords,
            vec![
                CubeCoordinate::axial(-1, 0),
                CubeCoordinate::axial(0, -1),
                CubeCoordinate::axial(0, 1),
                CubeCoordinate::axial(1, -1),
            ]
        );
    }

    #[test]
    fn test_pixel_round_trip() {
        for q in -6..=6 {
            for r in -6..=6 {
                let c = CubeCoordinate::axial(q, r);
                let p = cube_to_pixel(c, 25.0);
                assert_eq!(pixel_to_cube(p, 25.0), c, "round trip failed for {c}");
            }
        }
    }

    #[test]
    fn test_pixel_near_center_rounds_to_cell() {
        let c = CubeCoordinate::axial(2, -3);
        let p = cube_to_pixel(c, 25.0) + Vec2::new(5.0, -4.0);
        assert_eq!(pixel_to_cube(p, 25.0), c);
    }

    #[test]
    fn test_round_restores_invariant() {
        let c = round(0.4, 0.4, -0.8);
        assert_eq!(c.q() + c.r() + c.s(), 0);
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        let ok: Result<CubeCoordinate, _> = serde_json::from_str(r#"{"q":1,"r":-1,"s":0}"#);
        assert_eq!(ok.unwrap(), CubeCoordinate::axial(1, -1));
        let bad: Result<CubeCoordinate, _> = serde_json::from_str(r#"{"q":1,"r":1,"s":0}"#);
        assert!(bad.is_err());
    }
}
