//! # Integer Rotation Algebra
//!
//! Every rotation a cube can undergo is an exact multiple of 90 degrees
//! about a world axis. The rotation group of the cube has 24 elements, all
//! of them signed permutation matrices, so the entire kinematics pipeline
//! works in integer arithmetic: no quaternions, no epsilon, no drift.
//!
//! ## Determinism Guarantees
//!
//! - Integer arithmetic only (workspace denies `float_arithmetic`)
//! - Rotating a lattice vector is exact; no rounding step exists
//! - Every value constructible through this module has determinant +1

use serde::{Deserialize, Serialize};

// =============================================================================
// AXES
// =============================================================================

/// A world coordinate axis (right-handed, Y up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// The unit vector along this axis.
    #[must_use]
    pub const fn unit(self) -> IVec3 {
        match self {
            Axis::X => IVec3::new(1, 0, 0),
            Axis::Y => IVec3::new(0, 1, 0),
            Axis::Z => IVec3::new(0, 0, 1),
        }
    }
}

/// The sign of a quarter turn about an axis, right-hand rule.
///
/// `Plus90` is a counter-clockwise quarter turn when looking down the axis
/// toward the origin; `Minus90` is the opposite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Spin {
    Plus90,
    Minus90,
}

impl Spin {
    /// The opposite spin.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Spin::Plus90 => Spin::Minus90,
            Spin::Minus90 => Spin::Plus90,
        }
    }
}

// =============================================================================
// INTEGER VECTOR
// =============================================================================

/// An integer 3-vector. Cubie positions use coordinates in `{-1, 0, 1}`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct IVec3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl IVec3 {
    /// The zero vector.
    pub const ZERO: IVec3 = IVec3::new(0, 0, 0);

    /// Create a new vector.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Component on the given axis.
    #[must_use]
    pub const fn component(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// True if every coordinate is in `{-1, 0, 1}`.
    #[must_use]
    pub const fn is_lattice(self) -> bool {
        self.x.abs() <= 1 && self.y.abs() <= 1 && self.z.abs() <= 1
    }
}

// =============================================================================
// ROTATION MATRIX
// =============================================================================

/// A 3x3 integer rotation matrix.
///
/// Constructed only from the identity and signed quarter turns, so every
/// reachable value is one of the 24 proper rotations of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rot3 {
    /// Row-major entries; each entry is -1, 0, or 1.
    m: [[i32; 3]; 3],
}

impl Default for Rot3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Rot3 {
    /// The identity rotation.
    pub const IDENTITY: Rot3 = Rot3 {
        m: [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
    };

    /// A signed 90-degree rotation about a world axis.
    ///
    /// Derived from the Rodrigues formula at theta = +/-90 degrees, where
    /// cos vanishes and sin is +/-1, leaving a signed permutation.
    #[must_use]
    pub const fn quarter_turn(axis: Axis, spin: Spin) -> Self {
        let m = match (axis, spin) {
            // (x, y, z) -> (x, -z, y)
            (Axis::X, Spin::Plus90) => [[1, 0, 0], [0, 0, -1], [0, 1, 0]],
            // (x, y, z) -> (x, z, -y)
            (Axis::X, Spin::Minus90) => [[1, 0, 0], [0, 0, 1], [0, -1, 0]],
            // (x, y, z) -> (z, y, -x)
            (Axis::Y, Spin::Plus90) => [[0, 0, 1], [0, 1, 0], [-1, 0, 0]],
            // (x, y, z) -> (-z, y, x)
            (Axis::Y, Spin::Minus90) => [[0, 0, -1], [0, 1, 0], [1, 0, 0]],
            // (x, y, z) -> (-y, x, z)
            (Axis::Z, Spin::Plus90) => [[0, -1, 0], [1, 0, 0], [0, 0, 1]],
            // (x, y, z) -> (y, -x, z)
            (Axis::Z, Spin::Minus90) => [[0, 1, 0], [-1, 0, 0], [0, 0, 1]],
        };
        Rot3 { m }
    }

    /// Matrix product `self * other`.
    ///
    /// Applying the result is equivalent to applying `other` first, then
    /// `self`. A move therefore premultiplies a cubie's orientation: the
    /// new rotation happens in the world frame, after everything the piece
    /// has already accumulated.
    #[must_use]
    pub const fn compose(self, other: Rot3) -> Rot3 {
        let a = self.m;
        let b = other.m;
        let mut m = [[0i32; 3]; 3];
        let mut i = 0;
        while i < 3 {
            let mut j = 0;
            while j < 3 {
                m[i][j] = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
                j += 1;
            }
            i += 1;
        }
        Rot3 { m }
    }

    /// Rotate a vector.
    #[must_use]
    pub const fn apply(self, v: IVec3) -> IVec3 {
        IVec3::new(
            self.m[0][0] * v.x + self.m[0][1] * v.y + self.m[0][2] * v.z,
            self.m[1][0] * v.x + self.m[1][1] * v.y + self.m[1][2] * v.z,
            self.m[2][0] * v.x + self.m[2][1] * v.y + self.m[2][2] * v.z,
        )
    }

    /// The inverse rotation (transpose, since rotations are orthogonal).
    #[must_use]
    pub const fn inverse(self) -> Rot3 {
        let a = self.m;
        Rot3 {
            m: [
                [a[0][0], a[1][0], a[2][0]],
                [a[0][1], a[1][1], a[2][1]],
                [a[0][2], a[1][2], a[2][2]],
            ],
        }
    }

    /// True for the identity rotation.
    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    /// Determinant. +1 for every proper rotation.
    #[must_use]
    pub const fn determinant(self) -> i32 {
        let a = self.m;
        a[0][0] * (a[1][1] * a[2][2] - a[1][2] * a[2][1])
            - a[0][1] * (a[1][0] * a[2][2] - a[1][2] * a[2][0])
            + a[0][2] * (a[1][0] * a[2][1] - a[1][1] * a[2][0])
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const AXES: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
    const SPINS: [Spin; 2] = [Spin::Plus90, Spin::Minus90];

    #[test]
    fn quarter_turns_have_determinant_one() {
        for axis in AXES {
            for spin in SPINS {
                assert_eq!(Rot3::quarter_turn(axis, spin).determinant(), 1);
            }
        }
    }

    #[test]
    fn four_quarter_turns_are_identity() {
        for axis in AXES {
            for spin in SPINS {
                let q = Rot3::quarter_turn(axis, spin);
                let full = q.compose(q).compose(q).compose(q);
                assert!(full.is_identity());
            }
        }
    }

    #[test]
    fn opposite_spins_cancel() {
        for axis in AXES {
            let cw = Rot3::quarter_turn(axis, Spin::Minus90);
            let ccw = Rot3::quarter_turn(axis, Spin::Plus90);
            assert!(cw.compose(ccw).is_identity());
            assert_eq!(cw.inverse(), ccw);
        }
    }

    #[test]
    fn rotation_fixes_its_own_axis() {
        for axis in AXES {
            for spin in SPINS {
                let q = Rot3::quarter_turn(axis, spin);
                assert_eq!(q.apply(axis.unit()), axis.unit());
            }
        }
    }

    #[test]
    fn plus90_about_y_maps_x_to_minus_z() {
        // Right-hand rule spot check: +90 about Y sends +X to -Z.
        let q = Rot3::quarter_turn(Axis::Y, Spin::Plus90);
        assert_eq!(q.apply(IVec3::new(1, 0, 0)), IVec3::new(0, 0, -1));
    }

    #[test]
    fn lattice_vectors_stay_on_lattice() {
        let corner = IVec3::new(1, -1, 1);
        for axis in AXES {
            for spin in SPINS {
                let rotated = Rot3::quarter_turn(axis, spin).apply(corner);
                assert!(rotated.is_lattice());
            }
        }
    }
}
