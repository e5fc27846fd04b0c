//! # Move Kinematics
//!
//! Applies a parsed move to the cube model. This module is the single
//! source of truth for axis-and-angle per face; everything else routes
//! through the [`face_rotation`] table.
//!
//! A face turn selects the layer of cubies sharing the face's coordinate,
//! rotates their positions exactly, and premultiplies their orientations
//! with the same rotation. A whole-cube token does the same to all 27
//! pieces, centers included.

use crate::cubie::CubeModel;
use crate::rotation::{Axis, IVec3, Rot3, Spin};
use crate::types::{CubeError, Direction, Face, Move};

// =============================================================================
// FACE ROTATION TABLE
// =============================================================================

/// Axis and signed quarter turns for one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceRotation {
    /// The world axis the face layer turns about.
    pub axis: Axis,
    /// Spin of a clockwise turn, as viewed from outside that face.
    pub clockwise: Spin,
    /// Spin of a counter-clockwise turn.
    pub counter_clockwise: Spin,
}

/// The rotation geometry of each face.
///
/// Each entry is derivable from "looking at that face from outside the
/// cube": a clockwise turn of a face whose coordinate sign is `s` is a
/// `-s * 90` degree rotation about the face's positive axis. E.g. `U`
/// clockwise, viewed from above, is -90 degrees about +Y.
#[must_use]
pub const fn face_rotation(face: Face) -> FaceRotation {
    match face {
        Face::U => FaceRotation {
            axis: Axis::Y,
            clockwise: Spin::Minus90,
            counter_clockwise: Spin::Plus90,
        },
        Face::D => FaceRotation {
            axis: Axis::Y,
            clockwise: Spin::Plus90,
            counter_clockwise: Spin::Minus90,
        },
        Face::L => FaceRotation {
            axis: Axis::X,
            clockwise: Spin::Plus90,
            counter_clockwise: Spin::Minus90,
        },
        Face::R => FaceRotation {
            axis: Axis::X,
            clockwise: Spin::Minus90,
            counter_clockwise: Spin::Plus90,
        },
        Face::F => FaceRotation {
            axis: Axis::Z,
            clockwise: Spin::Minus90,
            counter_clockwise: Spin::Plus90,
        },
        Face::B => FaceRotation {
            axis: Axis::Z,
            clockwise: Spin::Plus90,
            counter_clockwise: Spin::Minus90,
        },
    }
}

/// The world-frame rotation a move performs.
#[must_use]
pub const fn move_rotation(mv: Move) -> Rot3 {
    match mv {
        Move::FaceTurn { face, direction } => {
            let geom = face_rotation(face);
            let spin = match direction {
                Direction::Clockwise => geom.clockwise,
                Direction::CounterClockwise => geom.counter_clockwise,
            };
            Rot3::quarter_turn(geom.axis, spin)
        }
        // Whole-cube tokens carry a single fixed +90 degree sense.
        Move::WholeCube { axis } => Rot3::quarter_turn(axis, Spin::Plus90),
    }
}

/// Layer membership: a cubie belongs to a face turn's layer iff its
/// coordinate on the face's axis equals the face's sign. Whole-cube moves
/// select everything.
#[must_use]
pub const fn selects(mv: Move, position: IVec3) -> bool {
    match mv {
        Move::FaceTurn { face, .. } => position.component(face.axis()) == face.sign(),
        Move::WholeCube { .. } => true,
    }
}

// =============================================================================
// MOVE APPLICATION
// =============================================================================

impl CubeModel {
    /// Apply a parsed move.
    ///
    /// Selected cubies get their position rotated and their orientation
    /// premultiplied by the same rotation. Infallible: every parsed move is
    /// applicable, and the 27-unique-positions invariant is preserved
    /// because the layer rotates as a rigid unit.
    pub fn apply(&mut self, mv: Move) {
        let rotation = move_rotation(mv);
        for cubie in self.cubies_mut() {
            if selects(mv, cubie.position) {
                cubie.position = rotation.apply(cubie.position);
                cubie.orientation = rotation.compose(cubie.orientation);
            }
        }
        debug_assert!(self.positions_are_unique());
    }

    /// Parse and apply a raw token.
    ///
    /// An unrecognized token leaves the model untouched and reports
    /// `CubeError::InvalidMove`, so a caller driving a live UI can treat it
    /// as a no-op while tests still see the failure.
    pub fn apply_token(&mut self, token: &str) -> Result<Move, CubeError> {
        let mv = Move::parse(token)?;
        self.apply(mv);
        Ok(mv)
    }

    /// Apply a sequence of parsed moves in order.
    pub fn apply_all(&mut self, moves: &[Move]) {
        for &mv in moves {
            self.apply(mv);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn turned(token: &str) -> CubeModel {
        let mut model = CubeModel::solved();
        model.apply_token(token).expect("valid token");
        model
    }

    #[test]
    fn clockwise_spin_is_opposite_face_sign() {
        // The table must agree with its own derivation rule.
        for face in Face::ALL {
            let geom = face_rotation(face);
            let expected = if face.sign() == 1 {
                Spin::Minus90
            } else {
                Spin::Plus90
            };
            assert_eq!(geom.clockwise, expected, "face {}", face);
            assert_eq!(geom.counter_clockwise, expected.reversed());
        }
    }

    #[test]
    fn face_turn_selects_nine_cubies() {
        let model = CubeModel::solved();
        for face in Face::ALL {
            let mv = Move::FaceTurn {
                face,
                direction: Direction::Clockwise,
            };
            let count = model.cubies().filter(|c| selects(mv, c.position)).count();
            assert_eq!(count, 9, "face {}", face);
        }
    }

    #[test]
    fn u_turn_moves_urf_corner_to_ufl() {
        let model = turned("U");
        let moved = model
            .cubie_at(IVec3::new(-1, 1, 1))
            .expect("slot occupied");
        // The piece that started at (1,1,1) now sits at (-1,1,1).
        assert_eq!(moved.id.0, 26);
    }

    #[test]
    fn face_centers_never_move_under_face_turns() {
        for token in ["U", "D'", "L", "R'", "F", "B'"] {
            let model = turned(token);
            for face in Face::ALL {
                let center = model.cubie_at(face.normal()).expect("center");
                assert_eq!(center.stickers.len(), 1, "after {}", token);
            }
        }
    }

    #[test]
    fn whole_cube_rotation_moves_centers() {
        let model = turned("X");
        // +90 about X sends +Z to -Y: the F center ends up in the D slot.
        let down_center = model.cubie_at(IVec3::new(0, -1, 0)).expect("center");
        assert_eq!(down_center.stickers.get(&Face::F), Some(&Face::F.color()));
    }

    #[test]
    fn invalid_token_is_a_noop_with_signal() {
        let mut model = CubeModel::solved();
        let before = model.clone();
        assert!(model.apply_token("R2").is_err());
        assert_eq!(model, before);
    }

    #[test]
    fn move_then_inverse_restores_everything() {
        for token in ["U", "U'", "D", "L'", "R", "F'", "B", "X", "Y", "Z"] {
            let mut model = CubeModel::solved();
            let mv = model.apply_token(token).expect("valid token");
            for undo in mv.inverse_moves() {
                model.apply(undo);
            }
            assert_eq!(model, CubeModel::solved(), "token {}", token);
        }
    }

    #[test]
    fn four_quarter_turns_restore_the_layer() {
        for token in ["U", "R'", "F"] {
            let mut model = CubeModel::solved();
            for _ in 0..4 {
                model.apply_token(token).expect("valid token");
            }
            assert_eq!(model, CubeModel::solved(), "token {}", token);
        }
    }

    #[test]
    fn positions_stay_unique_under_moves() {
        let mut model = CubeModel::solved();
        for token in ["R", "U", "F'", "X", "D", "Y", "B'", "Z", "L"] {
            model.apply_token(token).expect("valid token");
            assert!(model.positions_are_unique(), "after {}", token);
        }
    }
}
