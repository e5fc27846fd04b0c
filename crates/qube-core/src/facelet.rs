//! # Facelet Serialization
//!
//! Projects the 3D model into the flat 54-character state string used by
//! the external solver service. The convention is fixed: faces in the
//! order `U, L, F, R, B, D`, nine characters per face in a fixed raster,
//! color letters `W O G R B Y` rather than face letters.
//!
//! Serialization never fails. A slot that cannot be resolved (which the
//! move invariants make unreachable) emits the sentinel `?`, so a partial
//! corruption shows up as a local mismatch instead of a crash.

use crate::cubie::CubeModel;
use crate::rotation::IVec3;
use crate::types::{Color, CubeError, Face};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Length of a facelet string: 6 faces x 9 stickers.
pub const FACELET_LEN: usize = 54;

/// Emitted for a slot whose cubie or sticker cannot be resolved.
pub const SENTINEL: char = '?';

/// The serialization of the solved cube.
pub const SOLVED_FACELETS: &str =
    "WWWWWWWWWOOOOOOOOOGGGGGGGGGRRRRRRRRRBBBBBBBBBYYYYYYYYY";

/// Face iteration order of the external state convention.
const FACE_ORDER: [Face; 6] = [Face::U, Face::L, Face::F, Face::R, Face::B, Face::D];

// =============================================================================
// FACELET STRING
// =============================================================================

/// A 54-character cube state over the color alphabet (plus sentinel).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Facelets(String);

impl Facelets {
    /// Validate an externally supplied facelet string.
    ///
    /// Accepts exactly 54 characters over `{W,O,G,R,B,Y}`. The sentinel is
    /// an output-only character and is rejected on input.
    pub fn parse(s: &str) -> Result<Self, CubeError> {
        if s.chars().count() != FACELET_LEN {
            return Err(CubeError::InvalidFacelets(format!(
                "expected {} characters, got {}",
                FACELET_LEN,
                s.chars().count()
            )));
        }
        if let Some(bad) = s.chars().find(|&c| Color::from_letter(c).is_none()) {
            return Err(CubeError::InvalidFacelets(format!(
                "character {:?} is not a color letter",
                bad
            )));
        }
        Ok(Self(s.to_string()))
    }

    /// The raw 54-character string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if this is the solved configuration.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0 == SOLVED_FACELETS
    }

    /// True if any slot failed to resolve during serialization.
    #[must_use]
    pub fn has_sentinel(&self) -> bool {
        self.0.contains(SENTINEL)
    }
}

impl fmt::Display for Facelets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// RASTER
// =============================================================================

/// World position of raster slot `(row, col)` on a face, rows and columns
/// in `0..3`. The layouts match the external service's `STICKER_MAP`.
const fn slot_position(face: Face, row: i32, col: i32) -> IVec3 {
    match face {
        Face::U => IVec3::new(col - 1, 1, row - 1),
        Face::L => IVec3::new(-1, 1 - row, col - 1),
        Face::F => IVec3::new(col - 1, 1 - row, 1),
        Face::R => IVec3::new(1, 1 - row, 1 - col),
        Face::B => IVec3::new(1 - col, 1 - row, -1),
        Face::D => IVec3::new(col - 1, -1, 1 - row),
    }
}

// =============================================================================
// SERIALIZER
// =============================================================================

/// Serialize the model into the canonical facelet string.
///
/// For each of the 54 world slots: find the occupying cubie by exact
/// position match, then the sticker whose orientation-rotated local normal
/// equals the face's world normal, and emit its color letter. Identical
/// models always serialize identically.
#[must_use]
pub fn serialize(model: &CubeModel) -> Facelets {
    let mut out = String::with_capacity(FACELET_LEN);
    for face in FACE_ORDER {
        let normal = face.normal();
        for row in 0..3 {
            for col in 0..3 {
                let letter = model
                    .cubie_at(slot_position(face, row, col))
                    .and_then(|cubie| cubie.visible_sticker(normal))
                    .map_or(SENTINEL, Color::letter);
                out.push(letter);
            }
        }
    }
    Facelets(out)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_model_serializes_to_solved_string() {
        let facelets = serialize(&CubeModel::solved());
        assert_eq!(facelets.as_str(), SOLVED_FACELETS);
        assert!(facelets.is_solved());
        assert!(!facelets.has_sentinel());
    }

    #[test]
    fn solved_string_has_nine_of_each_color() {
        for color in "WOGRBY".chars() {
            let count = SOLVED_FACELETS.chars().filter(|&c| c == color).count();
            assert_eq!(count, 9, "color {}", color);
        }
    }

    #[test]
    fn rasters_cover_each_face_exactly() {
        for face in FACE_ORDER {
            for row in 0..3 {
                for col in 0..3 {
                    let pos = slot_position(face, row, col);
                    assert!(pos.is_lattice());
                    assert_eq!(pos.component(face.axis()), face.sign());
                }
            }
        }
    }

    #[test]
    fn u_turn_swaps_side_top_rows() {
        let mut model = CubeModel::solved();
        model.apply_token("U").expect("valid token");
        let s = serialize(&model);
        let s = s.as_str();
        // Face order U L F R B D, 9 chars each; top row = first 3 of a face.
        // U clockwise: F row -> L, R -> F, B -> R, L -> B.
        assert_eq!(&s[0..9], "WWWWWWWWW"); // U face intact
        assert_eq!(&s[9..12], "GGG"); // L top row came from F
        assert_eq!(&s[18..21], "RRR"); // F top row came from R
        assert_eq!(&s[27..30], "BBB"); // R top row came from B
        assert_eq!(&s[36..39], "OOO"); // B top row came from L
        assert_eq!(&s[45..54], "YYYYYYYYY"); // D face intact
    }

    #[test]
    fn serialization_is_deterministic() {
        let mut a = CubeModel::solved();
        let mut b = CubeModel::solved();
        for token in ["R", "U'", "F", "X"] {
            a.apply_token(token).expect("valid");
            b.apply_token(token).expect("valid");
        }
        assert_eq!(serialize(&a), serialize(&b));
    }

    #[test]
    fn length_is_always_54() {
        let mut model = CubeModel::solved();
        for token in ["R", "U", "R'", "U'", "X", "Y", "Z"] {
            model.apply_token(token).expect("valid");
            let facelets = serialize(&model);
            assert_eq!(facelets.as_str().len(), FACELET_LEN);
            assert!(
                facelets
                    .as_str()
                    .chars()
                    .all(|c| Color::from_letter(c).is_some() || c == SENTINEL)
            );
        }
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(Facelets::parse(SOLVED_FACELETS).is_ok());
        assert!(Facelets::parse("WWW").is_err());
        let with_sentinel = format!("?{}", &SOLVED_FACELETS[1..]);
        assert!(Facelets::parse(&with_sentinel).is_err());
    }
}
