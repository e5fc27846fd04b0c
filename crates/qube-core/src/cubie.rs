//! # Cubie Model
//!
//! The cube is 27 sub-cubes ("cubies"), one per position in `{-1,0,1}^3`.
//! Pieces are never created or destroyed after construction; moves only
//! relocate and reorient them.
//!
//! A cubie's stickers are fixed at creation in its own local frame. What
//! changes over time is the piece's `orientation`, which maps each local
//! sticker normal to the world direction it currently points toward.

use crate::rotation::{IVec3, Rot3};
use crate::types::{Color, Face};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Stable identity of a cubie, assigned at creation and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CubieId(pub u8);

/// The kind of a piece, derived from its sticker count and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CubieKind {
    /// Three stickers; eight of these.
    Corner,
    /// Two stickers; twelve of these.
    Edge,
    /// One sticker; six of these. Centers never change position under
    /// face turns, only under whole-cube rotations.
    Center,
    /// The hidden interior piece at the origin; never serialized.
    Core,
}

impl CubieKind {
    /// Derive the kind from a sticker count.
    #[must_use]
    pub const fn from_sticker_count(count: usize) -> CubieKind {
        match count {
            3 => CubieKind::Corner,
            2 => CubieKind::Edge,
            1 => CubieKind::Center,
            _ => CubieKind::Core,
        }
    }
}

// =============================================================================
// CUBIE
// =============================================================================

/// One physical piece of the cube.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cubie {
    /// Stable identity.
    pub id: CubieId,
    /// Current world position, each coordinate in `{-1, 0, 1}`.
    pub position: IVec3,
    /// Accumulated rotation since creation; identity when solved.
    pub orientation: Rot3,
    /// Local sticker faces and their colors, fixed at creation.
    /// BTreeMap for deterministic iteration.
    pub stickers: BTreeMap<Face, Color>,
}

impl Cubie {
    /// The piece kind, derived from the sticker count.
    #[must_use]
    pub fn kind(&self) -> CubieKind {
        CubieKind::from_sticker_count(self.stickers.len())
    }

    /// The color of the sticker currently pointing in `world_normal`.
    ///
    /// Each local sticker normal is rotated by the cubie's orientation and
    /// compared exactly; orientations are 90-degree quantized so no
    /// tolerance is involved. `None` if no sticker faces that way.
    #[must_use]
    pub fn visible_sticker(&self, world_normal: IVec3) -> Option<Color> {
        self.stickers
            .iter()
            .find(|(face, _)| self.orientation.apply(face.normal()) == world_normal)
            .map(|(_, color)| *color)
    }
}

// =============================================================================
// CUBE MODEL
// =============================================================================

/// The full 27-piece cube state.
///
/// Invariant: the 27 positions are always a permutation of `{-1,0,1}^3`;
/// no piece is duplicated or lost by any move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeModel {
    cubies: Vec<Cubie>,
}

impl Default for CubeModel {
    fn default() -> Self {
        Self::solved()
    }
}

impl CubeModel {
    /// Number of pieces in a 3x3 cube.
    pub const PIECE_COUNT: usize = 27;

    /// Build the canonical solved cube.
    ///
    /// Deterministically enumerates the 27 position slots; each piece gets
    /// one sticker per face its position touches, colored with that face's
    /// canonical color. The id encodes the slot index
    /// `(x+1) + 3(y+1) + 9(z+1)`, matching the external indexing scheme.
    #[must_use]
    pub fn solved() -> Self {
        let mut cubies = Vec::with_capacity(Self::PIECE_COUNT);
        for z in -1..=1 {
            for y in -1..=1 {
                for x in -1..=1 {
                    let position = IVec3::new(x, y, z);
                    let index = (x + 1) + 3 * (y + 1) + 9 * (z + 1);
                    let mut stickers = BTreeMap::new();
                    for face in Face::ALL {
                        if position.component(face.axis()) == face.sign() {
                            stickers.insert(face, face.color());
                        }
                    }
                    cubies.push(Cubie {
                        id: CubieId(index as u8),
                        position,
                        orientation: Rot3::IDENTITY,
                        stickers,
                    });
                }
            }
        }
        Self { cubies }
    }

    /// All pieces, in creation order.
    pub fn cubies(&self) -> impl Iterator<Item = &Cubie> {
        self.cubies.iter()
    }

    /// Mutable access for move application (crate-internal).
    pub(crate) fn cubies_mut(&mut self) -> &mut [Cubie] {
        &mut self.cubies
    }

    /// The piece currently occupying a world position.
    #[must_use]
    pub fn cubie_at(&self, position: IVec3) -> Option<&Cubie> {
        self.cubies.iter().find(|c| c.position == position)
    }

    /// Look up a piece by its stable id.
    #[must_use]
    pub fn cubie_by_id(&self, id: CubieId) -> Option<&Cubie> {
        self.cubies.iter().find(|c| c.id == id)
    }

    /// True if the 27 positions are a permutation of `{-1,0,1}^3`.
    ///
    /// Holds after any move; exposed for tests and debugging.
    #[must_use]
    pub fn positions_are_unique(&self) -> bool {
        let mut seen = std::collections::BTreeSet::new();
        self.cubies.len() == Self::PIECE_COUNT
            && self
                .cubies
                .iter()
                .all(|c| c.position.is_lattice() && seen.insert(c.position))
    }
}

// =============================================================================
// TESTS
// =============================================================================
