//! # Core Type Definitions
//!
//! This module contains the vocabulary shared by every part of the engine:
//! - Face and color identifiers (`Face`, `Color`)
//! - The parsed move token (`Move`, `Direction`)
//! - Error types (`CubeError`)
//!
//! ## Conventions
//!
//! Right-handed world frame, Y up: `U` is +Y, `R` is +X, `F` is +Z. Colors
//! follow the western scheme (white up, green front) and are the alphabet of
//! the external facelet representation.

use crate::rotation::{Axis, IVec3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// FACES
// =============================================================================

/// One of the six faces of the cube, named from the solver's viewpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Face {
    /// Up (+Y)
    U,
    /// Down (-Y)
    D,
    /// Left (-X)
    L,
    /// Right (+X)
    R,
    /// Front (+Z)
    F,
    /// Back (-Z)
    B,
}

impl Face {
    /// All six faces.
    pub const ALL: [Face; 6] = [Face::U, Face::D, Face::L, Face::R, Face::F, Face::B];

    /// The world axis this face sits on.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Face::U | Face::D => Axis::Y,
            Face::L | Face::R => Axis::X,
            Face::F | Face::B => Axis::Z,
        }
    }

    /// The sign of this face's coordinate on its axis.
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Face::U | Face::R | Face::F => 1,
            Face::D | Face::L | Face::B => -1,
        }
    }

    /// The outward unit normal of this face.
    #[must_use]
    pub const fn normal(self) -> IVec3 {
        let unit = self.axis().unit();
        IVec3::new(
            unit.x * self.sign(),
            unit.y * self.sign(),
            unit.z * self.sign(),
        )
    }

    /// The canonical sticker color of this face in the solved state.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Face::U => Color::White,
            Face::D => Color::Yellow,
            Face::L => Color::Orange,
            Face::R => Color::Red,
            Face::F => Color::Green,
            Face::B => Color::Blue,
        }
    }

    /// The single-letter face name used in move tokens.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::L => 'L',
            Face::R => 'R',
            Face::F => 'F',
            Face::B => 'B',
        }
    }

    /// Parse a face letter.
    #[must_use]
    pub const fn from_letter(c: char) -> Option<Face> {
        match c {
            'U' => Some(Face::U),
            'D' => Some(Face::D),
            'L' => Some(Face::L),
            'R' => Some(Face::R),
            'F' => Some(Face::F),
            'B' => Some(Face::B),
            _ => None,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

// =============================================================================
// COLORS
// =============================================================================

/// A sticker color; the alphabet of the external facelet string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Yellow,
    Orange,
    Red,
    Green,
    Blue,
}

impl Color {
    /// The single-letter code used by the external state convention.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }

    /// Parse a color letter.
    #[must_use]
    pub const fn from_letter(c: char) -> Option<Color> {
        match c {
            'W' => Some(Color::White),
            'Y' => Some(Color::Yellow),
            'O' => Some(Color::Orange),
            'R' => Some(Color::Red),
            'G' => Some(Color::Green),
            'B' => Some(Color::Blue),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

// =============================================================================
// MOVES
// =============================================================================

/// Turn direction of a face move, as seen looking at that face from
/// outside the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// A parsed move token.
///
/// The token grammar is `^[UDLRFB]'?$` for face quarter turns and `^[XYZ]$`
/// for whole-cube rotations. Whole-cube tokens have a single fixed +90
/// degree sense and no prime variant, matching the external convention;
/// the enum leaves room to add signed or double variants later without
/// changing existing tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// Quarter turn of one face layer.
    FaceTurn { face: Face, direction: Direction },
    /// +90 degree rotation of the whole cube about a world axis.
    WholeCube { axis: Axis },
}

impl Move {
    /// Parse a move token. Unknown tokens are rejected, never applied.
    pub fn parse(token: &str) -> Result<Move, CubeError> {
        match token {
            "X" => return Ok(Move::WholeCube { axis: Axis::X }),
            "Y" => return Ok(Move::WholeCube { axis: Axis::Y }),
            "Z" => return Ok(Move::WholeCube { axis: Axis::Z }),
            _ => {}
        }

        let mut chars = token.chars();
        let face = chars
            .next()
            .and_then(Face::from_letter)
            .ok_or_else(|| CubeError::InvalidMove(token.to_string()))?;
        let direction = match chars.next() {
            None => Direction::Clockwise,
            Some('\'') if chars.next().is_none() => Direction::CounterClockwise,
            Some(_) => return Err(CubeError::InvalidMove(token.to_string())),
        };
        Ok(Move::FaceTurn { face, direction })
    }

    /// Parse a whitespace-separated move sequence; fails on the first bad
    /// token without applying anything.
    pub fn parse_sequence(tokens: &str) -> Result<Vec<Move>, CubeError> {
        tokens.split_whitespace().map(Move::parse).collect()
    }

    /// The move sequence that undoes this move.
    ///
    /// A face turn inverts by flipping its direction. A whole-cube rotation
    /// has no prime token, so its inverse is the same rotation three times.
    #[must_use]
    pub fn inverse_moves(self) -> Vec<Move> {
        match self {
            Move::FaceTurn { face, direction } => vec![Move::FaceTurn {
                face,
                direction: direction.reversed(),
            }],
            Move::WholeCube { .. } => vec![self; 3],
        }
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::parse(s)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::FaceTurn { face, direction } => match direction {
                Direction::Clockwise => write!(f, "{}", face),
                Direction::CounterClockwise => write!(f, "{}'", face),
            },
            Move::WholeCube { axis } => match axis {
                Axis::X => write!(f, "X"),
                Axis::Y => write!(f, "Y"),
                Axis::Z => write!(f, "Z"),
            },
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the cube engine.
///
/// The taxonomy is narrow by design: the engine degrades to no-op or
/// non-match wherever possible, and these variants exist so callers get a
/// diagnosable signal instead of a silent swallow.
#[derive(Debug, Error)]
pub enum CubeError {
    /// The move token does not match the accepted grammar.
    /// The cube state is unchanged.
    #[error("unrecognized move token: {0:?}")]
    InvalidMove(String),

    /// A stage curriculum failed validation (empty list, bad pattern).
    #[error("invalid curriculum: {0}")]
    InvalidCurriculum(String),

    /// A facelet string has the wrong length or alphabet.
    #[error("invalid facelet string: {0}")]
    InvalidFacelets(String),
}

// =============================================================================
// TESTS
// =============================================================================
