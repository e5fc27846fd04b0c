//! # qube-core
//!
//! The deterministic cube engine for Qube - THE LOGIC.
//!
//! This crate models a 3x3 cube as 27 cubies with integer positions and
//! 90-degree-quantized orientations, applies face and whole-cube moves,
//! serializes the model into the external 54-character facelet convention,
//! and tracks progress through a staged solving curriculum.
//!
//! ## Architectural Constraints
//!
//! The CORE:
//! - Is pure computation: no async, no network, no I/O
//! - Is integer-only: rotations are signed permutation matrices, so there
//!   is no floating point and no tolerance anywhere (the workspace denies
//!   `float_arithmetic`)
//! - Never panics on input: bad tokens degrade to no-ops with an error
//!   flag, bad facelet strings to non-matches, unresolvable slots to a
//!   sentinel character
//! - Owns no global state: everything lives in an explicit `CubeSession`

// =============================================================================
// MODULES
// =============================================================================

pub mod boundary;
pub mod cubie;
pub mod curriculum;
pub mod facelet;
pub mod kinematics;
pub mod rotation;
pub mod session;
pub mod stage;
pub mod tracker;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{Color, CubeError, Direction, Face, Move};

// =============================================================================
// RE-EXPORTS: Kinematics
// =============================================================================

pub use cubie::{CubeModel, Cubie, CubieId, CubieKind};
pub use kinematics::{FaceRotation, face_rotation, move_rotation, selects};
pub use rotation::{Axis, IVec3, Rot3, Spin};

// =============================================================================
// RE-EXPORTS: Serialization
// =============================================================================

pub use facelet::{FACELET_LEN, Facelets, SENTINEL, SOLVED_FACELETS, serialize};

// =============================================================================
// RE-EXPORTS: Solving Progress
// =============================================================================

pub use stage::{Curriculum, Stage, TargetPattern, WILDCARD};
pub use tracker::{GuideSummary, SolveTracker, TrackerMode};

// =============================================================================
// RE-EXPORTS: Session & Boundaries
// =============================================================================

pub use boundary::{CubeService, MoveAnimator};
pub use session::{CubeSession, SessionUpdate, SyncStatus};
