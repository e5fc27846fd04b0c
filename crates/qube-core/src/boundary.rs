//! # Boundary Traits
//!
//! Capability interfaces between the engine and the outside world. They
//! are intentionally defined without in-crate implementations: transports,
//! render loops, and animation timing all live outside the core, which
//! only ever sees these seams.

use crate::facelet::Facelets;
use crate::types::{CubeError, Move};

/// An authoritative remote cube, used for cross-checking local state.
///
/// The remote applies the same move tokens independently and returns its
/// own facelet string; callers compare it against the local serialization
/// via `CubeSession::verify_against`. Transport, retries, and timeouts are
/// the implementor's concern.
pub trait CubeService: Send + Sync {
    /// Apply one move token remotely and return the remote state.
    fn rotate(&mut self, token: &str) -> Result<Facelets, CubeError>;

    /// Ask the remote solver for a full move-token solution sequence.
    /// The core consumes the tokens one at a time through normal moves.
    fn solve(&mut self) -> Result<Vec<String>, CubeError>;
}

/// A visual layer that can animate one move at a time.
///
/// The shell must sequence moves strictly: a new move may only be issued
/// once the completion callback for the previous one has fired, because
/// applying a move mutates the state the next move's layer filter reads.
pub trait MoveAnimator {
    /// Animate the visual transition for `mv`, then invoke `on_complete`
    /// exactly once; the caller applies the move to the model there.
    fn animate(&mut self, mv: Move, on_complete: Box<dyn FnOnce() + Send>);
}
