//! # Session Module
//!
//! One `CubeSession` owns one cube model and one progress tracker. There
//! is no ambient or global cube state: whatever layer needs the cube (UI,
//! CLI, a validation service) holds a session and passes it by reference.
//!
//! Sessions are fully independent of each other. Running many in parallel
//! needs no locking as long as each session stays owned by one logical
//! thread.

use crate::cubie::CubeModel;
use crate::facelet::{self, Facelets};
use crate::tracker::{GuideSummary, SolveTracker, TrackerMode};
use crate::types::{CubeError, Move};
use serde::{Deserialize, Serialize};

// =============================================================================
// OUTCOMES
// =============================================================================

/// Result of feeding one move through a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUpdate {
    /// The move that was applied.
    pub applied: Move,
    /// The cube state after the move.
    pub facelets: Facelets,
    /// Whether this state completed the current stage.
    pub advanced: bool,
    /// Guide snapshot after the update.
    pub guide: GuideSummary,
}

/// Outcome of comparing the local state against an authoritative remote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyncStatus {
    /// Local and remote agree.
    InSync,
    /// The two states differ; both sides are carried for diagnosis.
    Diverged { local: String, remote: String },
}

// =============================================================================
// SESSION
// =============================================================================

/// An owned cube-plus-guide session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CubeSession {
    model: CubeModel,
    tracker: SolveTracker,
}

impl CubeSession {
    /// A fresh session: solved cube, built-in curriculum, stage 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh session over a custom tracker (e.g. a loaded curriculum).
    #[must_use]
    pub fn with_tracker(tracker: SolveTracker) -> Self {
        Self {
            model: CubeModel::solved(),
            tracker,
        }
    }

    /// The cube model.
    #[must_use]
    pub fn model(&self) -> &CubeModel {
        &self.model
    }

    /// The progress tracker.
    #[must_use]
    pub fn tracker(&self) -> &SolveTracker {
        &self.tracker
    }

    /// Serialize the current cube state.
    #[must_use]
    pub fn facelets(&self) -> Facelets {
        facelet::serialize(&self.model)
    }

    /// Apply a parsed move, reserialize, and update progress.
    pub fn apply(&mut self, mv: Move) -> SessionUpdate {
        self.model.apply(mv);
        let facelets = self.facelets();
        let advanced = self.tracker.update(facelets.as_str());
        SessionUpdate {
            applied: mv,
            facelets,
            advanced,
            guide: self.tracker.guide(),
        }
    }

    /// Parse and apply a raw token. An unrecognized token changes nothing
    /// and surfaces as an error the shell can log and drop.
    pub fn apply_token(&mut self, token: &str) -> Result<SessionUpdate, CubeError> {
        let mv = Move::parse(token)?;
        Ok(self.apply(mv))
    }

    /// Apply a scramble sequence.
    ///
    /// The tracker is switched to `Scrambling` for the duration so the
    /// intermediate states never read as solving progress, then reset so
    /// no completion flags leak into the new solve.
    pub fn scramble(&mut self, moves: &[Move]) -> Facelets {
        self.tracker.set_mode(TrackerMode::Scrambling);
        for &mv in moves {
            self.model.apply(mv);
            let facelets = self.facelets();
            self.tracker.update(facelets.as_str());
        }
        self.tracker.reset();
        self.facelets()
    }

    /// Switch the tracker mode without applying moves, for shells that
    /// drive scrambles move-by-move through `apply`.
    pub fn set_mode(&mut self, mode: TrackerMode) {
        self.tracker.set_mode(mode);
    }

    /// Restore the solved cube and a fresh tracker.
    pub fn reset(&mut self) {
        self.model = CubeModel::solved();
        self.tracker.reset();
    }

    /// Compare the local state against an authoritative remote facelet
    /// string (the cross-check against the external service).
    #[must_use]
    pub fn verify_against(&self, remote: &str) -> SyncStatus {
        let local = self.facelets();
        if local.as_str() == remote {
            SyncStatus::InSync
        } else {
            SyncStatus::Diverged {
                local: local.as_str().to_string(),
                remote: remote.to_string(),
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facelet::SOLVED_FACELETS;

    #[test]
    fn fresh_session_is_solved_but_unstarted() {
        let session = CubeSession::new();
        assert!(session.facelets().is_solved());
        assert_eq!(session.tracker().completed_count(), 0);
    }

    #[test]
    fn apply_token_updates_state_and_guide() {
        let mut session = CubeSession::new();
        let update = session.apply_token("R").expect("valid token");
        assert_eq!(update.facelets, session.facelets());
        assert!(!update.facelets.is_solved());
        assert_eq!(update.guide.total_stages, 7);
    }

    #[test]
    fn invalid_token_leaves_session_untouched() {
        let mut session = CubeSession::new();
        let before = session.clone();
        assert!(session.apply_token("R2").is_err());
        assert_eq!(session, before);
    }

    #[test]
    fn scramble_resets_progress_and_mode() {
        let mut session = CubeSession::new();
        let moves = Move::parse_sequence("R U R' F D'").expect("valid");
        let facelets = session.scramble(&moves);
        assert!(!facelets.is_solved());
        assert_eq!(session.tracker().completed_count(), 0);
        assert_eq!(session.tracker().mode(), TrackerMode::Solving);
        assert_eq!(session.tracker().stage_index(), 0);
    }

    #[test]
    fn reset_restores_the_solved_cube() {
        let mut session = CubeSession::new();
        session.apply_token("F").expect("valid");
        session.reset();
        assert_eq!(session.facelets().as_str(), SOLVED_FACELETS);
    }

    #[test]
    fn verify_against_reports_divergence() {
        let mut session = CubeSession::new();
        assert_eq!(session.verify_against(SOLVED_FACELETS), SyncStatus::InSync);
        session.apply_token("R").expect("valid");
        match session.verify_against(SOLVED_FACELETS) {
            SyncStatus::Diverged { local, remote } => {
                assert_ne!(local, remote);
                assert_eq!(remote, SOLVED_FACELETS);
            }
            SyncStatus::InSync => unreachable!("states differ"),
        }
    }

    #[test]
    fn sessions_are_independent() {
        let mut a = CubeSession::new();
        let b = CubeSession::new();
        a.apply_token("U").expect("valid");
        assert!(b.facelets().is_solved());
    }
}
