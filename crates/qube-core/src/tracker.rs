//! # Solving-Progress Tracker
//!
//! A state machine over a fixed stage curriculum. It consumes live facelet
//! strings and reports the current stage, completion flags, and an overall
//! progress percentage.
//!
//! ## Failure Semantics
//!
//! Nothing here fails. Malformed input (wrong length, junk characters) is
//! a non-match that leaves state untouched; advancing past the last stage
//! is a no-op; queries at the end of the curriculum keep returning the
//! last stage.

use crate::stage::{Curriculum, Stage};
use serde::{Deserialize, Serialize};

// =============================================================================
// MODE
// =============================================================================

/// What the guide session is currently doing.
///
/// While `Scrambling`, incoming state updates are recorded but never
/// advance the stage cursor, so a scramble cannot be misread as progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TrackerMode {
    #[default]
    Solving,
    Scrambling,
}

// =============================================================================
// GUIDE SUMMARY
// =============================================================================

/// A snapshot of the guide state for display layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideSummary {
    /// Zero-based cursor into the curriculum.
    pub stage_index: usize,
    /// Total number of stages.
    pub total_stages: usize,
    /// Id of the stage at the cursor.
    pub stage_id: String,
    /// Name of the stage at the cursor.
    pub stage_name: String,
    /// Description of the stage at the cursor.
    pub description: String,
    /// First recommended move sequence for this stage, if any.
    pub next_move: Option<String>,
    /// Completed stages as a percentage of the whole curriculum.
    pub percent: u8,
}

// =============================================================================
// TRACKER
// =============================================================================

/// Progress state machine for one guide session.
///
/// The cursor is monotonically non-decreasing between resets; completion
/// flags are only ever set, never cleared except by [`SolveTracker::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveTracker {
    curriculum: Curriculum,
    cursor: usize,
    completed: Vec<bool>,
    mode: TrackerMode,
    /// Last facelet string seen, and whether it advanced the cursor.
    /// Used to keep updates idempotent: replaying the exact same state
    /// must not advance through a second stage with an identical target.
    last_input: Option<String>,
    advanced_on_last: bool,
}

impl Default for SolveTracker {
    fn default() -> Self {
        Self::new(Curriculum::beginner())
    }
}

impl SolveTracker {
    /// Create a tracker over a curriculum, starting at stage 0 in
    /// `Solving` mode.
    #[must_use]
    pub fn new(curriculum: Curriculum) -> Self {
        let total = curriculum.len();
        Self {
            curriculum,
            cursor: 0,
            completed: vec![false; total],
            mode: TrackerMode::Solving,
            last_input: None,
            advanced_on_last: false,
        }
    }

    /// The curriculum this tracker walks.
    #[must_use]
    pub fn curriculum(&self) -> &Curriculum {
        &self.curriculum
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> TrackerMode {
        self.mode
    }

    /// Switch mode. Entering `Scrambling` freezes the cursor until the
    /// tracker is reset or switched back.
    pub fn set_mode(&mut self, mode: TrackerMode) {
        self.mode = mode;
    }

    /// Restore the tracker to a fresh solve: cursor 0, no completions,
    /// `Solving` mode. Must be called whenever the cube is scrambled or
    /// reset, otherwise completion flags leak into the new session.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.completed = vec![false; self.curriculum.len()];
        self.mode = TrackerMode::Solving;
        self.last_input = None;
        self.advanced_on_last = false;
    }

    /// Consume a live facelet string; returns true if the cursor advanced
    /// (or the final stage completed).
    ///
    /// At most one stage is consumed per update, and a verbatim repeat of
    /// the state that just advanced the cursor is ignored: two stages
    /// with identical targets each need their own state update.
    pub fn update(&mut self, facelets: &str) -> bool {
        if self.mode == TrackerMode::Scrambling {
            self.last_input = Some(facelets.to_string());
            self.advanced_on_last = false;
            return false;
        }
        if self.advanced_on_last && self.last_input.as_deref() == Some(facelets) {
            return false;
        }
        self.last_input = Some(facelets.to_string());

        let already_done = self.is_solved();
        let matched = self
            .curriculum
            .stage_clamped(self.cursor)
            .target_pattern
            .matches(facelets);
        let advanced = matched && !already_done;
        if advanced {
            self.completed[self.cursor] = true;
            if self.cursor + 1 < self.curriculum.len() {
                self.cursor += 1;
            }
        }
        self.advanced_on_last = advanced;
        advanced
    }

    /// The stage at the cursor; the last stage once the curriculum ends.
    #[must_use]
    pub fn current_stage(&self) -> &Stage {
        self.curriculum.stage_clamped(self.cursor)
    }

    /// Zero-based cursor position.
    #[must_use]
    pub fn stage_index(&self) -> usize {
        self.cursor
    }

    /// Hints for the stage at the cursor.
    #[must_use]
    pub fn current_hints(&self) -> &[String] {
        &self.current_stage().hints
    }

    /// Recommended move sequences for the stage at the cursor.
    #[must_use]
    pub fn recommended_moves(&self) -> &[String] {
        &self.current_stage().algorithm
    }

    /// Number of completed stages.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.iter().filter(|&&done| done).count()
    }

    /// Completed stages as a percentage, integer math only.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        let total = self.curriculum.len();
        ((self.completed_count() * 100) / total) as u8
    }

    /// Terminal state: the final stage has matched.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.completed.last().copied().unwrap_or(false)
    }

    /// Snapshot for display layers.
    #[must_use]
    pub fn guide(&self) -> GuideSummary {
        let stage = self.current_stage();
        GuideSummary {
            stage_index: self.cursor,
            total_stages: self.curriculum.len(),
            stage_id: stage.id.clone(),
            stage_name: stage.name.clone(),
            description: stage.description.clone(),
            next_move: stage.algorithm.first().cloned(),
            percent: self.progress_percent(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
