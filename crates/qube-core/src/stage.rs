//! # Stages and Target Patterns
//!
//! A solving curriculum is an ordered, immutable list of stages. Each stage
//! carries a wildcard target pattern over the facelet alphabet: the stage
//! is reached when every non-wildcard position of the live facelet string
//! matches. The engine never mutates stage definitions, only a cursor into
//! them (see the `tracker` module).

use crate::facelet::FACELET_LEN;
use crate::types::{Color, CubeError};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// TARGET PATTERN
// =============================================================================

/// The wildcard character: "don't care at this position".
pub const WILDCARD: char = '*';

/// A 54-character match target over the color alphabet plus [`WILDCARD`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TargetPattern(String);

impl TargetPattern {
    /// Validate a pattern: exactly 54 characters, each a color letter or
    /// the wildcard.
    pub fn new(pattern: impl Into<String>) -> Result<Self, CubeError> {
        let pattern = pattern.into();
        if pattern.chars().count() != FACELET_LEN {
            return Err(CubeError::InvalidCurriculum(format!(
                "target pattern must be {} characters, got {}",
                FACELET_LEN,
                pattern.chars().count()
            )));
        }
        if let Some(bad) = pattern
            .chars()
            .find(|&c| c != WILDCARD && Color::from_letter(c).is_none())
        {
            return Err(CubeError::InvalidCurriculum(format!(
                "target pattern character {:?} is not a color letter or wildcard",
                bad
            )));
        }
        Ok(Self(pattern))
    }

    /// Position-wise match, skipping wildcards.
    ///
    /// A length mismatch (including malformed or empty input) is a
    /// non-match, never an error: the caller treats it as "not yet solved".
    #[must_use]
    pub fn matches(&self, facelets: &str) -> bool {
        if facelets.len() != self.0.len() {
            return false;
        }
        self.0
            .chars()
            .zip(facelets.chars())
            .all(|(want, got)| want == WILDCARD || want == got)
    }

    /// The raw pattern string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TargetPattern {
    type Error = CubeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<TargetPattern> for String {
    fn from(p: TargetPattern) -> String {
        p.0
    }
}

impl fmt::Display for TargetPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// STAGE
// =============================================================================

/// One labeled step of a guided solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    /// Stable identifier, e.g. `white-cross`.
    pub id: String,
    /// Human-facing name.
    pub name: String,
    /// What this stage accomplishes and how to approach it.
    pub description: String,
    /// The wildcard pattern that, once matched, completes this stage.
    pub target_pattern: TargetPattern,
    /// Ordered human-readable hints.
    pub hints: Vec<String>,
    /// Recommended move-token sequences for this stage, most common first.
    #[serde(default)]
    pub algorithm: Vec<String>,
}

// =============================================================================
// CURRICULUM
// =============================================================================

/// An ordered, immutable stage sequence, known in advance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Stage>", into = "Vec<Stage>")]
pub struct Curriculum {
    stages: Vec<Stage>,
}

impl Curriculum {
    /// Build a curriculum, rejecting an empty stage list or stages with
    /// empty metadata.
    pub fn new(stages: Vec<Stage>) -> Result<Self, CubeError> {
        if stages.is_empty() {
            return Err(CubeError::InvalidCurriculum(
                "curriculum must contain at least one stage".to_string(),
            ));
        }
        for stage in &stages {
            if stage.id.is_empty() || stage.name.is_empty() {
                return Err(CubeError::InvalidCurriculum(format!(
                    "stage {:?} is missing an id or name",
                    stage.id
                )));
            }
        }
        Ok(Self { stages })
    }

    /// Number of stages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Always false; construction rejects empty curricula.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Stage at `index`, clamped to the last stage.
    ///
    /// Clamping keeps end-of-curriculum queries total: once the cursor sits
    /// on the final stage, callers keep getting that stage back.
    #[must_use]
    pub fn stage_clamped(&self, index: usize) -> &Stage {
        let last = self.stages.len() - 1;
        &self.stages[index.min(last)]
    }

    /// All stages in order.
    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }
}

impl TryFrom<Vec<Stage>> for Curriculum {
    type Error = CubeError;

    fn try_from(stages: Vec<Stage>) -> Result<Self, Self::Error> {
        Self::new(stages)
    }
}

impl From<Curriculum> for Vec<Stage> {
    fn from(c: Curriculum) -> Vec<Stage> {
        c.stages
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facelet::SOLVED_FACELETS;

    fn all_wildcards() -> TargetPattern {
        TargetPattern::new("*".repeat(FACELET_LEN)).expect("valid pattern")
    }

    #[test]
    fn wildcard_pattern_matches_anything_of_equal_length() {
        assert!(all_wildcards().matches(SOLVED_FACELETS));
    }

    #[test]
    fn length_mismatch_is_a_non_match() {
        let pattern = all_wildcards();
        assert!(!pattern.matches(""));
        assert!(!pattern.matches("WWW"));
        assert!(!pattern.matches(&format!("{}W", SOLVED_FACELETS)));
    }

    #[test]
    fn non_wildcard_positions_must_match_exactly() {
        let mut chars: Vec<char> = "*".repeat(FACELET_LEN).chars().collect();
        chars[0] = 'W';
        let pattern =
            TargetPattern::new(chars.into_iter().collect::<String>()).expect("valid pattern");
        assert!(pattern.matches(SOLVED_FACELETS));
        let mut off: String = SOLVED_FACELETS.to_string();
        off.replace_range(0..1, "G");
        assert!(!pattern.matches(&off));
    }

    #[test]
    fn pattern_validation_rejects_bad_input() {
        assert!(TargetPattern::new("*").is_err());
        assert!(TargetPattern::new("Q".repeat(FACELET_LEN)).is_err());
        assert!(TargetPattern::new(SOLVED_FACELETS).is_ok());
    }

    #[test]
    fn empty_curriculum_is_rejected() {
        assert!(Curriculum::new(Vec::new()).is_err());
    }

    #[test]
    fn stage_lookup_clamps_to_last() {
        let stage = Stage {
            id: "only".to_string(),
            name: "Only".to_string(),
            description: "The only stage".to_string(),
            target_pattern: all_wildcards(),
            hints: Vec::new(),
            algorithm: Vec::new(),
        };
        let curriculum = Curriculum::new(vec![stage]).expect("valid curriculum");
        assert_eq!(curriculum.stage_clamped(99).id, "only");
    }
}
