//! # Built-in Beginner Curriculum
//!
//! The seven-stage layer-by-layer method: white cross, white corners,
//! middle layer, yellow cross, yellow edges, yellow corner positioning,
//! yellow corner orientation. Target patterns follow the external facelet
//! convention (face order U, L, F, R, B, D).
//!
//! Curricula are configuration data, not computed state; this one is
//! compiled in as the default, and callers may load their own instead.

use crate::stage::{Curriculum, Stage, TargetPattern};

/// Build one stage. Face segments are given in serialization order
/// U, L, F, R, B, D, one 9-character raster row per face.
fn stage(
    id: &str,
    name: &str,
    description: &str,
    faces: [&str; 6],
    hints: &[&str],
    algorithm: &[&str],
) -> Stage {
    Stage {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        target_pattern: TargetPattern::new(faces.concat())
            .expect("built-in target pattern is valid"),
        hints: hints.iter().map(|h| (*h).to_string()).collect(),
        algorithm: algorithm.iter().map(|a| (*a).to_string()).collect(),
    }
}

impl Curriculum {
    /// The built-in beginner method.
    #[must_use]
    pub fn beginner() -> Curriculum {
        let stages = vec![
            stage(
                "white-cross",
                "White Cross",
                "Form a plus of white edges on the up face, with each edge's \
                 side color matched to the neighboring center.",
                [
                    "*W*WWW*W*",
                    "*O**O****",
                    "*G**G****",
                    "*R**R****",
                    "*B**B****",
                    "*********",
                ],
                &[
                    "Find the four edges that carry a white sticker",
                    "Place them one at a time without disturbing the ones already done",
                    "Edge in the top layer but flipped: F U' R U",
                    "Edge stuck in the bottom layer: bring it to the front with F F, then insert with F' U' R U",
                    "Edge in the middle layer: U' R U, or U L' U' from the left",
                    "Check that every edge's side color matches its center",
                ],
                &["F U' R U", "F' U' R U", "U' R U", "U L' U'"],
            ),
            stage(
                "white-corners",
                "White Corners",
                "Keep white on top and insert the four white corners to \
                 finish the first layer, choosing the short insertion by \
                 which way the white sticker points.",
                [
                    "WWWWWWWWW",
                    "OOO*O****",
                    "GGG*G****",
                    "RRR*R****",
                    "BBB*B****",
                    "*********",
                ],
                &[
                    "Bring an unsolved white corner below its target slot using D turns",
                    "White sticker pointing right: R' D' R",
                    "White sticker pointing front: F D F'",
                    "White sticker pointing down: F L D D L' F'",
                    "If a corner sits twisted in its slot, repeat R' D' R D until it seats",
                ],
                &["R' D' R", "F D F'", "F L D D L' F'"],
            ),
            stage(
                "middle-layer",
                "Middle Layer",
                "Insert the four middle-layer edges (the ones without \
                 yellow) to complete the first two layers, using the \
                 mirrored left and right insertions.",
                [
                    "WWWWWWWWW",
                    "OOOOOO***",
                    "GGGGGG***",
                    "RRRRRR***",
                    "BBBBBB***",
                    "*********",
                ],
                &[
                    "Find a top-layer edge without yellow and line its front color up with the front center",
                    "Target slot on the right: U R U' R' U' F' U F",
                    "Target slot on the left: U' L' U L U F U' F'",
                    "An edge inserted the wrong way round: run the matching insertion twice to eject and re-insert it",
                ],
                &["U R U' R' U' F' U F", "U' L' U L U F U' F'"],
            ),
            stage(
                "yellow-cross",
                "Yellow Cross",
                "Make a yellow plus on the down face. Side colors do not \
                 need to line up yet; one algorithm walks dot, L-shape, and \
                 line into the cross.",
                [
                    "WWWWWWWWW",
                    "OOOOOO***",
                    "GGGGGG***",
                    "RRRRRR***",
                    "BBBBBB***",
                    "*Y*YYY*Y*",
                ],
                &[
                    "Identify the yellow pattern: dot, L-shape, line, or cross",
                    "Dot: run F R U R' U' F' three times",
                    "L-shape: hold it in the top-left and run F R U R' U' F' twice",
                    "Line: hold it horizontal and run F R U R' U' F' once",
                ],
                &["F R U R' U' F'"],
            ),
            stage(
                "yellow-edges",
                "Yellow Edges",
                "With the yellow cross in place, cycle the cross edges until \
                 each one's side color matches its center.",
                [
                    "WWWWWWWWW",
                    "OOOOOO*O*",
                    "GGGGGG*G*",
                    "RRRRRR*R*",
                    "BBBBBB*B*",
                    "*Y*YYY*Y*",
                ],
                &[
                    "Check which cross edges already match their centers",
                    "Two adjacent matches: put them at the back and right, then run the swap once",
                    "One or zero matches: run the swap, then re-evaluate",
                ],
                &["R U R' U R U U R' U"],
            ),
            stage(
                "yellow-corners-position",
                "Position Yellow Corners",
                "Move the four last-layer corners to the correct slots, \
                 ignoring their twist, by cycling three corners around a \
                 fixed one.",
                [
                    "WWWWWWWWW",
                    "OOOOOO*O*",
                    "GGGGGG*G*",
                    "RRRRRR*R*",
                    "BBBBBB*B*",
                    "*Y*YYY*Y*",
                ],
                &[
                    "Find a corner whose color set already matches its slot, ignoring twist",
                    "Hold it at the front-right and run the cycle; that corner stays put",
                    "No corner correct: run the cycle once and look again",
                ],
                &["U R U' L' U R' U' L"],
            ),
            stage(
                "yellow-corners-orient",
                "Orient Yellow Corners",
                "Twist each last-layer corner in place until the whole \
                 yellow face shows, finishing the cube.",
                [
                    "WWWWWWWWW",
                    "OOOOOOOOO",
                    "GGGGGGGGG",
                    "RRRRRRRRR",
                    "BBBBBBBBB",
                    "YYYYYYYYY",
                ],
                &[
                    "Hold an unoriented corner at the front-right",
                    "Repeat R' D' R D until its yellow sticker points down, usually two or four times",
                    "Turn only the last layer to bring the next corner into place",
                    "The cube may look scrambled mid-way; it resolves on the final corner",
                ],
                &["R' D' R D"],
            ),
        ];
        Curriculum::new(stages).expect("built-in curriculum is valid")
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facelet::SOLVED_FACELETS;
    use crate::types::Move;

    #[test]
    fn beginner_has_seven_stages_in_order() {
        let curriculum = Curriculum::beginner();
        let ids: Vec<&str> = curriculum.stages().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "white-cross",
                "white-corners",
                "middle-layer",
                "yellow-cross",
                "yellow-edges",
                "yellow-corners-position",
                "yellow-corners-orient",
            ]
        );
    }

    #[test]
    fn every_stage_has_metadata_and_hints() {
        for stage in Curriculum::beginner().stages() {
            assert!(!stage.name.is_empty());
            assert!(!stage.description.is_empty());
            assert!(!stage.hints.is_empty(), "stage {}", stage.id);
            assert!(!stage.algorithm.is_empty(), "stage {}", stage.id);
        }
    }

    #[test]
    fn solved_state_matches_every_stage_target() {
        // Each target is a relaxation of the solved state, so the solved
        // string must satisfy all of them.
        for stage in Curriculum::beginner().stages() {
            assert!(
                stage.target_pattern.matches(SOLVED_FACELETS),
                "stage {}",
                stage.id
            );
        }
    }

    #[test]
    fn final_stage_target_is_the_solved_state() {
        let curriculum = Curriculum::beginner();
        let last = curriculum.stage_clamped(curriculum.len() - 1);
        assert_eq!(last.target_pattern.as_str(), SOLVED_FACELETS);
    }

    #[test]
    fn recommended_algorithms_parse_as_move_sequences() {
        for stage in Curriculum::beginner().stages() {
            for alg in &stage.algorithm {
                assert!(
                    Move::parse_sequence(alg).is_ok(),
                    "stage {} algorithm {:?}",
                    stage.id,
                    alg
                );
            }
        }
    }
}
