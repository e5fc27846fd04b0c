//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use qube_core::{CubeError, CubeSession, Curriculum, Facelets, Move, SolveTracker, Stage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// CURRICULUM LOADING
// =============================================================================

/// Maximum curriculum file size (1 MB). A hand-written stage file is a few
/// kilobytes; anything larger is a mistake.
const MAX_CURRICULUM_FILE_SIZE: u64 = 1024 * 1024;

/// On-disk curriculum layout: a TOML file with `[[stages]]` tables.
#[derive(Debug, Deserialize)]
struct CurriculumFile {
    stages: Vec<Stage>,
}

/// Parse a TOML curriculum document into a validated curriculum.
fn parse_curriculum(toml_text: &str) -> Result<Curriculum, CubeError> {
    let file: CurriculumFile = toml::from_str(toml_text)
        .map_err(|e| CubeError::InvalidCurriculum(format!("curriculum TOML: {}", e)))?;
    Curriculum::new(file.stages)
}

/// Build the tracker: the built-in beginner curriculum, or one loaded from
/// a TOML file when `--curriculum` was given.
pub fn load_tracker(path: Option<&Path>) -> Result<SolveTracker, CubeError> {
    let Some(path) = path else {
        return Ok(SolveTracker::default());
    };

    let metadata = std::fs::metadata(path).map_err(|e| {
        CubeError::InvalidCurriculum(format!("cannot read '{}': {}", path.display(), e))
    })?;
    if metadata.len() > MAX_CURRICULUM_FILE_SIZE {
        return Err(CubeError::InvalidCurriculum(format!(
            "curriculum file '{}' is {} bytes, maximum is {}",
            path.display(),
            metadata.len(),
            MAX_CURRICULUM_FILE_SIZE
        )));
    }

    let text = std::fs::read_to_string(path).map_err(|e| {
        CubeError::InvalidCurriculum(format!("cannot read '{}': {}", path.display(), e))
    })?;
    let curriculum = parse_curriculum(&text)?;
    tracing::info!(
        stages = curriculum.len(),
        path = %path.display(),
        "loaded curriculum"
    );
    Ok(SolveTracker::new(curriculum))
}

// =============================================================================
// SCRAMBLE GENERATION
// =============================================================================

/// Face-turn tokens used for scrambles. Whole-cube rotations are excluded:
/// they reorient without mixing.
const SCRAMBLE_TOKENS: [&str; 12] = [
    "U", "U'", "D", "D'", "L", "L'", "R", "R'", "F", "F'", "B", "B'",
];

/// Generate a scramble of `length` face turns, never turning the same face
/// twice in a row.
fn generate_scramble(rng: &mut StdRng, length: usize) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::with_capacity(length);
    let mut last_face = None;
    while tokens.len() < length {
        let pick = SCRAMBLE_TOKENS[rng.random_range(0..SCRAMBLE_TOKENS.len())];
        let face = pick.as_bytes()[0];
        if last_face == Some(face) {
            continue;
        }
        last_face = Some(face);
        tokens.push(pick.to_string());
    }
    tokens
}

// =============================================================================
// APPLY COMMAND
// =============================================================================

/// Apply move tokens to a solved cube and print the resulting state.
pub fn cmd_apply(
    tracker: SolveTracker,
    json_mode: bool,
    tokens: &[String],
) -> Result<(), CubeError> {
    let moves = Move::parse_sequence(&tokens.join(" "))?;
    let mut session = CubeSession::with_tracker(tracker);
    for &mv in &moves {
        session.apply(mv);
    }

    let facelets = session.facelets();
    let guide = session.tracker().guide();

    if json_mode {
        let output = serde_json::json!({
            "moves": tokens.join(" "),
            "facelets": facelets.as_str(),
            "solved": facelets.is_solved(),
            "guide": guide,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Applied: {}", tokens.join(" "));
    println!("State:   {}", facelets);
    println!("Solved:  {}", facelets.is_solved());
    println!(
        "Stage:   {}/{} {} ({}%)",
        guide.stage_index + 1,
        guide.total_stages,
        guide.stage_name,
        guide.percent
    );

    Ok(())
}

// =============================================================================
// SCRAMBLE COMMAND
// =============================================================================

/// Generate and apply a random scramble.
pub fn cmd_scramble(
    tracker: SolveTracker,
    json_mode: bool,
    length: usize,
    seed: Option<u64>,
) -> Result<(), CubeError> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let tokens = generate_scramble(&mut rng, length);
    let moves = Move::parse_sequence(&tokens.join(" "))?;

    let mut session = CubeSession::with_tracker(tracker);
    let facelets = session.scramble(&moves);
    tracing::debug!(length, ?seed, "scramble applied");

    if json_mode {
        let output = serde_json::json!({
            "scramble": tokens.join(" "),
            "length": length,
            "seed": seed,
            "facelets": facelets.as_str(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Scramble: {}", tokens.join(" "));
    if let Some(seed) = seed {
        println!("Seed:     {}", seed);
    }
    println!("State:    {}", facelets);

    Ok(())
}

// =============================================================================
// GUIDE COMMAND
// =============================================================================

/// Apply move tokens one at a time, reporting stage progress after each.
pub fn cmd_guide(
    tracker: SolveTracker,
    json_mode: bool,
    tokens: &[String],
) -> Result<(), CubeError> {
    let moves = Move::parse_sequence(&tokens.join(" "))?;
    let mut session = CubeSession::with_tracker(tracker);

    let mut steps = Vec::with_capacity(moves.len());
    for (token, &mv) in tokens.iter().zip(&moves) {
        let update = session.apply(mv);
        if !json_mode {
            let marker = if update.advanced { " ✓ stage complete" } else { "" };
            println!(
                "{:<3} -> stage {}/{} {} ({}%){}",
                token,
                update.guide.stage_index + 1,
                update.guide.total_stages,
                update.guide.stage_name,
                update.guide.percent,
                marker
            );
        }
        steps.push(update);
    }

    let guide = session.tracker().guide();

    if json_mode {
        let output = serde_json::json!({
            "steps": steps,
            "guide": guide,
            "hints": session.tracker().current_hints(),
            "recommended": session.tracker().recommended_moves(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!();
    println!("Current stage: {}", guide.stage_name);
    println!("  {}", guide.description);
    for hint in session.tracker().current_hints() {
        println!("  hint: {}", hint);
    }
    for alg in session.tracker().recommended_moves() {
        println!("  try:  {}", alg);
    }

    Ok(())
}

// =============================================================================
// STAGES COMMAND
// =============================================================================

/// List the curriculum stages.
pub fn cmd_stages(tracker: SolveTracker, json_mode: bool) -> Result<(), CubeError> {
    let curriculum = tracker.curriculum();

    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(curriculum).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Curriculum ({} stages)", curriculum.len());
    println!("======================");
    for (i, stage) in curriculum.stages().iter().enumerate() {
        println!();
        println!("{}. {} [{}]", i + 1, stage.name, stage.id);
        println!("   {}", stage.description);
        println!("   target: {}", stage.target_pattern);
        for alg in &stage.algorithm {
            println!("   alg: {}", alg);
        }
    }

    Ok(())
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Validate a facelet string and report which stage targets it satisfies.
pub fn cmd_check(tracker: SolveTracker, json_mode: bool, input: &str) -> Result<(), CubeError> {
    let facelets = Facelets::parse(input)?;
    let matched: Vec<&str> = tracker
        .curriculum()
        .stages()
        .iter()
        .filter(|stage| stage.target_pattern.matches(facelets.as_str()))
        .map(|stage| stage.id.as_str())
        .collect();

    if json_mode {
        let output = serde_json::json!({
            "facelets": facelets.as_str(),
            "solved": facelets.is_solved(),
            "matched_stages": matched,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("State:  {}", facelets);
    println!("Solved: {}", facelets.is_solved());
    if matched.is_empty() {
        println!("Stages: no stage target matched");
    } else {
        println!("Stages: {}", matched.join(", "));
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
