//! # Qube CLI Module
//!
//! This module implements the CLI interface for Qube.
//!
//! ## Available Commands
//!
//! - `apply` - Apply move tokens and print the resulting facelet string
//! - `scramble` - Generate and apply a (seedable) random scramble
//! - `guide` - Apply move tokens with stage-by-stage solving guidance
//! - `stages` - List the curriculum stages
//! - `check` - Validate a facelet string and report matching stages

mod commands;

use clap::{Parser, Subcommand};
use qube_core::CubeError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Qube - Cube Engine
///
/// A deterministic 3x3 cube model with move kinematics, facelet
/// serialization, and staged solving guidance.
#[derive(Parser, Debug)]
#[command(name = "qube")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML curriculum file (defaults to the built-in beginner curriculum)
    #[arg(short = 'C', long, global = true)]
    pub curriculum: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long = "json", global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply move tokens to a solved cube and print the result
    Apply {
        /// Move tokens (U D L R F B, optionally primed; X Y Z for whole-cube)
        #[arg(required = true)]
        moves: Vec<String>,
    },

    /// Generate and apply a random scramble
    Scramble {
        /// Number of face turns in the scramble
        #[arg(short, long, default_value = "20")]
        length: usize,

        /// Seed for reproducible scrambles (random when omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Apply move tokens with stage guidance after each move
    Guide {
        /// Move tokens to walk through
        #[arg(required = true)]
        moves: Vec<String>,
    },

    /// List the curriculum stages
    Stages,

    /// Validate a 54-character facelet string and report matching stages
    Check {
        /// The facelet string (faces in U, L, F, R, B, D order)
        facelets: String,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), CubeError> {
    let tracker = load_tracker(cli.curriculum.as_deref())?;
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Apply { moves }) => cmd_apply(tracker, json_mode, &moves),
        Some(Commands::Scramble { length, seed }) => {
            cmd_scramble(tracker, json_mode, length, seed)
        }
        Some(Commands::Guide { moves }) => cmd_guide(tracker, json_mode, &moves),
        Some(Commands::Check { facelets }) => cmd_check(tracker, json_mode, &facelets),
        Some(Commands::Stages) | None => {
            // No subcommand - show the curriculum by default
            cmd_stages(tracker, json_mode)
        }
    }
}
