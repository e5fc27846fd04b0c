//! # Qube - Cube Engine CLI
//!
//! The main binary for the Qube deterministic cube engine.
//!
//! This application provides:
//! - Move application and facelet serialization
//! - Seedable scramble generation
//! - Staged solving guidance over a built-in or TOML-loaded curriculum
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │              apps/qube (THE BINARY)           │
//! │                                               │
//! │  ┌─────────────┐        ┌──────────────────┐  │
//! │  │   CLI       │        │  Curriculum I/O  │  │
//! │  │  (clap)     │        │  (toml files)    │  │
//! │  └──────┬──────┘        └────────┬─────────┘  │
//! │         │                        │            │
//! │         └───────────┬────────────┘            │
//! │                     ▼                         │
//! │             ┌───────────────┐                 │
//! │             │   qube-core   │                 │
//! │             │  (THE LOGIC)  │                 │
//! │             └───────────────┘                 │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Apply moves to a solved cube and print the facelet string
//! qube apply R U "R'" "U'"
//!
//! # Generate a reproducible scramble
//! qube scramble --length 20 --seed 42
//!
//! # Walk a sequence with stage guidance
//! qube guide F R U "R'" "U'" "F'"
//!
//! # Inspect the curriculum / validate a facelet string
//! qube stages
//! qube check WWWWWWWWWOOOOOOOOOGGGGGGGGGRRRRRRRRRBBBBBBBBBYYYYYYYYY
//! ```

mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Parse CLI arguments first: --verbose feeds the default log filter.
    let cli = cli::Cli::parse();

    // Initialize tracing — QUBE_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("QUBE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if cli.verbose { "qube=debug" } else { "qube=info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Display startup banner
    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Qube startup banner.
fn print_banner() {
    println!(
        r#"
   ██████╗ ██╗   ██╗██████╗ ███████╗
  ██╔═══██╗██║   ██║██╔══██╗██╔════╝
  ██║   ██║██║   ██║██████╔╝█████╗
  ██║▄▄ ██║██║   ██║██╔══██╗██╔══╝
  ╚██████╔╝╚██████╔╝██████╔╝███████╗
   ╚══▀▀═╝  ╚═════╝ ╚═════╝ ╚══════╝

  Cube Engine v{}

  Deterministic • Integer-Only • Guided
"#,
        env!("CARGO_PKG_VERSION")
    );
}
