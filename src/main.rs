//! Albatross Release - signing credential resolution and release APK finalization.
//!
//! Invoked by the build orchestrator around the release packaging task.
//! Exit code 0 also covers the silent no-op cases (no output directory, no
//! artifact); any surfaced error exits with 1.

use albatross_release::cli;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            for suggestion in e.recovery_suggestions() {
                eprintln!("  → {}", suggestion);
            }
            1
        }
    };

    process::exit(exit_code);
}
