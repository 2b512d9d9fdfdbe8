//! nativefier-options - resolve the options for wrapping a web page into a
//! desktop app and print them as JSON.

use nativefier_options::cli;
use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            for suggestion in e.recovery_suggestions() {
                eprintln!("  - {}", suggestion);
            }
            1
        }
    };

    process::exit(exit_code);
}
