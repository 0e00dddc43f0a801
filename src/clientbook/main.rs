//! # Clientbook CLI
//!
//! The binary is intentionally thin: the terminal client lives in `cli/`, while this file
//! only invokes `cli::run()` and turns an error into an exit code. Everything from the
//! library's `api` inward is UI agnostic; see the crate-level docs of `clientbook`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
