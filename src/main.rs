//! shopfront CLI entry point
//!
//! Dispatches to `cli::run` and exits non-zero on a fatal error. The error
//! has already been logged as a structured event by then.

use shopfront::cli;

fn main() {
    if cli::run().is_err() {
        std::process::exit(1);
    }
}
