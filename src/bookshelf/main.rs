//! # Shelf CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/bookshelf/cli/)                             │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Logging setup + dispatch (commands.rs)                   │
//! │  - Terminal rendering via minijinja templates (render.rs)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  bookshelf library (api.rs and inward)                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Terminal output is produced by feeding the library's `ShelfView` into
//! templates; the CLI commands only print the rendered strings.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
