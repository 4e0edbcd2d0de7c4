//! # CLI Behavior
//!
//! This is **one possible UI client** for bookshelf, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! Every invocation is one event against the shelf: the shelf is loaded, one
//! command runs to completion, the result is printed.
//!
//! ### Naked Execution (`shelf`)
//!
//! Running `shelf` with no arguments defaults to `shelf list`.
//!
//! ### Unknown ids
//!
//! `shelf complete 123` with an id that is not on the shelf changes nothing and
//! still exits successfully. Only real failures (unreadable data, write errors)
//! exit non-zero.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print output
//! - `render`: Output formatting (shelves, messages, config)
//! - `setup`: Argument parsing via clap, help text
//! - `styles`: Terminal styling
//! - `templates`: Output templates

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
