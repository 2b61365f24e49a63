//! Command-line front end for the product price list.
//!
//! One invocation performs one command against one data file: load, apply
//! at most one change or query, print, and save only if something changed.

pub mod app;
pub mod args;

pub use app::{Outcome, execute};
pub use args::{Cli, Command, normalize_args};
