//! Command Line Interface (CLI) layer for the conversion binary.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the scene conversion flow.
//! It wires user-provided options to the underlying library functionality
//! exposed via `insarviz::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
