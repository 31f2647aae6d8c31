//! Command Line Interface (CLI) layer for seqren.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that turns a rename pass into
//! line-oriented status output. Library users should call `seqren::api`
//! directly instead.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
