//! webpify command line library
//!
//! Configuration, terminal handling, status output and the conversion run
//! orchestrator behind the `webpify` binary.

pub mod config;
pub mod error;
pub mod orchestrators;
pub mod output;
pub mod terminal;

pub use error::{CliError, ExitCode};
pub use orchestrators::{ConvertOrchestrator, RunOptions, RunReport, RunSummary};
