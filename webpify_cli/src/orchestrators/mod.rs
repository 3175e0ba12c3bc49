//! Command orchestrators
//!
//! Coordinates the CLI layer with the discovery and conversion services of
//! the core library.

pub mod convert_orchestrator;

pub use convert_orchestrator::{ConvertOrchestrator, RunOptions, RunReport, RunSummary};
