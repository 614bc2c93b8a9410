//! Smoke check for a Qdrant-compatible vector database.
//!
//! Drops and recreates one collection, upserts a fixed batch of six points,
//! and verifies the exact count. Status lines go to the supplied writer,
//! diagnostics go through `tracing`.

pub mod report;
pub mod runner;
pub mod telemetry;

pub use report::Reporter;
pub use runner::{run, RunError, RunOutcome};
