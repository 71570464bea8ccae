//! Shared application service layer for foamcheck.
//!
//! One interface for both the CLI and GUI frontends: load a solver log,
//! extract the aligned residual profile, export artifacts, summarize.

pub mod error;
pub mod service;
pub mod summary;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use service::{export_csv, export_json, load_profile, DEFAULT_LOG_NAME};
pub use summary::{summarize, ProfileSummary, VariableSummary};
