//! fc-log: solver-log line loading and residual extraction.
//!
//! Parses the fixed OpenFOAM-style log convention: `Time = <t>` iteration
//! markers and `... Final residual = <v>, ...` report lines for the tracked
//! variables `p_rgh`, `k` and `omega`, reduced to one time-aligned series
//! per variable.

pub mod extract;
pub mod loader;
pub mod profile;

pub use extract::{collect_reports, extract_profile, extract_times, ReportLine};
pub use loader::RawLog;
pub use profile::ResidualProfile;

pub type LogResult<T> = Result<T, LogError>;

#[derive(thiserror::Error, Debug)]
pub enum LogError {
    #[error("Log not found or unreadable: {path}")]
    LogNotFound {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed residual line {line_no} ({what}): {line}")]
    MalformedResidualLine {
        line_no: usize,
        what: &'static str,
        line: String,
    },

    #[error("Series length mismatch: {series} has {len} values, time series has {time_len}")]
    SeriesLengthMismatch {
        series: &'static str,
        len: usize,
        time_len: usize,
    },
}
