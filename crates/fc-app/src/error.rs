//! Error types for the fc-app service layer.

/// Application error type that wraps errors from the backend crates and
/// provides a unified interface for both CLI and GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Log error: {0}")]
    Log(#[from] fc_log::LogError),

    #[error("Export error: {0}")]
    Results(#[from] fc_results::ResultsError),
}

pub type AppResult<T> = Result<T, AppError>;
