//! Pipeline services: load → extract → export.

use crate::AppResult;
use fc_log::{extract, RawLog, ResidualProfile};
use std::path::Path;

/// Default input log name when no path is given.
pub const DEFAULT_LOG_NAME: &str = "log.run";

/// Load a solver log and extract the aligned residual profile.
pub fn load_profile(log_path: &Path) -> AppResult<ResidualProfile> {
    let log = RawLog::load(log_path)?;
    tracing::debug!(
        path = %log_path.display(),
        lines = log.lines().len(),
        "loaded solver log"
    );
    let profile = extract::extract_profile(&log)?;
    tracing::debug!(iterations = profile.len(), "extracted residual profile");
    Ok(profile)
}

pub fn export_csv(profile: &ResidualProfile, path: &Path) -> AppResult<()> {
    fc_results::write_csv(profile, path)?;
    Ok(())
}

pub fn export_json(profile: &ResidualProfile, path: &Path) -> AppResult<()> {
    fc_results::write_json(profile, path)?;
    Ok(())
}
