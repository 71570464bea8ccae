//! Aligned residual series.

use crate::{LogError, LogResult};
use fc_core::Real;
use serde::{Deserialize, Serialize};

/// Time-aligned residual series, one entry per solver iteration.
/// Index `i` of every series refers to the same iteration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResidualProfile {
    pub time: Vec<Real>,
    pub p_rgh: Vec<Real>,
    pub omega: Vec<Real>,
    pub k: Vec<Real>,
}

impl ResidualProfile {
    /// Number of aligned iterations.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Each residual series must line up index-for-index with the time
    /// series; anything else means the log had an unexpected shape
    /// (e.g. a variable missing on some iterations).
    pub fn check_aligned(&self) -> LogResult<()> {
        let time_len = self.time.len();
        let lengths: [(&'static str, usize); 3] = [
            ("p_rgh", self.p_rgh.len()),
            ("omega", self.omega.len()),
            ("k", self.k.len()),
        ];
        for (series, len) in lengths {
            if len != time_len {
                return Err(LogError::SeriesLengthMismatch {
                    series,
                    len,
                    time_len,
                });
            }
        }
        Ok(())
    }
}
