//! Terminal-facing digest of an extracted profile.

use fc_core::Real;
use fc_log::ResidualProfile;
use serde::Serialize;

/// Per-variable residual digest. Reporting only: whether the run actually
/// converged is the engineer's call.
#[derive(Debug, Clone, Serialize)]
pub struct VariableSummary {
    pub name: &'static str,
    pub first: Real,
    pub last: Real,
    pub min: Real,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub iterations: usize,
    pub time_range: Option<(Real, Real)>,
    pub variables: Vec<VariableSummary>,
}

pub fn summarize(profile: &ResidualProfile) -> ProfileSummary {
    let time_range = match (profile.time.first(), profile.time.last()) {
        (Some(first), Some(last)) => Some((*first, *last)),
        _ => None,
    };

    let variables = [
        ("p_rgh", &profile.p_rgh),
        ("omega", &profile.omega),
        ("k", &profile.k),
    ]
    .into_iter()
    .filter_map(|(name, series)| variable_summary(name, series))
    .collect();

    ProfileSummary {
        iterations: profile.len(),
        time_range,
        variables,
    }
}

fn variable_summary(name: &'static str, series: &[Real]) -> Option<VariableSummary> {
    let first = *series.first()?;
    let last = *series.last()?;
    let min = series.iter().copied().fold(Real::INFINITY, Real::min);
    Some(VariableSummary {
        name,
        first,
        last,
        min,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reports_range_and_extremes() {
        let profile = ResidualProfile {
            time: vec![0.005, 0.01, 0.015],
            p_rgh: vec![1.5e-3, 4.0e-4, 9.0e-4],
            omega: vec![5.8e-3, 3.1e-3, 1.9e-3],
            k: vec![4.5e-2, 2.2e-2, 1.2e-2],
        };
        let summary = summarize(&profile);
        assert_eq!(summary.iterations, 3);
        assert_eq!(summary.time_range, Some((0.005, 0.015)));

        let p_rgh = &summary.variables[0];
        assert_eq!(p_rgh.name, "p_rgh");
        assert_eq!(p_rgh.first, 1.5e-3);
        assert_eq!(p_rgh.last, 9.0e-4);
        assert_eq!(p_rgh.min, 4.0e-4);
    }

    #[test]
    fn empty_profile_summarizes_without_panicking() {
        let summary = summarize(&ResidualProfile::default());
        assert_eq!(summary.iterations, 0);
        assert!(summary.time_range.is_none());
        assert!(summary.variables.is_empty());
    }
}
