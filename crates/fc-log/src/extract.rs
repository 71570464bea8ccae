//! Residual extraction from raw solver log lines.
//!
//! Two passes over the log, both driven by line content rather than line
//! numbers: one pulls iteration timestamps from `Time = <t>` markers, the
//! other pulls `Final residual` report lines and reduces them to one value
//! per iteration per tracked variable.

use crate::profile::ResidualProfile;
use crate::{LogError, LogResult, RawLog};
use fc_core::{ensure_finite, Real};

/// Iteration markers start with this token, anchored at the line start.
const TIME_PREFIX: &str = "Time";

/// `Time = 0.245` — token 2 is the timestamp.
const TIME_VALUE_TOKEN: usize = 2;

/// Report lines contain this marker immediately followed by a digit.
const REPORT_MARKER: &str = "Final residual = ";

/// Solver announcement that opens the turbulence block, terminating the
/// pressure sub-loop of the current iteration.
const SMOOTH_SOLVER: &str = "smoothSolver:";

/// Token layout of a comma-normalized report line:
///
/// ```text
/// smoothSolver:  Solving for k, Initial residual = 0.045, Final residual = 3.4e-06, No Iterations 3
/// 0              1       2   3  4       5        6 7      8     9        10 11      12 13         14
/// ```
///
/// The fixed offsets are part of the log format contract.
const VARIABLE_TOKEN: usize = 3;
const RESIDUAL_TOKEN: usize = 11;

/// Tracked solver variables.
pub const PRESSURE: &str = "p_rgh";
pub const TURB_KINETIC_ENERGY: &str = "k";
pub const TURB_FREQUENCY: &str = "omega";

/// One matched report line, comma-normalized and whitespace-tokenized.
/// Ephemeral: lives only for the duration of extraction.
#[derive(Debug, Clone)]
pub struct ReportLine {
    line_no: usize,
    raw: String,
    tokens: Vec<String>,
}

impl ReportLine {
    fn new(line_no: usize, line: &str) -> Self {
        // A subset of report lines embed a comma-separated value list;
        // commas become spaces so all of them tokenize uniformly.
        let tokens = line
            .replace(',', " ")
            .split_whitespace()
            .map(str::to_owned)
            .collect();
        Self {
            line_no,
            raw: line.to_owned(),
            tokens,
        }
    }

    fn token(&self, idx: usize) -> Option<&str> {
        self.tokens.get(idx).map(String::as_str)
    }

    /// Solver-type announcement, e.g. `smoothSolver:` or `DICPCG:`.
    pub fn solver(&self) -> Option<&str> {
        self.token(0)
    }

    /// Name of the variable this line reports on.
    pub fn variable(&self) -> Option<&str> {
        self.token(VARIABLE_TOKEN)
    }

    /// Final residual value, parsed from its fixed token position.
    pub fn final_residual(&self) -> LogResult<Real> {
        let token = self
            .token(RESIDUAL_TOKEN)
            .ok_or_else(|| malformed(self.line_no, &self.raw, "missing residual token"))?;
        token
            .parse()
            .map_err(|_| malformed(self.line_no, &self.raw, "unparseable residual value"))
    }
}

fn malformed(line_no: usize, line: &str, what: &'static str) -> LogError {
    LogError::MalformedResidualLine {
        line_no,
        what,
        line: line.to_owned(),
    }
}

fn is_time_marker(line: &str) -> bool {
    line.starts_with(TIME_PREFIX)
}

fn is_report_line(line: &str) -> bool {
    match line.find(REPORT_MARKER) {
        Some(pos) => line[pos + REPORT_MARKER.len()..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit()),
        None => false,
    }
}

/// Timestamps of all solver iterations, in file order.
///
/// The first `Time` line in the whole log is the startup banner printed
/// before the first iteration begins and is excluded.
pub fn extract_times(log: &RawLog) -> LogResult<Vec<Real>> {
    let mut times = Vec::new();
    let mut seen_banner = false;
    for (line_no, line) in log.numbered_lines() {
        if !is_time_marker(line) {
            continue;
        }
        if !seen_banner {
            seen_banner = true;
            continue;
        }
        let token = line
            .split_whitespace()
            .nth(TIME_VALUE_TOKEN)
            .ok_or_else(|| malformed(line_no, line, "missing timestamp token"))?;
        let value: Real = token
            .parse()
            .map_err(|_| malformed(line_no, line, "unparseable timestamp"))?;
        let value = ensure_finite(value, "timestamp")
            .map_err(|_| malformed(line_no, line, "non-finite timestamp"))?;
        times.push(value);
    }
    tracing::debug!(count = times.len(), "extracted time series");
    Ok(times)
}

/// All final-residual report lines, in file order, normalized and tokenized.
pub fn collect_reports(log: &RawLog) -> Vec<ReportLine> {
    let reports: Vec<ReportLine> = log
        .numbered_lines()
        .filter(|(_, line)| is_report_line(line))
        .map(|(line_no, line)| ReportLine::new(line_no, line))
        .collect();
    tracing::debug!(count = reports.len(), "collected report lines");
    reports
}

/// Every report for `name` contributes one value, in file order. One report
/// per iteration is expected for the turbulence variables.
pub fn residuals_for(reports: &[ReportLine], name: &str) -> LogResult<Vec<Real>> {
    reports
        .iter()
        .filter(|report| report.variable() == Some(name))
        .map(ReportLine::final_residual)
        .collect()
}

/// `p_rgh` is re-solved once per pressure-correction sub-iteration; only the
/// last sub-iteration holds the converged value. A `p_rgh` report is kept
/// when the immediately following report line opens the turbulence block
/// (`smoothSolver:`). The file's final report line has no successor and is
/// never kept.
pub fn pressure_residuals(reports: &[ReportLine]) -> LogResult<Vec<Real>> {
    let mut values = Vec::new();
    for pair in reports.windows(2) {
        let (report, next) = (&pair[0], &pair[1]);
        if report.variable() == Some(PRESSURE) && next.solver() == Some(SMOOTH_SOLVER) {
            values.push(report.final_residual()?);
        }
    }
    Ok(values)
}

/// Full extraction: time series plus the three residual series, checked for
/// index alignment.
pub fn extract_profile(log: &RawLog) -> LogResult<ResidualProfile> {
    let time = extract_times(log)?;
    let reports = collect_reports(log);

    let profile = ResidualProfile {
        time,
        p_rgh: pressure_residuals(&reports)?,
        omega: residuals_for(&reports, TURB_FREQUENCY)?,
        k: residuals_for(&reports, TURB_KINETIC_ENERGY)?,
    };
    profile.check_aligned()?;
    Ok(profile)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    struct Iteration {
        time: f64,
        p_rgh_subs: Vec<f64>,
        omega: f64,
        k: f64,
    }

    fn iteration() -> impl Strategy<Value = Iteration> {
        (
            1e-6_f64..1e3,
            prop::collection::vec(1e-12_f64..1.0, 1..4),
            1e-12_f64..1.0,
            1e-12_f64..1.0,
        )
            .prop_map(|(time, p_rgh_subs, omega, k)| Iteration {
                time,
                p_rgh_subs,
                omega,
                k,
            })
    }

    fn render_log(iterations: &[Iteration]) -> String {
        let mut text = String::from("Time = 0\n\n");
        for it in iterations {
            text.push_str(&format!("Time = {}\n\n", it.time));
            for sub in &it.p_rgh_subs {
                text.push_str(&format!(
                    "DICPCG:  Solving for p_rgh, Initial residual = 1, Final residual = {sub}, No Iterations 10\n"
                ));
            }
            text.push_str(&format!(
                "smoothSolver:  Solving for omega, Initial residual = 1, Final residual = {}, No Iterations 2\n",
                it.omega
            ));
            text.push_str(&format!(
                "smoothSolver:  Solving for k, Initial residual = 1, Final residual = {}, No Iterations 2\n",
                it.k
            ));
        }
        text
    }

    proptest! {
        #[test]
        fn series_stay_aligned(iterations in prop::collection::vec(iteration(), 0..20)) {
            let log = RawLog::from_text("log.run", &render_log(&iterations));
            let profile = extract_profile(&log).unwrap();

            prop_assert_eq!(profile.len(), iterations.len());
            prop_assert!(profile.check_aligned().is_ok());

            for (i, it) in iterations.iter().enumerate() {
                prop_assert_eq!(profile.time[i], it.time);
                // Only the last pressure sub-iteration survives.
                prop_assert_eq!(profile.p_rgh[i], *it.p_rgh_subs.last().unwrap());
                prop_assert_eq!(profile.omega[i], it.omega);
                prop_assert_eq!(profile.k[i], it.k);
            }
        }
    }
}
