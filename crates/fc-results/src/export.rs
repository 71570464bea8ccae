//! Tabular export of an aligned residual profile.
//!
//! Column order is fixed: `Time,p_rgh,omega,k`, one row per iteration.
//! The exporter assumes the profile is already index-aligned; alignment is
//! the extractor's invariant, not re-checked here.

use crate::{ResultsError, ResultsResult};
use fc_core::Real;
use fc_log::ResidualProfile;
use std::fs;
use std::path::Path;

pub const CSV_HEADER: &str = "Time,p_rgh,omega,k";

/// Default artifact name, overwritten on each run.
pub const DEFAULT_CSV_NAME: &str = "residue_profile.csv";

pub fn write_csv(profile: &ResidualProfile, path: &Path) -> ResultsResult<()> {
    // Build CSV in memory; profiles are one row per iteration, small.
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');
    for i in 0..profile.len() {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            profile.time[i], profile.p_rgh[i], profile.omega[i], profile.k[i]
        ));
    }
    fs::write(path, csv)?;
    Ok(())
}

/// Parse a previously exported profile back into memory.
pub fn read_csv(path: &Path) -> ResultsResult<ResidualProfile> {
    let content = fs::read_to_string(path)?;
    let mut lines = content.lines().enumerate();

    match lines.next() {
        Some((_, header)) if header.trim() == CSV_HEADER => {}
        Some((_, header)) => {
            return Err(ResultsError::MalformedCsv {
                line_no: 1,
                message: format!("unexpected header: {header}"),
            });
        }
        None => {
            return Err(ResultsError::MalformedCsv {
                line_no: 1,
                message: "empty file".to_string(),
            });
        }
    }

    let mut profile = ResidualProfile::default();
    for (idx, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 4 {
            return Err(ResultsError::MalformedCsv {
                line_no,
                message: format!("expected 4 fields, found {}", fields.len()),
            });
        }
        profile.time.push(parse_field(line_no, fields[0])?);
        profile.p_rgh.push(parse_field(line_no, fields[1])?);
        profile.omega.push(parse_field(line_no, fields[2])?);
        profile.k.push(parse_field(line_no, fields[3])?);
    }
    Ok(profile)
}

fn parse_field(line_no: usize, field: &str) -> ResultsResult<Real> {
    field
        .trim()
        .parse()
        .map_err(|_| ResultsError::MalformedCsv {
            line_no,
            message: format!("unparseable value: {field}"),
        })
}

/// Pretty-printed JSON dump of the full profile, for downstream scripting.
pub fn write_json(profile: &ResidualProfile, path: &Path) -> ResultsResult<()> {
    let json = serde_json::to_string_pretty(profile)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_layout_matches_contract() {
        let profile = ResidualProfile {
            time: vec![0.005, 0.01],
            p_rgh: vec![0.00154, 0.00089],
            omega: vec![0.00577, 0.00312],
            k: vec![0.0454, 0.0221],
        };
        let path = std::env::temp_dir().join("fc_results_layout.csv");
        write_csv(&profile, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("Time,p_rgh,omega,k"));
        assert_eq!(lines.next(), Some("0.005,0.00154,0.00577,0.0454"));
        assert_eq!(lines.next(), Some("0.01,0.00089,0.00312,0.0221"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn read_back_rejects_foreign_header() {
        let path = std::env::temp_dir().join("fc_results_bad_header.csv");
        fs::write(&path, "a,b,c,d\n1,2,3,4\n").unwrap();
        let err = read_csv(&path).unwrap_err();
        assert!(matches!(err, ResultsError::MalformedCsv { line_no: 1, .. }));
    }

    #[test]
    fn read_back_reports_bad_value_with_line() {
        let path = std::env::temp_dir().join("fc_results_bad_value.csv");
        fs::write(&path, "Time,p_rgh,omega,k\n0.005,oops,0.1,0.2\n").unwrap();
        match read_csv(&path).unwrap_err() {
            ResultsError::MalformedCsv { line_no, message } => {
                assert_eq!(line_no, 2);
                assert!(message.contains("oops"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
