use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;

use crate::models::report::AggregateReport;
use crate::scraping::constants::{DATE_FORMAT, SLOT_FORMAT};

/// What a run ended up producing.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Written(String),
    NothingFound(String),
}

/// Prints the report and writes it to `output_file`, plus the CI key/value
/// lines when `github_output` is set. An empty report writes nothing.
pub fn publish(
    report: &AggregateReport,
    output_file: &Path,
    github_output: Option<&Path>,
    cutoff: Option<NaiveDate>,
) -> Result<Outcome> {
    if report.results.is_empty() {
        return Ok(Outcome::NothingFound(no_results_notice(cutoff)));
    }

    let json = report
        .to_pretty_json()
        .context("failed to serialize report")?;

    // open the CI file first so a bad path fails before anything is written
    let ci = match (github_output, report.earliest_overall.as_ref()) {
        (Some(path), Some(earliest)) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            let lines = format!(
                "earliest={}\nearliest_date={}\n",
                earliest.earliest_datetime.format(SLOT_FORMAT),
                earliest.earliest_datetime.format(DATE_FORMAT)
            );
            Some((file, path, lines))
        }
        _ => None,
    };

    fs::write(output_file, &json)
        .with_context(|| format!("failed to write {}", output_file.display()))?;
    info!("wrote report to {}", output_file.display());

    if let Some((mut file, path, lines)) = ci {
        if let Err(e) = file.write_all(lines.as_bytes()) {
            let _ = fs::remove_file(output_file);
            return Err(e).with_context(|| format!("failed to append to {}", path.display()));
        }
        info!("exported earliest slot to {}", path.display());
    }

    Ok(Outcome::Written(json))
}

fn no_results_notice(cutoff: Option<NaiveDate>) -> String {
    match cutoff {
        Some(cutoff) => format!(
            "No appointments found for target cities on or before {}",
            cutoff.format(DATE_FORMAT)
        ),
        None => "No appointments found for target cities".to_string(),
    }
}
