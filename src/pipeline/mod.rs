pub mod stage2_normalize;
pub mod stage3_profiles;
pub mod stage4_risk;
pub mod stage5_report;

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::input::{InputError, ensure_exists, load_job_table, load_person_table};
use crate::model::dimensions::Dimension;
use crate::model::thresholds::RiskParams;
use crate::pipeline::stage2_normalize::{NormalizedTable, normalize};
use crate::pipeline::stage3_profiles::aggregate;
use crate::pipeline::stage4_risk::compute_risk;
use crate::pipeline::stage5_report::{ReportError, write_report};
use crate::report::{RunSummary, color_stats};

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub persons_path: PathBuf,
    pub jobs_path: PathBuf,
    pub job_sheet: String,
    pub header_row: u32,
    pub output_path: PathBuf,
    pub params: RiskParams,
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Runs load, normalize, aggregate, score and write. Nothing is written
/// unless every earlier stage succeeded.
pub fn run_pipeline(config: &RunConfig) -> Result<RunSummary, PipelineError> {
    ensure_exists(&config.persons_path)?;
    ensure_exists(&config.jobs_path)?;
    info!("Files found! Loading data...");

    let persons = load_person_table(&config.persons_path)?;
    let jobs = load_job_table(&config.jobs_path, &config.job_sheet, config.header_row)?;
    info!(
        persons = persons.rows.len(),
        jobs = jobs.rows.len(),
        "Data loaded successfully!"
    );
    debug!(
        persons = %persons.path.display(),
        jobs = %jobs.path.display(),
        sheet = %jobs.sheet,
        "input sources"
    );

    let persons_norm = normalize(&persons.rows);
    let jobs_norm = normalize(&jobs.rows);
    info!(
        persons_kept = persons_norm.len(),
        persons_dropped = persons_norm.dropped,
        jobs_kept = jobs_norm.len(),
        jobs_dropped = jobs_norm.dropped,
        "normalized score tables"
    );
    log_column_stats("persons", &persons_norm);
    log_column_stats("jobs", &jobs_norm);

    if jobs_norm.is_empty() {
        warn!("no job row has numeric scores on every axis; the report will be empty");
    }

    let profiles = aggregate(&persons_norm, &persons.rows);
    if profiles.is_empty() {
        warn!("no color profile could be built; the report will be empty");
    }
    info!(
        colors = profiles.len(),
        "built color profiles: {}",
        profiles.colors().collect::<Vec<_>>().join(", ")
    );

    let records = compute_risk(&jobs_norm, &jobs.rows, &profiles, &config.params);
    info!(records = records.len(), margin = config.params.margin, "scored job/color pairs");

    write_report(&records, &config.output_path)?;

    let members = profiles
        .profiles
        .iter()
        .map(|p| (p.color.clone(), p.members))
        .collect::<Vec<_>>();

    Ok(RunSummary {
        output_path: config.output_path.clone(),
        persons_total: persons.rows.len(),
        persons_kept: persons_norm.len(),
        jobs_total: jobs.rows.len(),
        jobs_kept: jobs_norm.len(),
        margin: config.params.margin,
        n_records: records.len(),
        colors: color_stats(&records, &members),
    })
}

fn log_column_stats(table: &str, normalized: &NormalizedTable) {
    let Some(stats) = &normalized.stats else {
        return;
    };
    for dim in Dimension::ALL {
        let s = stats[dim.index()];
        debug!(table, axis = dim.label(), min = s.min, max = s.max, "raw score range");
    }
    for dim in normalized.constant_columns() {
        warn!(
            "{} column {} is constant across {} rows; scaling it to 0",
            table,
            dim.label(),
            normalized.len()
        );
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
