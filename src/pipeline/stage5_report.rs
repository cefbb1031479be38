use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::model::risk::RiskRecord;
use crate::report::format_f64_3;

pub const REPORT_HEADER: [&str; 4] = ["Job", "Your Color", "Burnout Risk Score", "Burnout Reason"];

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error writing report: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error writing report: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    job: &'a str,
    color: &'a str,
    score: String,
    reason: String,
}

impl<'a> From<&'a RiskRecord> for ReportRow<'a> {
    fn from(record: &'a RiskRecord) -> Self {
        Self {
            job: record.job.as_deref().unwrap_or(""),
            color: &record.color,
            score: format_f64_3(record.score),
            reason: record.reason(),
        }
    }
}

pub fn render_report_csv(records: &[RiskRecord]) -> Result<Vec<u8>, ReportError> {
    let mut w = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    w.write_record(REPORT_HEADER)?;
    for record in records {
        w.serialize(ReportRow::from(record))?;
    }
    w.into_inner().map_err(|e| ReportError::Io(e.into_error()))
}

/// Writes the whole table in one go, replacing any previous report.
pub fn write_report(records: &[RiskRecord], path: &Path) -> Result<(), ReportError> {
    let bytes = render_report_csv(records)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
