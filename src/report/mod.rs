pub mod text;

use std::path::PathBuf;

use crate::model::risk::RiskRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct ColorStat {
    pub color: String,
    pub members: usize,
    pub mean_score: f64,
    pub max_score: f64,
    pub natural_fit: usize,
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub persons_total: usize,
    pub persons_kept: usize,
    pub jobs_total: usize,
    pub jobs_kept: usize,
    pub margin: f64,
    pub n_records: usize,
    pub colors: Vec<ColorStat>,
}

pub fn format_f64_3(v: f64) -> String {
    format!("{:.3}", v)
}

/// Risk statistics for each `(color, profile members)` pair, in the given order.
pub fn color_stats(records: &[RiskRecord], members: &[(String, usize)]) -> Vec<ColorStat> {
    members
        .iter()
        .map(|(color, n)| {
            let scores: Vec<f64> = records
                .iter()
                .filter(|r| &r.color == color)
                .map(|r| r.score)
                .collect();
            let natural_fit = records
                .iter()
                .filter(|r| &r.color == color && r.is_natural_fit())
                .count();
            ColorStat {
                color: color.clone(),
                members: *n,
                mean_score: mean(&scores),
                max_score: scores.iter().copied().fold(0.0, f64::max),
                natural_fit,
            }
        })
        .collect()
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
