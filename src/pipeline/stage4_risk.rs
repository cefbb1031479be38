use crate::model::dimensions::{DIM_COUNT, Dimension};
use crate::model::profiles::ProfileSet;
use crate::model::records::JobRecord;
use crate::model::risk::{RiskRecord, StressFactor};
use crate::model::thresholds::RiskParams;
use crate::pipeline::stage2_normalize::NormalizedTable;

/// Scores every surviving job row against every profile. Jobs are the outer
/// loop in table order, profiles the inner loop in set order.
pub fn compute_risk(
    jobs_normalized: &NormalizedTable,
    jobs: &[JobRecord],
    profiles: &ProfileSet,
    params: &RiskParams,
) -> Vec<RiskRecord> {
    let mut out = Vec::with_capacity(jobs_normalized.len() * profiles.len());

    for (source_row, job) in jobs_normalized.rows() {
        let title = jobs.get(source_row).and_then(|j| j.title.clone());
        for profile in &profiles.profiles {
            let (score, stress) = score_pair(job, &profile.means, params.margin);
            out.push(RiskRecord {
                job: title.clone(),
                color: profile.color.clone(),
                score,
                stress,
            });
        }
    }

    out
}

/// Directional distance of one job from one profile: the Euclidean norm of
/// the per-axis excesses that are strictly above `margin`.
pub fn score_pair(
    job: &[f64; DIM_COUNT],
    profile: &[f64; DIM_COUNT],
    margin: f64,
) -> (f64, Vec<StressFactor>) {
    let stress = stress_factors(job, profile, margin);
    if stress.is_empty() {
        return (0.0, stress);
    }
    let sum_sq: f64 = stress.iter().map(|s| s.excess * s.excess).sum();
    (sum_sq.sqrt(), stress)
}

pub fn stress_factors(
    job: &[f64; DIM_COUNT],
    profile: &[f64; DIM_COUNT],
    margin: f64,
) -> Vec<StressFactor> {
    Dimension::ALL
        .iter()
        .filter_map(|&dimension| {
            let diff = job[dimension.index()] - profile[dimension.index()];
            (diff > margin).then_some(StressFactor {
                dimension,
                excess: diff,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_risk.rs"]
mod tests;
