use crate::model::dimensions::Dimension;

pub const NATURAL_FIT: &str = "Natural Fit";
const REASON_SEPARATOR: &str = " / ";

/// A dimension where job demand exceeds the profile by more than the margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StressFactor {
    pub dimension: Dimension,
    pub excess: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskRecord {
    pub job: Option<String>,
    pub color: String,
    pub score: f64,
    pub stress: Vec<StressFactor>,
}

impl RiskRecord {
    pub fn is_natural_fit(&self) -> bool {
        self.stress.is_empty()
    }

    pub fn reason(&self) -> String {
        format_reason(&self.stress)
    }
}

pub fn format_reason(stress: &[StressFactor]) -> String {
    if stress.is_empty() {
        return NATURAL_FIT.to_string();
    }
    stress
        .iter()
        .map(|s| format!("High {}", s.dimension.label()))
        .collect::<Vec<_>>()
        .join(REASON_SEPARATOR)
}
