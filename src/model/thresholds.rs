#[derive(Debug, Clone)]
pub struct RiskParams {
    /// Minimum job-over-profile gap (exclusive) for a dimension to count.
    pub margin: f64,
}

impl RiskParams {
    pub const DEFAULT_MARGIN: f64 = 0.2;

    pub fn default_v1() -> Self {
        Self {
            margin: Self::DEFAULT_MARGIN,
        }
    }

    pub fn with_margin(margin: f64) -> Self {
        Self { margin }
    }
}

impl Default for RiskParams {
    fn default() -> Self {
        Self::default_v1()
    }
}
