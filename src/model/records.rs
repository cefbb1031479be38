use crate::model::dimensions::DIM_COUNT;

/// Raw per-axis scores, `None` where the source cell was not numeric.
pub type RawScores = [Option<f64>; DIM_COUNT];

/// Row shape shared by the tables that go through min-max normalization.
pub trait ScoreRecord {
    fn scores(&self) -> RawScores;
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersonRecord {
    pub scores: RawScores,
    pub color: Option<String>,
}

impl ScoreRecord for PersonRecord {
    fn scores(&self) -> RawScores {
        self.scores
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobRecord {
    pub title: Option<String>,
    pub scores: RawScores,
}

impl ScoreRecord for JobRecord {
    fn scores(&self) -> RawScores {
        self.scores
    }
}
