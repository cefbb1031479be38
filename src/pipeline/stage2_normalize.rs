use tracing::debug;

use crate::model::dimensions::{DIM_COUNT, Dimension};
use crate::model::records::ScoreRecord;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    pub min: f64,
    pub max: f64,
}

impl ColumnStats {
    pub fn is_constant(&self) -> bool {
        self.max == self.min
    }

    /// Min-max scales `v`; a constant column maps everything to 0.
    pub fn scale(&self, v: f64) -> f64 {
        if self.is_constant() {
            0.0
        } else {
            (v - self.min) / (self.max - self.min)
        }
    }
}

/// Surviving rows of a score table, each axis independently scaled to [0,1].
#[derive(Debug, Clone, Default)]
pub struct NormalizedTable {
    /// Position of each surviving row in the source table.
    pub source_rows: Vec<usize>,
    pub values: Vec<[f64; DIM_COUNT]>,
    /// `None` when no row survived.
    pub stats: Option<[ColumnStats; DIM_COUNT]>,
    pub dropped: usize,
}

impl NormalizedTable {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Axes whose surviving values were all equal and therefore scaled to 0.
    pub fn constant_columns(&self) -> Vec<Dimension> {
        match &self.stats {
            Some(stats) => Dimension::ALL
                .into_iter()
                .filter(|dim| stats[dim.index()].is_constant())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Iterates `(source_row, normalized values)` in source order.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &[f64; DIM_COUNT])> {
        self.source_rows.iter().copied().zip(self.values.iter())
    }
}

pub fn normalize<R: ScoreRecord>(rows: &[R]) -> NormalizedTable {
    let mut source_rows = Vec::with_capacity(rows.len());
    let mut raw = Vec::with_capacity(rows.len());

    for (idx, row) in rows.iter().enumerate() {
        match complete_scores(&row.scores()) {
            Some(values) => {
                source_rows.push(idx);
                raw.push(values);
            }
            None => debug!(row = idx, "dropping row with non-numeric score"),
        }
    }
    let dropped = rows.len() - raw.len();

    let Some(stats) = column_stats(&raw) else {
        return NormalizedTable {
            source_rows,
            values: Vec::new(),
            stats: None,
            dropped,
        };
    };

    let values: Vec<[f64; DIM_COUNT]> = raw
        .iter()
        .map(|row| std::array::from_fn(|d| stats[d].scale(row[d])))
        .collect();

    NormalizedTable {
        source_rows,
        values,
        stats: Some(stats),
        dropped,
    }
}

fn complete_scores(scores: &[Option<f64>; DIM_COUNT]) -> Option<[f64; DIM_COUNT]> {
    let mut out = [0.0; DIM_COUNT];
    for (slot, v) in out.iter_mut().zip(scores) {
        *slot = (*v)?;
    }
    Some(out)
}

fn column_stats(raw: &[[f64; DIM_COUNT]]) -> Option<[ColumnStats; DIM_COUNT]> {
    let first = *raw.first()?;
    let mut stats = first.map(|v| ColumnStats { min: v, max: v });
    for row in &raw[1..] {
        for (s, &v) in stats.iter_mut().zip(row) {
            s.min = s.min.min(v);
            s.max = s.max.max(v);
        }
    }
    Some(stats)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_normalize.rs"]
mod tests;
