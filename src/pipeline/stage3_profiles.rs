use std::collections::BTreeMap;

use tracing::debug;

use crate::model::dimensions::DIM_COUNT;
use crate::model::profiles::{Profile, ProfileSet};
use crate::model::records::PersonRecord;
use crate::pipeline::stage2_normalize::NormalizedTable;

#[derive(Debug, Clone, Default)]
struct Accumulator {
    sum: [f64; DIM_COUNT],
    count: usize,
}

impl Accumulator {
    fn push(&mut self, values: &[f64; DIM_COUNT]) {
        for (s, v) in self.sum.iter_mut().zip(values) {
            *s += v;
        }
        self.count += 1;
    }

    fn means(&self) -> [f64; DIM_COUNT] {
        let n = self.count as f64;
        self.sum.map(|s| s / n)
    }
}

/// Groups normalized person rows by their color, taken from the source row.
/// Rows without a color do not form a category.
pub fn aggregate(normalized: &NormalizedTable, persons: &[PersonRecord]) -> ProfileSet {
    let mut groups: BTreeMap<&str, Accumulator> = BTreeMap::new();

    for (source_row, values) in normalized.rows() {
        match persons.get(source_row).and_then(|p| p.color.as_deref()) {
            Some(color) => groups.entry(color).or_default().push(values),
            None => debug!(row = source_row, "person row has no color; not grouped"),
        }
    }

    let profiles = groups
        .into_iter()
        .map(|(color, acc)| Profile {
            color: color.to_string(),
            means: acc.means(),
            members: acc.count,
        })
        .collect();

    ProfileSet { profiles }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_profiles.rs"]
mod tests;
