use std::path::Path;

use tracing::debug;

use crate::input::cells::{coerce_text, text_label};
use crate::input::{COLOR_COLUMN, InputError, PersonTable, locate_columns, normalize_header};
use crate::model::dimensions::{DIM_COUNT, Dimension};
use crate::model::records::PersonRecord;

pub fn load_person_table(path: &Path) -> Result<PersonTable, InputError> {
    let csv_err = |source: csv::Error| InputError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(normalize_header)
        .collect();

    let score_cols: [usize; DIM_COUNT] =
        locate_columns(path, &headers, Dimension::ALL.map(Dimension::person_column))?;
    let [color_col] = locate_columns(path, &headers, [COLOR_COLUMN])?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        let field = |idx: usize| record.get(idx).unwrap_or("");
        rows.push(PersonRecord {
            scores: score_cols.map(|col| coerce_text(field(col))),
            color: text_label(field(color_col)),
        });
    }

    debug!(path = %path.display(), rows = rows.len(), "person table loaded");

    Ok(PersonTable {
        path: path.to_path_buf(),
        rows,
    })
}
