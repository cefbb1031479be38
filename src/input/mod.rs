use std::path::{Path, PathBuf};

pub mod cells;
pub mod jobs;
pub mod persons;

pub use jobs::load_job_table;
pub use persons::load_person_table;

use crate::model::records::{JobRecord, PersonRecord};

/// Header of the categorical column in the person CSV.
pub const COLOR_COLUMN: &str = "Final color";
/// Header of the job title column in the job workbook.
pub const JOB_TITLE_COLUMN: &str = "Row Labels";

pub const DEFAULT_JOB_SHEET: &str = "Sheet1";
/// Absolute 0-based sheet row holding the job headers; one title row precedes it.
pub const DEFAULT_HEADER_ROW: u32 = 1;

#[derive(Debug, Clone)]
pub struct PersonTable {
    pub path: PathBuf,
    pub rows: Vec<PersonRecord>,
}

#[derive(Debug, Clone)]
pub struct JobTable {
    pub path: PathBuf,
    pub sheet: String,
    pub rows: Vec<JobRecord>,
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("cannot find {}", .0.display())]
    Missing(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error(
        "error reading workbook {}: {message}\nhint: re-save the file as .xlsx (Office Open XML workbook) and retry",
        path.display()
    )]
    Workbook { path: PathBuf, message: String },

    #[error(
        "sheet '{sheet}' not found in {} (available: {}); pass --sheet to choose another",
        path.display(),
        available.join(", ")
    )]
    SheetNotFound {
        path: PathBuf,
        sheet: String,
        available: Vec<String>,
    },

    #[error("sheet '{sheet}' in {} has no header on row {}", path.display(), u64::from(*row) + 1)]
    HeaderRowMissing {
        path: PathBuf,
        sheet: String,
        row: u32,
    },

    #[error("missing column '{column}' in {}", path.display())]
    MissingColumn { path: PathBuf, column: String },
}

/// Fails with [`InputError::Missing`] unless `path` is an existing file.
pub fn ensure_exists(path: &Path) -> Result<(), InputError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(InputError::Missing(path.to_path_buf()))
    }
}

/// Maps each required header to its column position.
pub(crate) fn locate_columns<const N: usize>(
    path: &Path,
    headers: &[String],
    required: [&str; N],
) -> Result<[usize; N], InputError> {
    let mut out = [0usize; N];
    for (slot, name) in out.iter_mut().zip(required) {
        *slot = headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| InputError::MissingColumn {
                path: path.to_path_buf(),
                column: name.to_string(),
            })?;
    }
    Ok(out)
}

/// Header cleanup shared by both loaders.
pub(crate) fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_string()
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
