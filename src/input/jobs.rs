use std::path::Path;

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use tracing::debug;

use crate::input::cells::{cell_is_empty, cell_label, coerce_cell};
use crate::input::{InputError, JOB_TITLE_COLUMN, JobTable, locate_columns, normalize_header};
use crate::model::dimensions::{DIM_COUNT, Dimension};
use crate::model::records::JobRecord;

/// Loads the job table from `sheet`, taking headers from absolute sheet row
/// `header_row` and data from the rows below it.
pub fn load_job_table(path: &Path, sheet: &str, header_row: u32) -> Result<JobTable, InputError> {
    let workbook_err = |message: String| InputError::Workbook {
        path: path.to_path_buf(),
        message,
    };

    let mut workbook: Sheets<_> =
        open_workbook_auto(path).map_err(|e| workbook_err(e.to_string()))?;

    let sheet_names = workbook.sheet_names().to_vec();
    if !sheet_names.iter().any(|name| name == sheet) {
        return Err(InputError::SheetNotFound {
            path: path.to_path_buf(),
            sheet: sheet.to_string(),
            available: sheet_names,
        });
    }

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| workbook_err(format!("failed to read sheet '{}': {}", sheet, e)))?;

    let rows = parse_job_rows(path, sheet, &range, header_row)?;
    debug!(path = %path.display(), sheet, rows = rows.len(), "job table loaded");

    Ok(JobTable {
        path: path.to_path_buf(),
        sheet: sheet.to_string(),
        rows,
    })
}

fn parse_job_rows(
    path: &Path,
    sheet: &str,
    range: &Range<Data>,
    header_row: u32,
) -> Result<Vec<JobRecord>, InputError> {
    let header_missing = || InputError::HeaderRowMissing {
        path: path.to_path_buf(),
        sheet: sheet.to_string(),
        row: header_row,
    };

    // The range starts at the first used cell, not at A1.
    let (start_row, _) = range.start().ok_or_else(header_missing)?;
    if header_row < start_row {
        return Err(header_missing());
    }
    let header_offset = (header_row - start_row) as usize;

    let mut rows_iter = range.rows().skip(header_offset);
    let header_cells = rows_iter.next().ok_or_else(header_missing)?;
    if header_cells.iter().all(cell_is_empty) {
        return Err(header_missing());
    }
    let headers: Vec<String> = header_cells
        .iter()
        .map(|cell| normalize_header(&cell_label(cell).unwrap_or_default()))
        .collect();

    let score_cols: [usize; DIM_COUNT] =
        locate_columns(path, &headers, Dimension::ALL.map(Dimension::job_column))?;
    let [title_col] = locate_columns(path, &headers, [JOB_TITLE_COLUMN])?;

    let mut out = Vec::new();
    for cells in rows_iter {
        if cells.iter().all(cell_is_empty) {
            continue;
        }
        out.push(JobRecord {
            title: cells.get(title_col).and_then(cell_label),
            scores: score_cols.map(|col| cells.get(col).and_then(coerce_cell)),
        });
    }
    Ok(out)
}
