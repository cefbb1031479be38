use super::*;
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};

use rust_xlsxwriter::Workbook;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_burnout_input_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

const JOB_HEADER: [&str; 5] = [
    "Row Labels",
    "Red_Score",
    "Blue_Score",
    "White_Score",
    "Yellow_Score",
];

/// Title on row 0 (optional), headers on row 1, jobs from row 2. Score cells
/// that parse as numbers are written as numbers, the rest as text.
fn write_job_workbook(path: &Path, sheet_name: &str, title: Option<&str>, jobs: &[(&str, [&str; 4])]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name).unwrap();
    if let Some(title) = title {
        sheet.write_string(0, 0, title).unwrap();
    }
    for (col, name) in JOB_HEADER.iter().enumerate() {
        sheet.write_string(1, col as u16, *name).unwrap();
    }
    for (i, (label, scores)) in jobs.iter().enumerate() {
        let row = 2 + i as u32;
        if !label.is_empty() {
            sheet.write_string(row, 0, *label).unwrap();
        }
        for (j, raw) in scores.iter().enumerate() {
            let col = 1 + j as u16;
            match raw.parse::<f64>() {
                Ok(v) => {
                    sheet.write_number(row, col, v).unwrap();
                }
                Err(_) if raw.is_empty() => {}
                Err(_) => {
                    sheet.write_string(row, col, *raw).unwrap();
                }
            }
        }
    }
    workbook.save(path).unwrap();
}

#[test]
fn test_ensure_exists_reports_missing_path() {
    let dir = make_temp_dir();
    let path = dir.join("nope.csv");
    match ensure_exists(&path) {
        Err(InputError::Missing(p)) => assert_eq!(p, path),
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(ensure_exists(&dir).is_err(), "a directory is not an input file");
}

#[test]
fn test_load_person_table_coerces_scores() {
    let dir = make_temp_dir();
    let path = dir.join("color_score.csv");
    fs::write(
        &path,
        "\u{feff}Name,RED Score,BLUE Score,WHITE Score,YELLOW Score,Final color\n\
         Ann,10,3,5,1,Red\n\
         Bob, 2 ,9,abc,1,Blue\n\
         Cid,4,4,4,,\n\
         Dee,1,2,3,4\n",
    )
    .unwrap();

    let table = load_person_table(&path).unwrap();
    assert_eq!(table.rows.len(), 4);
    assert_eq!(
        table.rows[0].scores,
        [Some(10.0), Some(3.0), Some(5.0), Some(1.0)]
    );
    assert_eq!(table.rows[0].color.as_deref(), Some("Red"));
    assert_eq!(table.rows[1].scores, [Some(2.0), Some(9.0), None, Some(1.0)]);
    assert_eq!(table.rows[2].scores[3], None);
    assert_eq!(table.rows[2].color, None);
    // Short row: the missing color cell reads as blank.
    assert_eq!(table.rows[3].color, None);
}

#[test]
fn test_load_person_table_trims_color_labels() {
    let dir = make_temp_dir();
    let path = dir.join("color_score.csv");
    fs::write(
        &path,
        "RED Score,BLUE Score,WHITE Score,YELLOW Score,Final color\n\
         1,2,3,4, Red\n\
         5,6,7,8,Red \n\
         9,9,9,9,Red\n",
    )
    .unwrap();

    let table = load_person_table(&path).unwrap();
    for row in &table.rows {
        assert_eq!(row.color.as_deref(), Some("Red"));
    }
}

#[test]
fn test_load_person_table_missing_column() {
    let dir = make_temp_dir();
    let path = dir.join("color_score.csv");
    fs::write(&path, "RED Score,BLUE Score,WHITE Score,YELLOW Score\n1,2,3,4\n").unwrap();

    match load_person_table(&path) {
        Err(InputError::MissingColumn { column, .. }) => assert_eq!(column, COLOR_COLUMN),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_load_job_table_header_on_second_row() {
    let dir = make_temp_dir();
    let path = dir.join("job_score.xlsx");
    write_job_workbook(
        &path,
        DEFAULT_JOB_SHEET,
        Some("Job demand scores"),
        &[
            ("Nurse", ["9", "2", "4", "7"]),
            ("Pilot", ["8", "high", "3", "1"]),
        ],
    );

    let table = load_job_table(&path, DEFAULT_JOB_SHEET, DEFAULT_HEADER_ROW).unwrap();
    assert_eq!(table.sheet, DEFAULT_JOB_SHEET);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0].title.as_deref(), Some("Nurse"));
    assert_eq!(
        table.rows[0].scores,
        [Some(9.0), Some(2.0), Some(4.0), Some(7.0)]
    );
    assert_eq!(table.rows[1].title.as_deref(), Some("Pilot"));
    assert_eq!(table.rows[1].scores[1], None);
}

#[test]
fn test_load_job_table_blank_title_row() {
    let dir = make_temp_dir();
    let path = dir.join("job_score.xlsx");
    write_job_workbook(
        &path,
        DEFAULT_JOB_SHEET,
        None,
        &[("Chef", ["1", "2", "3", "4"])],
    );

    let table = load_job_table(&path, DEFAULT_JOB_SHEET, DEFAULT_HEADER_ROW).unwrap();
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0].title.as_deref(), Some("Chef"));
}

#[test]
fn test_load_job_table_skips_empty_rows_and_keeps_blank_titles() {
    let dir = make_temp_dir();
    let path = dir.join("job_score.xlsx");
    write_job_workbook(
        &path,
        DEFAULT_JOB_SHEET,
        Some("title"),
        &[
            ("Chef", ["1", "2", "3", "4"]),
            ("", ["", "", "", ""]),
            ("", ["5", "6", "7", "8"]),
        ],
    );

    let table = load_job_table(&path, DEFAULT_JOB_SHEET, DEFAULT_HEADER_ROW).unwrap();
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[1].title, None);
    assert_eq!(table.rows[1].scores[0], Some(5.0));
}

#[test]
fn test_load_job_table_unknown_sheet() {
    let dir = make_temp_dir();
    let path = dir.join("job_score.xlsx");
    write_job_workbook(&path, "Jobs", Some("t"), &[("Chef", ["1", "2", "3", "4"])]);

    match load_job_table(&path, DEFAULT_JOB_SHEET, DEFAULT_HEADER_ROW) {
        Err(InputError::SheetNotFound { sheet, available, .. }) => {
            assert_eq!(sheet, DEFAULT_JOB_SHEET);
            assert_eq!(available, vec!["Jobs".to_string()]);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_load_job_table_rejects_non_workbook() {
    let dir = make_temp_dir();
    let path = dir.join("job_score.xlsx");
    fs::write(&path, "Row Labels,Red_Score\nChef,1\n").unwrap();

    let err = load_job_table(&path, DEFAULT_JOB_SHEET, DEFAULT_HEADER_ROW).unwrap_err();
    assert!(matches!(err, InputError::Workbook { .. }), "got {err:?}");
    assert!(err.to_string().contains("hint"));
}

#[test]
fn test_load_job_table_header_row_out_of_range() {
    let dir = make_temp_dir();
    let path = dir.join("job_score.xlsx");
    write_job_workbook(&path, DEFAULT_JOB_SHEET, Some("t"), &[]);

    let err = load_job_table(&path, DEFAULT_JOB_SHEET, 40).unwrap_err();
    assert!(matches!(err, InputError::HeaderRowMissing { row: 40, .. }), "got {err:?}");
}

#[test]
fn test_header_row_missing_message_at_last_row() {
    let dir = make_temp_dir();
    let path = dir.join("job_score.xlsx");
    write_job_workbook(&path, DEFAULT_JOB_SHEET, Some("t"), &[]);

    let err = load_job_table(&path, DEFAULT_JOB_SHEET, u32::MAX).unwrap_err();
    assert!(
        matches!(err, InputError::HeaderRowMissing { row: u32::MAX, .. }),
        "got {err:?}"
    );
    assert!(err.to_string().contains("row 4294967296"), "got {err}");
}

#[test]
fn test_load_job_table_wrong_header_row_misses_columns() {
    let dir = make_temp_dir();
    let path = dir.join("job_score.xlsx");
    write_job_workbook(&path, DEFAULT_JOB_SHEET, Some("t"), &[("Chef", ["1", "2", "3", "4"])]);

    let err = load_job_table(&path, DEFAULT_JOB_SHEET, 0).unwrap_err();
    assert!(matches!(err, InputError::MissingColumn { .. }), "got {err:?}");
}
