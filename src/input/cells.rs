use calamine::Data;

/// Lenient numeric coercion of a text cell. Never fails: anything that is not
/// a finite number becomes `None`.
pub fn coerce_text(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn coerce_cell(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(v) => Some(*v).filter(|v| v.is_finite()),
        Data::Int(v) => Some(*v as f64),
        Data::String(s) => coerce_text(s),
        Data::Empty
        | Data::Bool(_)
        | Data::Error(_)
        | Data::DateTime(_)
        | Data::DateTimeIso(_)
        | Data::DurationIso(_) => None,
    }
}

pub fn text_label(raw: &str) -> Option<String> {
    let s = raw.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Renders a workbook cell as a row label; integral floats drop the `.0`.
pub fn cell_label(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => text_label(s),
        Data::Float(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                Some(format!("{}", *n as i64))
            } else {
                Some(format!("{}", n))
            }
        }
        Data::Int(n) => Some(n.to_string()),
        Data::Bool(b) => Some(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::DateTime(dt) => Some(format!("{}", dt.as_f64())),
    }
}

pub fn cell_is_empty(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    }
}
