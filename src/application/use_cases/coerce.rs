// Tolerant cell coercion. The dataset is externally authored and may carry
// blank cells, stray text, or inconsistent types per column; every function
// here is total and degrades to `None` instead of erroring.

use crate::domain::catalog::Cell;

/// Coerce a cell to an integer.
///
/// Textual values tolerate surrounding whitespace and thousands-separator
/// commas and are parsed as floats before truncation, so "1,234" -> 1234
/// and "12.0" -> 12. Non-finite and unparseable input is absent.
pub fn to_int(cell: &Cell) -> Option<i64> {
    match cell {
        Cell::Int(i) => Some(*i),
        Cell::Float(f) if f.is_finite() => Some(*f as i64),
        Cell::Text(s) => {
            let cleaned = s.trim().replace(',', "");
            if cleaned.is_empty() {
                return None;
            }
            cleaned
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(|f| f as i64)
        }
        _ => None,
    }
}

/// Coerce a cell to a float. Textual values are whitespace-trimmed;
/// empty, unparseable and NaN input is absent.
pub fn to_float(cell: &Cell) -> Option<f64> {
    match cell {
        Cell::Int(i) => Some(*i as f64),
        Cell::Float(f) if !f.is_nan() => Some(*f),
        Cell::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|f| !f.is_nan())
        }
        _ => None,
    }
}

/// Coerce a cell to a string. Any present scalar is stringified; the empty
/// string is never a valid field value and reads as absent.
pub fn to_text(cell: &Cell) -> Option<String> {
    let s = match cell {
        Cell::Text(s) => s.clone(),
        Cell::Int(i) => i.to_string(),
        Cell::Float(f) => f.to_string(),
        Cell::Bool(b) => b.to_string(),
        Cell::Empty => return None,
    };
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
