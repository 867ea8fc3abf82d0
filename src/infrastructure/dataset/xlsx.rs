use std::path::Path;

use calamine::{open_workbook, Data, DataType, Reader, Xlsx};

use crate::domain::catalog::{Catalog, Cell, Row};
use crate::domain::error::{AppError, Result};

/// Load the first worksheet of an Excel workbook. The first row is the
/// header row; every following row becomes a catalog row.
pub fn load(path: &Path) -> Result<Catalog> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| {
        AppError::ParseError(format!(
            "Failed to open Excel file {}: {}",
            path.display(),
            e
        ))
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| {
            AppError::ParseError(format!("No worksheet found in {}", path.display()))
        })?
        .map_err(|e| {
            AppError::ParseError(format!(
                "Failed to read Excel range {}: {}",
                path.display(),
                e
            ))
        })?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or_else(|| {
            AppError::ParseError(format!("Excel file {} has no header row", path.display()))
        })?
        .iter()
        .map(|cell| {
            cell.as_string()
                .map(|s| s.to_string())
                .unwrap_or_else(|| format!("{}", cell))
        })
        .collect();

    let data_rows: Vec<Row> = rows.map(|row| row.iter().map(convert_cell).collect()).collect();

    Ok(Catalog::new(headers, data_rows))
}

fn convert_cell(cell: &Data) -> Cell {
    match cell {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Int(*i),
        Data::Float(f) => Cell::Float(*f),
        Data::Bool(b) => Cell::Bool(*b),
        // Error cells behave like blanks; everything else (dates,
        // durations) keeps its display rendering.
        Data::Error(_) => Cell::Empty,
        other => Cell::Text(format!("{}", other)),
    }
}
