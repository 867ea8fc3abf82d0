use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use encoding_rs::WINDOWS_1252;

use crate::domain::catalog::{Catalog, Cell, Row};
use crate::domain::error::{AppError, Result};

/// Load a CSV export. Cells stay textual here; numeric interpretation
/// happens later in the coercion layer.
pub fn load(path: &Path) -> Result<Catalog> {
    let content = read_with_encoding_fallback(path)?;
    parse_content(&content)
}

pub fn parse_content(content: &str) -> Result<Catalog> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows: Vec<Row> = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
        })?;
        let row: Row = record
            .iter()
            .map(|field| {
                if field.is_empty() {
                    Cell::Empty
                } else {
                    Cell::Text(field.to_string())
                }
            })
            .collect();
        rows.push(row);
    }

    Ok(Catalog::new(headers, rows))
}

// UTF-8 first, Windows-1252 as the lossy fallback for older exports.
fn read_with_encoding_fallback(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| {
        AppError::IoError(format!("Failed to read CSV file {}: {}", path.display(), e))
    })?;
    match String::from_utf8(bytes) {
        Ok(content) => Ok(content),
        Err(err) => {
            let (content, _, _) = WINDOWS_1252.decode(err.as_bytes());
            Ok(content.into_owned())
        }
    }
}
