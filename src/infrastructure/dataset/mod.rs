mod csv;
mod xlsx;

use std::path::Path;

use tracing::info;

use crate::domain::catalog::Catalog;
use crate::domain::error::{AppError, Result};

/// Load the catalog from a spreadsheet file, dispatching on the file
/// extension. Any failure here is fatal at startup; the server never
/// begins serving without data.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let catalog = match extension.as_str() {
        "xlsx" | "xlsm" => xlsx::load(path)?,
        "csv" => csv::load(path)?,
        other => {
            return Err(AppError::ParseError(format!(
                "Unsupported dataset format '{}' for {}",
                other,
                path.display()
            )))
        }
    };

    info!(
        rows = catalog.row_count(),
        columns = catalog.headers().len(),
        path = %path.display(),
        "Catalog loaded"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let err = load_catalog(Path::new("catalog.parquet")).unwrap_err();
        assert!(matches!(err, AppError::ParseError(_)));
    }

    #[test]
    fn test_missing_csv_file_is_io_error() {
        let err = load_catalog(Path::new("/nonexistent/catalog.csv")).unwrap_err();
        assert!(matches!(err, AppError::IoError(_)));
    }

    #[test]
    fn test_loads_csv_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("catalog.csv");
        let mut file = std::fs::File::create(&path).expect("create csv");
        writeln!(file, "App,Rating").expect("write header");
        writeln!(file, "Maps,4.2").expect("write row");

        let catalog = load_catalog(&path).expect("catalog should load");
        assert_eq!(catalog.headers(), ["App".to_string(), "Rating".to_string()]);
        assert_eq!(catalog.row_count(), 1);
    }
}
