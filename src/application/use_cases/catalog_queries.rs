use std::sync::Arc;

use crate::application::use_cases::coerce::to_text;
use crate::application::use_cases::column_map::ColumnMap;
use crate::application::use_cases::record_projector::project_row;
use crate::domain::app_record::AppRecord;
use crate::domain::catalog::Catalog;
use crate::domain::error::{AppError, Result};

pub const DEFAULT_LIST_LIMIT: i64 = 10;
pub const DEFAULT_SEARCH_LIMIT: i64 = 20;
pub const MIN_LIMIT: i64 = 1;
pub const MAX_LIMIT: i64 = 100;

/// Read-only queries over the in-memory catalog.
///
/// The dataset and the resolved column map are fixed at construction, so
/// every query is a pure scan over shared immutable state.
pub struct CatalogQueryUseCase {
    catalog: Arc<Catalog>,
    columns: ColumnMap,
}

impl CatalogQueryUseCase {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let columns = ColumnMap::from_headers(catalog.headers());
        Self { catalog, columns }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    /// First N rows in dataset order.
    ///
    /// `limit` is parsed tolerantly: missing or unparseable input falls
    /// back to 10 and the result is clamped to [1, 100]. Never fails.
    pub fn list(&self, limit: Option<&str>) -> Vec<AppRecord> {
        let n = clamp_limit(
            limit
                .and_then(|raw| raw.trim().parse::<i64>().ok())
                .unwrap_or(DEFAULT_LIST_LIMIT),
        );
        self.catalog
            .rows()
            .iter()
            .take(n)
            .map(|row| project_row(&self.catalog, &self.columns, row))
            .collect()
    }

    /// Case-insensitive substring search against the app name column.
    ///
    /// Rows whose app cell is missing or blank never match. Returns up to
    /// `limit` rows in dataset order.
    pub fn search(&self, q: &str, limit: Option<i64>) -> Result<Vec<AppRecord>> {
        let app_column = self.require_app_column()?;
        if q.is_empty() {
            return Err(AppError::ValidationError(
                "Query parameter 'q' must not be empty".to_string(),
            ));
        }

        let needle = q.to_lowercase();
        let n = clamp_limit(limit.unwrap_or(DEFAULT_SEARCH_LIMIT));

        let mut matches = Vec::new();
        for row in self.catalog.rows() {
            let Some(name) = self.catalog.cell(row, app_column).and_then(to_text) else {
                continue;
            };
            if name.to_lowercase().contains(&needle) {
                matches.push(project_row(&self.catalog, &self.columns, row));
                if matches.len() == n {
                    break;
                }
            }
        }

        if matches.is_empty() {
            return Err(AppError::NotFound(format!("No apps matching '{}'", q)));
        }
        Ok(matches)
    }

    /// Case-insensitive exact match on the app name column; first match in
    /// dataset order.
    pub fn find_exact(&self, name: &str) -> Result<AppRecord> {
        let app_column = self.require_app_column()?;
        let wanted = name.to_lowercase();

        for row in self.catalog.rows() {
            let Some(value) = self.catalog.cell(row, app_column).and_then(to_text) else {
                continue;
            };
            if value.to_lowercase() == wanted {
                return Ok(project_row(&self.catalog, &self.columns, row));
            }
        }

        Err(AppError::NotFound(format!("App '{}' not found", name)))
    }

    fn require_app_column(&self) -> Result<&str> {
        self.columns.app.as_deref().ok_or_else(|| {
            AppError::ValidationError("Dataset has no resolvable app name column".to_string())
        })
    }
}

fn clamp_limit(n: i64) -> usize {
    n.clamp(MIN_LIMIT, MAX_LIMIT) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Cell;

    const HEADERS: &[&str] = &[
        "App",
        "Category",
        "Rating",
        "Reviews",
        "Installs",
        "Type",
        "Price",
        "Content Rating",
    ];

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    fn row(app: Cell) -> Vec<Cell> {
        vec![
            app,
            text("GAME"),
            Cell::Float(4.5),
            text("1,234"),
            text("10,000+"),
            text("Free"),
            text("0"),
            text("Everyone"),
        ]
    }

    fn queries_with_rows(rows: Vec<Vec<Cell>>) -> CatalogQueryUseCase {
        let headers: Vec<String> = HEADERS.iter().map(|l| l.to_string()).collect();
        CatalogQueryUseCase::new(Arc::new(Catalog::new(headers, rows)))
    }

    fn fixture() -> CatalogQueryUseCase {
        queries_with_rows(vec![
            row(text("War Game")),
            row(text("WARFARE")),
            row(text("Peace App")),
            row(Cell::Int(2048)),
            row(Cell::Empty),
        ])
    }

    fn large_fixture(count: usize) -> CatalogQueryUseCase {
        queries_with_rows((0..count).map(|i| row(text(&format!("App {}", i)))).collect())
    }

    #[test]
    fn test_list_defaults_to_ten() {
        let queries = large_fixture(25);
        assert_eq!(queries.list(None).len(), 10);
        assert_eq!(queries.list(Some("")).len(), 10);
        assert_eq!(queries.list(Some("abc")).len(), 10);
    }

    #[test]
    fn test_list_clamps_to_range() {
        let queries = large_fixture(150);
        assert_eq!(queries.list(Some("500")).len(), 100);
        assert_eq!(queries.list(Some("-5")).len(), 1);
        assert_eq!(queries.list(Some("0")).len(), 1);
    }

    #[test]
    fn test_list_returns_fewer_when_dataset_is_smaller() {
        let queries = large_fixture(3);
        assert_eq!(queries.list(Some("50")).len(), 3);
    }

    #[test]
    fn test_list_preserves_dataset_order() {
        let queries = fixture();
        let records = queries.list(Some("2"));
        assert_eq!(records[0].app.as_deref(), Some("War Game"));
        assert_eq!(records[1].app.as_deref(), Some("WARFARE"));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let queries = fixture();
        let records = queries.search("war", Some(5)).unwrap();
        let names: Vec<_> = records.iter().map(|r| r.app.as_deref().unwrap()).collect();
        assert_eq!(names, vec!["War Game", "WARFARE"]);
    }

    #[test]
    fn test_search_caps_results_at_limit() {
        let queries = large_fixture(30);
        assert_eq!(queries.search("App", Some(5)).unwrap().len(), 5);
        assert_eq!(queries.search("App", None).unwrap().len(), 20);
        assert_eq!(queries.search("App", Some(500)).unwrap().len(), 30);
    }

    #[test]
    fn test_search_zero_matches_is_not_found() {
        let queries = fixture();
        let err = queries.search("zzzzz", None).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_search_empty_query_is_rejected() {
        let queries = fixture();
        let err = queries.search("", None).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn test_search_matches_numeric_app_names_via_stringification() {
        let queries = fixture();
        let records = queries.search("204", None).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].app.as_deref(), Some("2048"));
    }

    #[test]
    fn test_search_without_app_column_is_validation_error() {
        let headers = vec!["Title".to_string()];
        let queries =
            CatalogQueryUseCase::new(Arc::new(Catalog::new(headers, vec![vec![text("x")]])));
        let err = queries.search("x", None).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn test_find_exact_is_case_insensitive() {
        let queries = fixture();
        let record = queries.find_exact("war game").unwrap();
        assert_eq!(record.app.as_deref(), Some("War Game"));
        assert_eq!(record.reviews, Some(1234));
    }

    #[test]
    fn test_find_exact_matches_numeric_app_names() {
        let queries = fixture();
        let record = queries.find_exact("2048").unwrap();
        assert_eq!(record.app.as_deref(), Some("2048"));
    }

    #[test]
    fn test_find_exact_no_match_is_not_found() {
        let queries = fixture();
        let err = queries.find_exact("war").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_find_exact_without_app_column_is_validation_error() {
        let headers = vec!["Title".to_string()];
        let queries =
            CatalogQueryUseCase::new(Arc::new(Catalog::new(headers, vec![vec![text("x")]])));
        let err = queries.find_exact("x").unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn test_queries_are_idempotent() {
        let queries = fixture();
        assert_eq!(queries.list(Some("3")), queries.list(Some("3")));
        assert_eq!(
            queries.search("war", Some(5)).unwrap(),
            queries.search("war", Some(5)).unwrap()
        );
        assert_eq!(
            queries.find_exact("peace app").unwrap(),
            queries.find_exact("peace app").unwrap()
        );
    }
}
