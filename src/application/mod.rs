pub mod use_cases;

pub use use_cases::catalog_queries::CatalogQueryUseCase;
pub use use_cases::column_map::ColumnMap;
