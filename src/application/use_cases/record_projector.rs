use crate::application::use_cases::coerce::{to_float, to_int, to_text};
use crate::application::use_cases::column_map::ColumnMap;
use crate::domain::app_record::AppRecord;
use crate::domain::catalog::{Catalog, Row};

/// Project one raw catalog row into the fixed-shape output record.
///
/// Pure function of (row, column map): unresolved columns and cells that
/// fail coercion project as absent fields.
pub fn project_row(catalog: &Catalog, columns: &ColumnMap, row: &Row) -> AppRecord {
    let text = |label: &Option<String>| {
        label
            .as_deref()
            .and_then(|l| catalog.cell(row, l))
            .and_then(to_text)
    };

    AppRecord {
        app: text(&columns.app),
        category: text(&columns.category),
        rating: columns
            .rating
            .as_deref()
            .and_then(|l| catalog.cell(row, l))
            .and_then(to_float),
        reviews: columns
            .reviews
            .as_deref()
            .and_then(|l| catalog.cell(row, l))
            .and_then(to_int),
        installs: text(&columns.installs),
        app_type: text(&columns.app_type),
        price: text(&columns.price),
        content_rating: text(&columns.content_rating),
    }
}
