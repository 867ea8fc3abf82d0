use actix_web::{get, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::CatalogQueryUseCase;
use crate::domain::error::AppError;

/// Shared read-only state handed to every request handler.
pub struct ApiState {
    pub queries: CatalogQueryUseCase,
}

#[derive(Deserialize)]
pub struct ListParams {
    pub limit: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub limit: Option<i64>,
}

#[derive(Serialize)]
pub struct DatasetSummary {
    pub message: String,
    pub rows: usize,
    pub columns: Vec<String>,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[get("/")]
async fn index(data: web::Data<ApiState>) -> impl Responder {
    let catalog = data.queries.catalog();
    HttpResponse::Ok().json(DatasetSummary {
        message: "App catalog API is running".to_string(),
        rows: catalog.row_count(),
        columns: catalog.headers().to_vec(),
    })
}

#[get("/apps")]
async fn list_apps(data: web::Data<ApiState>, params: web::Query<ListParams>) -> impl Responder {
    let records = data.queries.list(params.limit.as_deref());
    HttpResponse::Ok().json(records)
}

#[get("/apps/search")]
async fn search_apps(
    data: web::Data<ApiState>,
    params: web::Query<SearchParams>,
) -> impl Responder {
    debug!(q = %params.q, limit = ?params.limit, "Searching catalog");
    match data.queries.search(&params.q, params.limit) {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(err) => error_response(err),
    }
}

#[get("/apps/{app_name}")]
async fn get_app(data: web::Data<ApiState>, path: web::Path<String>) -> impl Responder {
    match data.queries.find_exact(&path.into_inner()) {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(err) => error_response(err),
    }
}

fn error_response(err: AppError) -> HttpResponse {
    let body = ErrorBody {
        error: err.to_string(),
    };
    match err {
        AppError::ValidationError(_) => HttpResponse::BadRequest().json(body),
        AppError::NotFound(_) => HttpResponse::NotFound().json(body),
        _ => HttpResponse::InternalServerError().json(body),
    }
}

/// Register all API routes. `/apps/search` is registered before
/// `/apps/{app_name}` so the literal segment wins.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(list_apps)
        .service(search_apps)
        .service(get_app);
}
