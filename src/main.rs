use std::path::PathBuf;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing::{error, info, warn};

use appdex::application::CatalogQueryUseCase;
use appdex::infrastructure::config::Settings;
use appdex::infrastructure::dataset::load_catalog;
use appdex::interfaces::http::{self, ApiState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(err) => {
            error!(error = %err, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    let dataset_path = PathBuf::from(&settings.dataset_path);
    let catalog = match load_catalog(&dataset_path) {
        Ok(catalog) => Arc::new(catalog),
        Err(err) => {
            error!(error = %err, path = %dataset_path.display(), "Failed to load dataset");
            std::process::exit(1);
        }
    };

    let queries = CatalogQueryUseCase::new(catalog);
    if queries.columns().app.is_none() {
        warn!("No app name column resolved; search and lookup endpoints will reject requests");
    }
    let state = web::Data::new(ApiState { queries });

    info!(host = %settings.host, port = settings.port, "Starting catalog API");

    HttpServer::new(move || {
        let cors = Cors::permissive(); // local tool, allow all origins
        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .configure(http::configure)
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await
}
