use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod error;
mod models;
mod notes;

use config::Config;
use notes::NoteStore;

pub struct AppState {
    pub store: Arc<NoteStore>,
    pub config: Config,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    log::info!("Noteful backend v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();

    let seed = match notes::seed::load(config.seed_path.as_deref()) {
        Ok(seed) => seed,
        Err(e) => {
            log::error!("Failed to load seed notes: {}", e);
            std::process::exit(1);
        }
    };
    let store = Arc::new(NoteStore::with_notes(seed));
    log::info!("[NOTES] Seeded store with {} notes", store.len());

    if !config.index_path().exists() {
        log::warn!("No index page at {}", config.index_path().display());
    }
    log::info!("Serving public files from: {}", config.public_dir.display());

    let bind_addr = (config.host.clone(), config.port);
    log::info!("Listening on http://{}:{}", bind_addr.0, bind_addr.1);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(AppState {
                store: Arc::clone(&store),
                config: config.clone(),
            }))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::config)
    })
    .bind(bind_addr)?
    .run();

    // Get server handle for graceful shutdown
    let server_handle = server.handle();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        log::info!("Received Ctrl+C, shutting down...");

        let server_stop = server_handle.stop(true);
        if tokio::time::timeout(std::time::Duration::from_secs(5), server_stop).await.is_err() {
            log::warn!("Timeout waiting for HTTP server to stop, forcing exit...");
        }

        log::info!("Shutdown complete");
    });

    server.await
}
