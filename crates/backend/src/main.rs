pub mod domain;
pub mod handlers;
pub mod shared;

use axum::http::{header, Method};
use axum::middleware;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() -> anyhow::Result<()> {
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,sqlx=warn,sea_orm=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

fn app() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/a001/datasets", get(handlers::a001_dataset::list_all))
        .route(
            "/api/a001/datasets/query",
            post(handlers::a001_dataset::query),
        )
        .route(
            "/api/a001/datasets/filters",
            get(handlers::a001_dataset::filters),
        )
        .route(
            "/api/a001/datasets/testdata",
            post(handlers::a001_dataset::insert_test_data),
        )
        .route(
            "/api/a001/datasets/:id",
            get(handlers::a001_dataset::get_by_id),
        )
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(shared::request_logger::request_logger))
        .layer(cors)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let config = shared::config::load_config()?;
    let db_path = shared::config::get_database_path(&config);
    shared::data::db::initialize_database(&db_path)
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    if config.catalog.seed_on_empty {
        domain::a001_dataset::service::seed_if_empty().await?;
    }

    let port = config.server.port;
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!("Port {} is already in use", port);
            } else {
                tracing::error!("Failed to bind to port {}: {}", port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app()).await?;

    Ok(())
}
