use axum::{routing::{get, post}, Router};
use axum::response::IntoResponse;
use askama::Template;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

mod barcode;
mod config;
mod http;
mod telemetry;
mod util;

use crate::barcode::QrPngRenderer;
use crate::http::routes::{self, AppState};

#[derive(Template)]
#[template(path = "booth.html")]
struct BoothTemplate;

async fn booth() -> impl IntoResponse { BoothTemplate }

async fn healthz() -> &'static str { "ok" }

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let state = AppState { renderer: Arc::new(QrPngRenderer) };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(booth))
        .route("/healthz", get(healthz))
        .route("/barcodes", post(routes::create_barcode))
        // Serve the page script and other assets
        .nest_service("/static", ServeDir::new(config::static_dir()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = config::server_addr();
    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
