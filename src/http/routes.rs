//! HTTP routes: the barcode trigger and its JSON model.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use base64::Engine;
use serde::Serialize;

use crate::barcode::{render_random_watch_barcode, BarcodeRenderer};

#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<dyn BarcodeRenderer>,
}

/// Response body for `POST /barcodes`.
#[derive(Debug, Serialize)]
pub struct BarcodeResponse {
    pub video_id: String,
    pub url: String,
    /// Base64-encoded PNG.
    pub barcode: String,
}

/// Mint a fresh video id and return its watch URL rendered as a barcode.
pub async fn create_barcode(State(state): State<AppState>) -> impl IntoResponse {
    match render_random_watch_barcode(state.renderer.as_ref()) {
        Ok(b) => {
            tracing::debug!(video_id = %b.video_id, "rendered barcode");
            let barcode = base64::engine::general_purpose::STANDARD.encode(&b.png);
            Json(BarcodeResponse { video_id: b.video_id, url: b.url, barcode }).into_response()
        }
        Err(err) => {
            tracing::error!(%err, "barcode rendering failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "barcode rendering failed").into_response()
        }
    }
}
