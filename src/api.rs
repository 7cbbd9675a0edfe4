use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::contracts::HealthResponse;
use crate::handlers;
use crate::keys::KeyRing;

/// Status banner returned by the health route.
pub const STATUS_ONLINE: &str = "Shopsense AI Brain Online";

/// Shared per-request context: the key ring plus everything needed to
/// reach Gemini. Cloning is cheap; the ring sits behind an `Arc` and the
/// reqwest client is internally reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub keys: Arc<KeyRing>,
    pub http: reqwest::Client,
    pub gemini_base: String,
    pub model: String,
}

impl AppState {
    pub fn new(keys: Arc<KeyRing>, gemini_base: String, model: String) -> Self {
        Self {
            keys,
            http: reqwest::Client::new(),
            gemini_base,
            model,
        }
    }
}

/// Assemble the transport shell.
///
/// Malformed JSON bodies are rejected by the `Json` extractor before any
/// handler runs; everything past that point answers HTTP 200, with
/// failures absorbed into each route's fallback body.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/analisar_compras", post(handlers::analisar_compras))
        .route("/sugerir_receita", post(handlers::sugerir_receita))
        .route(
            "/sugerir_complementos_lista",
            post(handlers::sugerir_complementos),
        )
        .route("/conferir_carrinho", post(handlers::conferir_carrinho))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: STATUS_ONLINE.to_string(),
        keys_active: state.keys.len(),
    })
}
