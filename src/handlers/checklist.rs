use anyhow::Result;
use axum::{extract::State, Json};
use tracing::{instrument, warn};

use crate::ai::{gemini, prompts, strip_code_fences};
use crate::api::AppState;
use crate::contracts::{CarrinhoRequest, CarrinhoResponse};

/// POST `/conferir_carrinho`: planned items still missing from the cart.
///
/// Matching is semantic and left to the model; the handler only checks
/// that the reply is a JSON list of strings.
#[instrument(
    level = "debug",
    skip(state, req),
    fields(planejados = req.lista_planejada.len(), no_carrinho = req.itens_carrinho.len())
)]
pub async fn conferir_carrinho(
    State(state): State<AppState>,
    Json(req): Json<CarrinhoRequest>,
) -> Json<CarrinhoResponse> {
    if req.lista_planejada.is_empty() {
        return Json(CarrinhoResponse::empty());
    }

    let prompt = prompts::checklist_prompt(&req.lista_planejada, &req.itens_carrinho);
    let key = state.keys.next();
    let raw = match gemini::generate(&state.http, &state.gemini_base, &state.model, key, &prompt)
        .await
    {
        Ok(raw) => raw,
        Err(err) => {
            warn!(error = %err, "checklist model call failed");
            return Json(CarrinhoResponse::empty());
        }
    };

    match interpret_checklist(&raw) {
        Ok(faltantes) => Json(CarrinhoResponse { faltantes }),
        Err(err) => {
            warn!(error = %err, "checklist reply did not match the expected shape");
            Json(CarrinhoResponse::empty())
        }
    }
}

/// Parse a sanitized model reply into the missing-item list.
pub fn interpret_checklist(raw: &str) -> Result<Vec<String>> {
    let cleaned = strip_code_fences(raw);
    let faltantes: Vec<String> = serde_json::from_str(&cleaned)?;
    Ok(faltantes)
}
