use anyhow::Result;
use axum::{extract::State, Json};
use tracing::{instrument, warn};

use crate::ai::{gemini, prompts, strip_code_fences};
use crate::api::AppState;
use crate::contracts::{ComplementosRequest, ComplementosResponse, Sugestao};

/// Upper bound on suggestions returned to the client. The prompt asks the
/// model for at most three; replies that exceed it are truncated.
pub const MAX_SUGESTOES: usize = 3;

/// POST `/sugerir_complementos_lista`: up to three items that pair with
/// the planned list.
#[instrument(level = "debug", skip(state, req), fields(itens = req.itens_lista.len()))]
pub async fn sugerir_complementos(
    State(state): State<AppState>,
    Json(req): Json<ComplementosRequest>,
) -> Json<ComplementosResponse> {
    if req.itens_lista.is_empty() {
        return Json(ComplementosResponse::empty());
    }

    let prompt = prompts::complements_prompt(&req.itens_lista);
    let key = state.keys.next();
    let raw = match gemini::generate(&state.http, &state.gemini_base, &state.model, key, &prompt)
        .await
    {
        Ok(raw) => raw,
        Err(err) => {
            warn!(error = %err, "complement model call failed");
            return Json(ComplementosResponse::empty());
        }
    };

    match interpret_complements(&raw) {
        Ok(sugestoes) => Json(ComplementosResponse { sugestoes }),
        Err(err) => {
            warn!(error = %err, "complement reply did not match the expected shape");
            Json(ComplementosResponse::empty())
        }
    }
}

/// Parse a sanitized model reply into at most [`MAX_SUGESTOES`] entries.
pub fn interpret_complements(raw: &str) -> Result<Vec<Sugestao>> {
    let cleaned = strip_code_fences(raw);
    let mut sugestoes: Vec<Sugestao> = serde_json::from_str(&cleaned)?;
    sugestoes.truncate(MAX_SUGESTOES);
    Ok(sugestoes)
}
