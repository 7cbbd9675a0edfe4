use anyhow::Result;
use axum::{extract::State, Json};
use tracing::{instrument, warn};

use crate::ai::{gemini, prompts, strip_code_fences};
use crate::api::AppState;
use crate::contracts::{AnaliseItem, AnaliseRequest, AnaliseResponse};

/// POST `/analisar_compras`: price and budget risk analysis.
///
/// An empty product list short-circuits to an empty analysis without
/// touching the model. Model or parse failures also yield the empty
/// analysis; the route never returns a non-2xx status.
#[instrument(level = "debug", skip(state, req), fields(produtos = req.produtos.len()))]
pub async fn analisar_compras(
    State(state): State<AppState>,
    Json(req): Json<AnaliseRequest>,
) -> Json<AnaliseResponse> {
    if req.produtos.is_empty() {
        return Json(AnaliseResponse::empty());
    }

    let prompt = prompts::analysis_prompt(&req.produtos, req.orcamento_total);
    let key = state.keys.next();
    let raw = match gemini::generate(&state.http, &state.gemini_base, &state.model, key, &prompt)
        .await
    {
        Ok(raw) => raw,
        Err(err) => {
            warn!(error = %err, "analysis model call failed");
            return Json(AnaliseResponse::empty());
        }
    };

    match interpret_analysis(&raw) {
        Ok(analise) => Json(AnaliseResponse { analise }),
        Err(err) => {
            warn!(error = %err, "analysis reply did not match the expected shape");
            Json(AnaliseResponse::empty())
        }
    }
}

/// Parse a sanitized model reply into the per-product alert list.
pub fn interpret_analysis(raw: &str) -> Result<Vec<AnaliseItem>> {
    let cleaned = strip_code_fences(raw);
    let analise: Vec<AnaliseItem> = serde_json::from_str(&cleaned)?;
    Ok(analise)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::Alerta;

    #[test]
    fn interprets_fenced_reply() {
        let raw = "```json\n[{\"id\":\"1\",\"alerta\":\"none\",\"feedback\":\"Preço normal.\"}]\n```";
        let analise = interpret_analysis(raw).unwrap();
        assert_eq!(analise.len(), 1);
        assert_eq!(analise[0].id, "1");
        assert_eq!(analise[0].alerta, Alerta::None);
    }

    #[test]
    fn rejects_object_where_list_expected() {
        assert!(interpret_analysis("{\"id\":\"1\"}").is_err());
    }

    #[test]
    fn rejects_unknown_alert_level() {
        let raw = "[{\"id\":\"1\",\"alerta\":\"blue\",\"feedback\":\"?\"}]";
        assert!(interpret_analysis(raw).is_err());
    }
}
