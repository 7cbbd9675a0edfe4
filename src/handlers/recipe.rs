use axum::{extract::State, Json};
use tracing::{instrument, warn};

use crate::ai::{gemini, prompts, strip_code_fences};
use crate::api::AppState;
use crate::contracts::{ReceitaRequest, ReceitaResponse};

/// Placeholder shown when the request arrives with no ingredients.
pub const EMPTY_LIST_TITLE: &str = "Lista vazia";
pub const EMPTY_LIST_BODY: &str =
    "Adicione itens à sua lista para receber uma sugestão de receita.";

/// Placeholder shown when the model call itself fails.
pub const UNAVAILABLE_TITLE: &str = "Receita indisponível";
pub const UNAVAILABLE_BODY: &str =
    "Não foi possível gerar uma receita agora. Tente novamente mais tarde.";

/// Title used when the model answered with plain text instead of JSON.
pub const FREEFORM_TITLE: &str = "Sugestão do chef";

/// POST `/sugerir_receita`: one recipe from the listed ingredients.
///
/// The one route that degrades instead of going empty: when the model
/// replies with text that is not valid JSON, the sanitized text is served
/// verbatim as the recipe body under a fixed title. A failed model call
/// still gets the generic unavailable placeholder.
#[instrument(level = "debug", skip(state, req), fields(ingredientes = req.ingredientes.len()))]
pub async fn sugerir_receita(
    State(state): State<AppState>,
    Json(req): Json<ReceitaRequest>,
) -> Json<ReceitaResponse> {
    if req.ingredientes.is_empty() {
        return Json(ReceitaResponse {
            titulo: EMPTY_LIST_TITLE.to_string(),
            receita_texto: EMPTY_LIST_BODY.to_string(),
        });
    }

    let prompt = prompts::recipe_prompt(&req.ingredientes, &req.tipo_refeicao);
    let key = state.keys.next();
    let raw = match gemini::generate(&state.http, &state.gemini_base, &state.model, key, &prompt)
        .await
    {
        Ok(raw) => raw,
        Err(err) => {
            warn!(error = %err, "recipe model call failed");
            return Json(ReceitaResponse {
                titulo: UNAVAILABLE_TITLE.to_string(),
                receita_texto: UNAVAILABLE_BODY.to_string(),
            });
        }
    };

    Json(interpret_recipe(&raw))
}

/// Map a model reply to a recipe, falling back to the sanitized raw text
/// when it is not the expected JSON object.
pub fn interpret_recipe(raw: &str) -> ReceitaResponse {
    let cleaned = strip_code_fences(raw);
    match serde_json::from_str::<ReceitaResponse>(&cleaned) {
        Ok(receita) => receita,
        Err(_) => ReceitaResponse {
            titulo: FREEFORM_TITLE.to_string(),
            receita_texto: cleaned,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interprets_json_reply() {
        let raw = "```json\n{\"titulo\":\"Arroz de forno\",\"receita_texto\":\"Misture tudo e asse.\"}\n```";
        let receita = interpret_recipe(raw);
        assert_eq!(receita.titulo, "Arroz de forno");
        assert_eq!(receita.receita_texto, "Misture tudo e asse.");
    }

    #[test]
    fn freeform_reply_becomes_recipe_body() {
        let receita = interpret_recipe("Refogue o alho e junte o arroz.");
        assert_eq!(receita.titulo, FREEFORM_TITLE);
        assert_eq!(receita.receita_texto, "Refogue o alho e junte o arroz.");
    }

    #[test]
    fn fenced_freeform_reply_is_sanitized_first() {
        let receita = interpret_recipe("```\nSó misturar.\n```");
        assert_eq!(receita.receita_texto, "Só misturar.");
    }
}
