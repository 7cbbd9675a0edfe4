use anyhow::{anyhow, Result};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, instrument, trace, warn};

pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: String,
}

/// Send one prompt to the Gemini `generateContent` endpoint and return the
/// model's raw text reply.
///
/// Exactly one call per invocation: no retry, no streaming, no timeout
/// beyond whatever the caller imposes. Any non-2xx status or a reply
/// without a text candidate is an error.
#[instrument(level = "trace", skip(client, api_key, prompt))]
pub async fn generate(
    client: &reqwest::Client,
    base_url: &str,
    model: &str,
    api_key: &str,
    prompt: &str,
) -> Result<String> {
    let url = format!("{base_url}/v1beta/models/{model}:generateContent");
    let body = json!({
        "contents": [{ "parts": [{ "text": prompt }] }]
    });

    debug!(url, model, "sending generateContent request");

    let resp = client
        .post(&url)
        .header("x-goog-api-key", api_key)
        .json(&body)
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let err_text = resp.text().await.unwrap_or_default();
        warn!(%status, "Gemini API error");
        return Err(anyhow!("Gemini API error {status}: {err_text}"));
    }

    let raw = resp.text().await?;
    trace!(raw = %raw, "generateContent response");
    let reply: GenerateResponse = serde_json::from_str(&raw)?;
    let text = reply
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("missing candidate in Gemini response"))?
        .content
        .parts
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("missing text part in Gemini candidate"))?
        .text;

    Ok(text)
}
