//! Cleanup of model replies before JSON parsing.

/// Strip the markdown fence markers Gemini likes to wrap JSON in, then
/// trim surrounding whitespace.
///
/// Only the literal "```json" and "```" markers are removed. Anything
/// else the model adds (apologies, prose around the JSON) stays and will
/// make the parse step fail, which the handlers absorb as a fallback.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}
