use std::env;

use crate::ai::gemini::GEMINI_API_URL;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_MODEL: &str = "models/gemini-flash-latest";

#[derive(Clone)]
pub struct Config {
    pub bind_addr: String,
    pub model: String,
    pub gemini_base: String,
}

impl Config {
    /// Read configuration from the environment, with a default for every
    /// slot so startup never fails on a missing variable.
    ///
    /// `GEMINI_API_URL` exists so tests can point the relay at a mock
    /// server.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            gemini_base: env::var("GEMINI_API_URL").unwrap_or_else(|_| GEMINI_API_URL.to_string()),
        }
    }
}
