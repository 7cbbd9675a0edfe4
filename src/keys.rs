use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Highest numbered `GEMINI_API_KEY_{n}` slot that is scanned.
pub const KEY_SLOTS: usize = 7;

/// Stand-in credential used when no key is configured. Requests made with
/// it fail at the Gemini side and surface as per-request fallbacks, never
/// as a startup failure.
pub const PLACEHOLDER_KEY: &str = "dummy_key";

/// Round-robin pool of Gemini API keys.
///
/// The cursor is a single atomic counter, so concurrent callers each get
/// a distinct slot and every key is dispensed evenly. Keys are never
/// retired, even after repeated rejection by the API.
pub struct KeyRing {
    keys: Vec<String>,
    cursor: AtomicUsize,
}

impl KeyRing {
    /// Collect `GEMINI_API_KEY_1` .. `GEMINI_API_KEY_7` from the
    /// environment, in slot order, skipping absent or empty values.
    ///
    /// An empty environment yields a ring holding one placeholder key so
    /// the process can still start.
    pub fn from_env() -> Self {
        let mut keys = Vec::new();
        for slot in 1..=KEY_SLOTS {
            if let Ok(key) = env::var(format!("GEMINI_API_KEY_{slot}")) {
                if !key.is_empty() {
                    keys.push(key);
                }
            }
        }

        if keys.is_empty() {
            tracing::warn!(
                "No GEMINI_API_KEY_1..{KEY_SLOTS} found; starting with a placeholder key"
            );
            keys.push(PLACEHOLDER_KEY.to_string());
        }

        Self::new(keys)
    }

    /// Build a ring from an explicit key list. Empty input gets the same
    /// placeholder treatment as an empty environment.
    pub fn new(mut keys: Vec<String>) -> Self {
        if keys.is_empty() {
            keys.push(PLACEHOLDER_KEY.to_string());
        }
        Self {
            keys,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Next key in rotation. The fetch-and-increment is atomic, so no two
    /// concurrent callers receive the same slot and no key is starved.
    pub fn next(&self) -> &str {
        let idx = self.cursor.fetch_add(1, Ordering::Relaxed) % self.keys.len();
        &self.keys[idx]
    }

    /// Number of keys in rotation (counts the placeholder when present).
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
