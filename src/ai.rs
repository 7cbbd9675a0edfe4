pub mod gemini;
pub mod prompts;
pub mod sanitize;

pub use gemini::generate;
pub use sanitize::strip_code_fences;
