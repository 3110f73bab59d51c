/// Application-level constants
pub const APP_NAME: &str = "Minuta";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum accepted input length, in characters.
/// Longer payloads are rejected at the API boundary, never inside the pipeline.
pub const MAX_TEXT_LENGTH: usize = 20_000;

/// Upper bound for a summarization chunk, in characters.
pub const CHUNK_MAX_CHARS: usize = 1_200;

/// Target summary length hint passed to the model, in words.
pub const SUMMARY_MAX_WORDS: usize = 150;

/// Default local Ollama endpoint.
pub const OLLAMA_BASE_URL: &str = "http://localhost:11434";

/// Ollama request timeout (5 minutes — CPU inference on long chunks is slow).
pub const OLLAMA_TIMEOUT_SECS: u64 = 300;

/// Default bind address for the meeting API server.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_CRATE_NAME"))
}
