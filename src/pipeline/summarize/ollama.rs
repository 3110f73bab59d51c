//! Ollama-backed summarization over the local HTTP API.

use serde::{Deserialize, Serialize};

use super::{SummarizeError, Summarizer};
use crate::config::{OLLAMA_BASE_URL, OLLAMA_TIMEOUT_SECS, SUMMARY_MAX_WORDS};

/// General-purpose models that summarize well, in order of preference.
const SUMMARY_MODELS: &[&str] = &[
    "llama3.2",
    "llama3.1",
    "mistral",
    "gemma2",
    "llama3.2:latest",
];

/// Ollama HTTP client configured for summarization.
pub struct OllamaSummarizer {
    base_url: String,
    model: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl OllamaSummarizer {
    /// Create a summarizer pointing at `base_url` using `model`.
    pub fn new(base_url: &str, model: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            client,
            timeout_secs,
        }
    }

    /// Local Ollama instance with the first available preferred model.
    ///
    /// Fails with [`SummarizeError::NoModelAvailable`] when none of the
    /// preferred models is pulled, or with a connection error when
    /// Ollama itself is unreachable.
    pub fn default_local() -> Result<Self, SummarizeError> {
        let probe = Self::new(OLLAMA_BASE_URL, "", OLLAMA_TIMEOUT_SECS);
        let model = probe.find_best_model()?;
        tracing::info!(model = %model, "Ollama summarizer: model selected");
        Ok(Self { model, ..probe })
    }

    /// The model name being used.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Find the first preferred model that is actually pulled.
    pub fn find_best_model(&self) -> Result<String, SummarizeError> {
        let available = self.list_models()?;
        for preferred in SUMMARY_MODELS {
            if available.iter().any(|m| m.starts_with(preferred)) {
                return Ok(preferred.to_string());
            }
        }
        Err(SummarizeError::NoModelAvailable)
    }

    fn list_models(&self) -> Result<Vec<String>, SummarizeError> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self.client.get(&url).send().map_err(|e| {
            if e.is_connect() {
                SummarizeError::Connection(self.base_url.clone())
            } else {
                SummarizeError::HttpClient(e.to_string())
            }
        })?;

        let parsed: OllamaTagsResponse = response
            .json()
            .map_err(|e| SummarizeError::ResponseParsing(e.to_string()))?;

        Ok(parsed.models.into_iter().map(|m| m.name).collect())
    }

    fn system_prompt() -> String {
        format!(
            "You are a meeting minutes assistant. Summarize the given meeting \
             transcript excerpt in plain prose, at most {SUMMARY_MAX_WORDS} words. \
             Keep decisions, owners, and dates. Do not add information that is \
             not in the text."
        )
    }
}

/// Request body for Ollama /api/generate
#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    system: &'a str,
    stream: bool,
}

/// Response body from Ollama /api/generate
#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}

/// Response body from Ollama /api/tags
#[derive(Deserialize)]
struct OllamaTagsResponse {
    models: Vec<OllamaModel>,
}

#[derive(Deserialize)]
struct OllamaModel {
    name: String,
}

impl Summarizer for OllamaSummarizer {
    fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        let url = format!("{}/api/generate", self.base_url);
        let system = Self::system_prompt();
        let body = OllamaGenerateRequest {
            model: &self.model,
            prompt: text,
            system: &system,
            stream: false,
        };

        let response = self.client.post(&url).json(&body).send().map_err(|e| {
            if e.is_connect() {
                SummarizeError::Connection(self.base_url.clone())
            } else if e.is_timeout() {
                SummarizeError::HttpClient(format!(
                    "Request timed out after {}s",
                    self.timeout_secs
                ))
            } else {
                SummarizeError::HttpClient(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SummarizeError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: OllamaGenerateResponse = response
            .json()
            .map_err(|e| SummarizeError::ResponseParsing(e.to_string()))?;

        Ok(parsed.response.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash_from_base_url() {
        let s = OllamaSummarizer::new("http://localhost:11434/", "llama3.2", 30);
        assert_eq!(s.base_url, "http://localhost:11434");
    }

    #[test]
    fn system_prompt_carries_word_bound() {
        assert!(OllamaSummarizer::system_prompt().contains(&SUMMARY_MAX_WORDS.to_string()));
    }

    #[test]
    fn generate_request_serializes_expected_shape() {
        let body = OllamaGenerateRequest {
            model: "llama3.2",
            prompt: "text",
            system: "sys",
            stream: false,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "llama3.2");
        assert_eq!(json["stream"], false);
    }

    /// Compile-time check that the client satisfies the trait seam.
    #[test]
    fn satisfies_summarizer_trait() {
        fn _accepts_summarizer(_s: &dyn Summarizer) {}
        let _: fn(&OllamaSummarizer) = |s| _accepts_summarizer(s);
    }
}
