//! Configuration from environment: API endpoint, credential, model.
//!
//! Loading never fails. A missing API key is carried as a flag so the TUI
//! stays usable and reports the problem per exchange, while single-prompt
//! mode refuses to start (see `run::run_single_prompt`).

use std::env;

use async_openai::config::OpenAIConfig;

/// Gemini's OpenAI-compatible endpoint.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// Model used when GEMINI_MODEL is not set.
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Clone)]
pub struct Config {
    pub openai_config: OpenAIConfig,
    /// False when GEMINI_API_KEY is absent or blank. No model call is
    /// attempted while false.
    pub has_api_key: bool,
    pub model_id: String,
    pub base_url: String,
}

/// Load configuration from environment. The credential is resolved once
/// here and passed into every exchange; nothing reads the environment at
/// call time.
pub fn load() -> Config {
    let base_url = env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let model_id = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

    let api_key = env::var("GEMINI_API_KEY")
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty());
    let has_api_key = api_key.is_some();

    let openai_config = OpenAIConfig::new()
        .with_api_base(base_url.clone())
        .with_api_key(api_key.unwrap_or_default());

    Config {
        openai_config,
        has_api_key,
        model_id,
        base_url,
    }
}
