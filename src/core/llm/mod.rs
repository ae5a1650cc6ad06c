//! The model-call collaborator: one blocking chat-completion per exchange.

mod error;

use async_openai::Client;
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

use crate::core::config::Config;
use crate::core::message;

pub use error::{ChatError, map_api_error};

/// Send the assembled prompt as a single user message and return the raw
/// reply text. No streaming, no retries; the prompt already carries the
/// persona instruction and the whole transcript.
pub async fn complete(
    config: &Config,
    model: &str,
    prompt: &str,
    cancel_token: Option<&CancellationToken>,
) -> Result<String, ChatError> {
    let client = Client::with_config(config.openai_config.clone());

    log::debug!("calling model {} ({} prompt bytes)", model, prompt.len());

    let chat_api = client.chat();
    let request_future = chat_api.create_byot::<_, Value>(json!({
        "model": model,
        "messages": [{ "role": "user", "content": prompt }],
    }));

    let response = if let Some(token) = cancel_token {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                return Err(ChatError::Cancelled);
            }
            result = request_future => result.map_err(map_api_error)?,
        }
    } else {
        request_future.await.map_err(map_api_error)?
    };

    if let Some(err) = response.get("error") {
        let msg = err
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or("Unknown error");
        return Err(ChatError::ApiMessage(msg.to_string()));
    }

    message::reply_text(&response).ok_or(ChatError::EmptyReply)
}
