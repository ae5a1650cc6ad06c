//! Extraction of reply text from chat-completion responses.

use serde_json::Value;

/// Extract text content from an API message. Handles both string content
/// and the array-of-blocks format some providers return.
pub fn extract_content(msg: &Value) -> Option<String> {
    let content = msg.get("content")?;
    if let Some(s) = content.as_str() {
        return Some(s.to_string());
    }
    if let Some(arr) = content.as_array() {
        for block in arr {
            if let Some(text) = block.get("text").and_then(|t| t.as_str()) {
                return Some(text.to_string());
            }
        }
    }
    None
}

/// Pull the reply text out of a full chat-completion response
/// (`choices[0].message`).
pub fn reply_text(response: &Value) -> Option<String> {
    let message = response
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .and_then(|choice| choice.get("message"))?;
    extract_content(message)
}

#[cfg(test)]
mod tests {
    use super::{extract_content, reply_text};

    #[test]
    fn extract_content_string_direct() {
        let msg = serde_json::json!({"role": "assistant", "content": "Hello world"});
        assert_eq!(extract_content(&msg), Some("Hello world".to_string()));
    }

    #[test]
    fn extract_content_array_of_blocks() {
        let msg = serde_json::json!({
            "role": "assistant",
            "content": [{"type": "text", "text": "Response text"}]
        });
        assert_eq!(extract_content(&msg), Some("Response text".to_string()));
    }

    #[test]
    fn extract_content_missing_content() {
        let msg = serde_json::json!({"role": "assistant"});
        assert_eq!(extract_content(&msg), None);
    }

    #[test]
    fn extract_content_blocks_without_text() {
        let msg = serde_json::json!({"role": "assistant", "content": [{"type": "image"}]});
        assert_eq!(extract_content(&msg), None);
    }

    #[test]
    fn reply_text_from_full_response() {
        let response = serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "Advice here"}}]
        });
        assert_eq!(reply_text(&response), Some("Advice here".to_string()));
    }

    #[test]
    fn reply_text_empty_choices() {
        let response = serde_json::json!({"choices": []});
        assert_eq!(reply_text(&response), None);
    }

    #[test]
    fn reply_text_no_choices_field() {
        let response = serde_json::json!({"id": "x"});
        assert_eq!(reply_text(&response), None);
    }
}
