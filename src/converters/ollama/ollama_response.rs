use crate::converters::ollama::OllamaResponseMessage;
use crate::error::DescribeError;
use crate::message::Role;
use crate::models::Description;
use serde::Deserialize;

/// Non-streaming `/api/chat` reply.
#[derive(Debug, Clone, Deserialize)]
pub struct OllamaChatResponse {
    #[serde(default)]
    pub model: Option<String>,
    pub message: OllamaResponseMessage,
    #[serde(default)]
    pub done: Option<bool>,
    #[serde(default)]
    pub done_reason: Option<String>,
    #[serde(default)]
    pub prompt_eval_count: Option<u32>,
    #[serde(default)]
    pub eval_count: Option<u32>,
}

impl TryFrom<OllamaChatResponse> for Description {
    type Error = DescribeError;

    fn try_from(resp: OllamaChatResponse) -> Result<Self, Self::Error> {
        // a partial chunk means the server ignored stream=false
        if resp.done == Some(false) {
            return Err(DescribeError::response_schema("response is an unfinished stream chunk"));
        }
        if let Some(role) = resp.message.role
            && role != Role::Assistant
        {
            return Err(DescribeError::response_schema(format!(
                "reply came from role '{}', expected 'assistant'",
                role.as_str()
            )));
        }

        Ok(Description {
            text: resp.message.content,
            model: resp.model,
            finish_reason: resp.done_reason,
            prompt_tokens: resp.prompt_eval_count,
            completion_tokens: resp.eval_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ollama_response_to_description() {
        let json_response = json!({
            "model": "gemma3:4b",
            "created_at": "2025-06-02T09:14:51.123Z",
            "message": {
                "role": "assistant",
                "content": "Two people walking a dog along a beach at sunset."
            },
            "done": true,
            "done_reason": "stop",
            "total_duration": 4883583458u64,
            "prompt_eval_count": 285,
            "eval_count": 12
        });
        let response: OllamaChatResponse = serde_json::from_value(json_response).expect("Failed to parse Ollama response");
        let description = Description::try_from(response).unwrap();

        assert_eq!(description.text, "Two people walking a dog along a beach at sunset.");
        assert_eq!(description.model.as_deref(), Some("gemma3:4b"));
        assert_eq!(description.finish_reason.as_deref(), Some("stop"));
        assert_eq!(description.prompt_tokens, Some(285));
        assert_eq!(description.completion_tokens, Some(12));
    }

    #[test]
    fn test_ollama_response_missing_content() {
        let json_response = json!({
            "model": "gemma3:4b",
            "message": { "role": "assistant" },
            "done": true
        });
        assert!(serde_json::from_value::<OllamaChatResponse>(json_response).is_err());
    }

    #[test]
    fn test_ollama_response_mistyped_content() {
        let json_response = json!({
            "message": { "role": "assistant", "content": 42 }
        });
        assert!(serde_json::from_value::<OllamaChatResponse>(json_response).is_err());
    }

    #[test]
    fn test_ollama_reply_echoing_user_role_rejected() {
        let json_response = json!({
            "message": { "role": "user", "content": "Can you describe the content of this image?" },
            "done": true
        });
        let response: OllamaChatResponse = serde_json::from_value(json_response).unwrap();
        let err = Description::try_from(response).unwrap_err();
        assert!(matches!(err, DescribeError::ResponseSchema(_)));
    }

    #[test]
    fn test_ollama_unfinished_chunk_rejected() {
        let json_response = json!({
            "message": { "role": "assistant", "content": "Two" },
            "done": false
        });
        let response: OllamaChatResponse = serde_json::from_value(json_response).unwrap();
        let err = Description::try_from(response).unwrap_err();
        assert!(matches!(err, DescribeError::ResponseSchema(_)));
    }
}
