use super::ollama::OllamaChatResponse;
use super::openai::OpenAIResponse;
use crate::config::ApiType;
use crate::error::DescribeError;
use crate::models::Description;

#[derive(Debug, Clone)]
pub enum ResponseWrapper {
    Ollama(OllamaChatResponse),
    OpenAI(OpenAIResponse),
}

impl ResponseWrapper {
    /// Parse `body` strictly as the reply format of `api_type`.
    pub fn parse(api_type: ApiType, body: &str) -> Result<Self, DescribeError> {
        let wrapper = match api_type {
            ApiType::Ollama => serde_json::from_str::<OllamaChatResponse>(body).map(ResponseWrapper::Ollama),
            ApiType::OpenAI => serde_json::from_str::<OpenAIResponse>(body).map(ResponseWrapper::OpenAI),
        };
        wrapper.map_err(|e| DescribeError::response_schema(format!("not a valid {} chat response: {}", api_type, e)))
    }

    pub fn into_description(self) -> Result<Description, DescribeError> {
        match self {
            ResponseWrapper::Ollama(resp) => resp.try_into(),
            ResponseWrapper::OpenAI(resp) => resp.try_into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_is_strict_per_api_type() {
        let ollama_body = json!({ "message": { "role": "assistant", "content": "A cat." }, "done": true }).to_string();
        let openai_body = json!({ "choices": [{ "message": { "content": "A cat." } }] }).to_string();

        let description = ResponseWrapper::parse(ApiType::Ollama, &ollama_body)
            .unwrap()
            .into_description()
            .unwrap();
        assert_eq!(description.text, "A cat.");
        let description = ResponseWrapper::parse(ApiType::OpenAI, &openai_body)
            .unwrap()
            .into_description()
            .unwrap();
        assert_eq!(description.text, "A cat.");

        assert!(matches!(
            ResponseWrapper::parse(ApiType::Ollama, &openai_body),
            Err(DescribeError::ResponseSchema(_))
        ));
        assert!(matches!(
            ResponseWrapper::parse(ApiType::OpenAI, &ollama_body),
            Err(DescribeError::ResponseSchema(_))
        ));
    }

    #[test]
    fn test_parse_non_json_body() {
        let err = ResponseWrapper::parse(ApiType::Ollama, "<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, DescribeError::ResponseSchema(_)));
    }
}
