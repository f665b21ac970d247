use crate::converters::openai::openai_response_message::OpenAIResponseMessage;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIChoice {
    pub message: OpenAIResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}
