use crate::converters::openai::OpenAIMessage;
use crate::message::MultimodalMessage;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct OpenAIRequest {
    pub model: String,
    pub messages: Vec<OpenAIMessage>,
    pub stream: bool,
}

impl OpenAIRequest {
    pub fn new(model: &str, message: &MultimodalMessage) -> Self {
        OpenAIRequest {
            model: model.to_string(),
            messages: vec![message.into()],
            stream: false,
        }
    }
}
