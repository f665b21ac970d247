use super::ollama::OllamaChatRequest;
use super::openai::OpenAIRequest;
use crate::config::ApiType;
use crate::message::MultimodalMessage;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RequestWrapper {
    Ollama(OllamaChatRequest),
    OpenAI(OpenAIRequest),
}

impl RequestWrapper {
    pub fn new(api_type: ApiType, model: &str, message: &MultimodalMessage) -> Self {
        match api_type {
            ApiType::Ollama => RequestWrapper::Ollama(OllamaChatRequest::new(model, message)),
            ApiType::OpenAI => RequestWrapper::OpenAI(OpenAIRequest::new(model, message)),
        }
    }

    pub fn api_type(&self) -> ApiType {
        match self {
            RequestWrapper::Ollama(_) => ApiType::Ollama,
            RequestWrapper::OpenAI(_) => ApiType::OpenAI,
        }
    }

    pub fn get_model(&self) -> &String {
        match self {
            RequestWrapper::Ollama(req) => &req.model,
            RequestWrapper::OpenAI(req) => &req.model,
        }
    }

    pub fn image_count(&self) -> usize {
        match self {
            RequestWrapper::Ollama(req) => req
                .messages
                .iter()
                .map(|m| m.images.as_ref().map_or(0, |images| images.len()))
                .sum(),
            RequestWrapper::OpenAI(req) => req.messages.iter().map(|m| m.content.images().len()).sum(),
        }
    }
}
