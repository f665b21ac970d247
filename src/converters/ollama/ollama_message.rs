use crate::message::MultimodalMessage;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct OllamaMessage {
    pub role: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl From<&MultimodalMessage> for OllamaMessage {
    fn from(message: &MultimodalMessage) -> Self {
        let images: Vec<String> = message.images().iter().map(|image| image.data.clone()).collect();

        OllamaMessage {
            role: message.role().as_str().to_string(),
            content: message.content().to_string(),
            images: if images.is_empty() { None } else { Some(images) },
        }
    }
}
