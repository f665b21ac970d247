use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIResponseMessage {
    pub content: String,
}
