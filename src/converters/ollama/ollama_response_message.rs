use crate::message::Role;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct OllamaResponseMessage {
    #[serde(default)]
    pub role: Option<Role>,
    pub content: String,
}
