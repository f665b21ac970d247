use crate::image::EncodedImage;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// Prompt text plus image attachments, sent to the service as one unit.
///
/// Images travel as structured attachments so the server never has to fish
/// them out of the prompt text.
#[derive(Debug, Clone)]
pub struct MultimodalMessage {
    role: Role,
    content: String,
    images: Vec<EncodedImage>,
}

impl MultimodalMessage {
    pub fn user(prompt: impl Into<String>, image: EncodedImage) -> Self {
        Self {
            role: Role::User,
            content: prompt.into(),
            images: vec![image],
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn images(&self) -> &[EncodedImage] {
        &self.images
    }
}
