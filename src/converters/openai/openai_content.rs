use serde::Serialize;
use crate::converters::openai::openai_content_item::OpenAIContentItem;

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum OpenAIContent {
    Text(String),
    Array(Vec<OpenAIContentItem>),
}

impl OpenAIContent {
    pub fn images(&self) -> Vec<&str> {
        match self {
            OpenAIContent::Text(_) => Vec::new(),
            OpenAIContent::Array(items) => items
                .iter()
                .filter_map(|item| match item {
                    OpenAIContentItem::ImageUrl { image_url } => Some(image_url.url.as_str()),
                    OpenAIContentItem::Text { .. } => None,
                })
                .collect(),
        }
    }
}
