use crate::converters::openai::openai_image_url::OpenAIImageUrl;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OpenAIContentItem {
    Text { text: String },
    ImageUrl { image_url: OpenAIImageUrl },
}
