use crate::converters::openai::openai_content::OpenAIContent;
use crate::converters::openai::openai_content_item::OpenAIContentItem;
use crate::converters::openai::openai_image_url::OpenAIImageUrl;
use crate::message::MultimodalMessage;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct OpenAIMessage {
    pub role: String,
    pub content: OpenAIContent,
}

impl From<&MultimodalMessage> for OpenAIMessage {
    fn from(message: &MultimodalMessage) -> Self {
        let mut items = vec![OpenAIContentItem::Text {
            text: message.content().to_string(),
        }];
        items.extend(message.images().iter().map(|image| OpenAIContentItem::ImageUrl {
            image_url: OpenAIImageUrl::from(image),
        }));

        OpenAIMessage {
            role: message.role().as_str().to_string(),
            content: OpenAIContent::Array(items),
        }
    }
}
