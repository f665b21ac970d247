use crate::image::EncodedImage;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct OpenAIImageUrl {
    pub url: String,
}

impl From<&EncodedImage> for OpenAIImageUrl {
    fn from(image: &EncodedImage) -> Self {
        OpenAIImageUrl {
            url: image.data_url(),
        }
    }
}
