use crate::converters::ollama::OllamaMessage;
use crate::message::MultimodalMessage;
use serde::Serialize;

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Serialize)]
pub struct OllamaChatRequest {
    pub model: String,
    pub messages: Vec<OllamaMessage>,
    pub stream: bool,
}

impl OllamaChatRequest {
    pub fn new(model: &str, message: &MultimodalMessage) -> Self {
        OllamaChatRequest {
            model: model.to_string(),
            messages: vec![message.into()],
            stream: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::EncodedImage;
    use base64::Engine;
    use base64::prelude::BASE64_STANDARD;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let image = EncodedImage {
            media_type: "image/png",
            data: "iVBORw0KGgo=".to_string(),
        };
        let message = MultimodalMessage::user("Describe this.", image);
        let request = OllamaChatRequest::new("llava", &message);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "llava",
                "messages": [{
                    "role": "user",
                    "content": "Describe this.",
                    "images": ["iVBORw0KGgo="]
                }],
                "stream": false
            })
        );
    }

    #[test]
    fn test_images_in_body_decode_to_source_bytes() {
        let bytes: Vec<u8> = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01];
        let image = EncodedImage {
            media_type: "image/jpeg",
            data: BASE64_STANDARD.encode(&bytes),
        };
        let request = OllamaChatRequest::new("gemma3:4b", &MultimodalMessage::user("What is this?", image));

        let body = serde_json::to_value(&request).unwrap();
        let sent = body["messages"][0]["images"][0].as_str().unwrap();
        assert_eq!(BASE64_STANDARD.decode(sent).unwrap(), bytes);
    }
}
