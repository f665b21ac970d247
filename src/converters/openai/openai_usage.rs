use serde::Deserialize;

/// Token counts; servers are free to leave any of them out.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenAIUsage {
    #[serde(default)]
    pub prompt_tokens: Option<u32>,
    #[serde(default)]
    pub completion_tokens: Option<u32>,
}
