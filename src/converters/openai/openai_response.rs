use crate::converters::openai::{OpenAIChoice, OpenAIUsage};
use crate::error::DescribeError;
use crate::models::Description;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIResponse {
    #[serde(default)]
    pub model: Option<String>,
    pub choices: Vec<OpenAIChoice>,
    #[serde(default)]
    pub usage: Option<OpenAIUsage>,
}

impl TryFrom<OpenAIResponse> for Description {
    type Error = DescribeError;

    fn try_from(resp: OpenAIResponse) -> Result<Self, Self::Error> {
        let Some(first) = resp.choices.into_iter().next() else {
            return Err(DescribeError::response_schema("response has no choices"));
        };

        let usage = resp.usage.unwrap_or_default();
        Ok(Description {
            text: first.message.content,
            model: resp.model,
            finish_reason: first.finish_reason,
            prompt_tokens: usage.prompt_tokens,
            completion_tokens: usage.completion_tokens,
        })
    }
}
