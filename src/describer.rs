use crate::config::Config;
use crate::converters::helpers::truncate;
use crate::converters::request_wrapper::RequestWrapper;
use crate::converters::response_wrapper::ResponseWrapper;
use crate::error::DescribeError;
use crate::image::{ImagePayload, ImageSource};
use crate::llm_client::LlmClient;
use crate::message::MultimodalMessage;
use crate::models::Description;
use crate::request_id::RequestId;
use std::path::Path;
use tracing::{Instrument, debug, info, info_span, warn};

const MAX_ERROR_BODY_CHARS: usize = 500;

/// Runs one image through the inference service.
///
/// Every call reads its own image and builds its own message and request id,
/// so separate calls never observe each other.
#[derive(Debug, Clone)]
pub struct Describer {
    config: Config,
    client: LlmClient,
}

impl Describer {
    pub fn new(config: Config) -> Result<Self, DescribeError> {
        config.validate()?;
        let client = LlmClient::from_config(&config)?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Describe the image named in the configuration.
    pub async fn describe(&self) -> Result<Description, DescribeError> {
        let source = ImageSource::parse(&self.config.image)?;
        self.describe_source(&source).await
    }

    pub async fn describe_path(&self, path: &Path) -> Result<Description, DescribeError> {
        self.describe_source(&ImageSource::Path(path.to_path_buf())).await
    }

    pub async fn describe_source(&self, source: &ImageSource) -> Result<Description, DescribeError> {
        let request_id = RequestId::new();
        let span = info_span!(
            "describe",
            trace_id = %request_id,
            model = %self.config.model,
            image = %source
        );
        self.run(source, &request_id).instrument(span).await
    }

    async fn run(&self, source: &ImageSource, request_id: &RequestId) -> Result<Description, DescribeError> {
        // the image is fully loaded and checked before the inference call
        let payload = ImagePayload::load(self.client.http_client(), source).await?;
        debug!("Attaching {} as {}", payload.location(), payload.media_type());
        let message = MultimodalMessage::user(self.config.prompt.as_str(), payload.encode());
        drop(payload);

        let request = RequestWrapper::new(self.config.api_type, &self.config.model, &message);
        let target_url = LlmClient::build_target_url(&self.config);

        let response = self
            .client
            .send(&request, &self.config, request_id)
            .await
            .map_err(|source| {
                warn!("Request to {} failed: {}", target_url, source);
                DescribeError::ServiceUnavailable {
                    url: target_url.clone(),
                    source,
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            warn!("Inference service answered {}", status);
            return Err(DescribeError::ServiceResponse {
                status: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY_CHARS),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| DescribeError::ServiceUnavailable {
                url: target_url.clone(),
                source,
            })?;
        debug!("raw response: {}", truncate(&body, MAX_ERROR_BODY_CHARS));

        let description = ResponseWrapper::parse(self.config.api_type, &body)?.into_description()?;
        info!(
            "Received description ({} chars, finish_reason: {})",
            description.text.chars().count(),
            description.finish_reason.as_deref().unwrap_or("unknown")
        );
        Ok(description)
    }
}
