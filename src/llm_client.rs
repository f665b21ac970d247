use crate::config::{ApiType, Config};
use crate::converters::helpers::join_url;
use crate::converters::request_wrapper::RequestWrapper;
use crate::error::DescribeError;
use crate::request_id::RequestId;
use reqwest::header::HeaderValue;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct LlmClient {
    http_client: Arc<reqwest::Client>,
}

impl LlmClient {
    pub fn new(http_client: Arc<reqwest::Client>) -> Self {
        Self { http_client }
    }

    pub fn from_config(config: &Config) -> Result<Self, DescribeError> {
        let client_builder = reqwest::Client::builder();
        let client_builder = if let Some(proxy) = &config.proxy {
            debug!("Using proxy: {}", proxy);
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|e| DescribeError::configuration(format!("invalid proxy '{}': {}", proxy, e)))?;
            client_builder.proxy(proxy)
        } else {
            client_builder
        };
        let http_client = client_builder
            .build()
            .map_err(|e| DescribeError::configuration(format!("cannot build HTTP client: {}", e)))?;
        Ok(Self::new(Arc::new(http_client)))
    }

    /// Shared client, also used to download web images so they honor the same proxy.
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    pub fn build_target_url(config: &Config) -> String {
        match config.api_type {
            ApiType::Ollama => join_url(&config.api_base, "api/chat"),
            ApiType::OpenAI => join_url(&config.api_base, "chat/completions"),
        }
    }

    /// Issue the single POST for `request`. Transport errors are returned as is.
    pub fn send(
        &self,
        request: &RequestWrapper,
        config: &Config,
        request_id: &RequestId,
    ) -> impl Future<Output = Result<reqwest::Response, reqwest::Error>> {
        let target_url = Self::build_target_url(config);

        let mut target_request = self
            .http_client
            .post(&target_url)
            .header("Content-Type", "application/json");

        if let Ok(val) = HeaderValue::from_str(&request_id.0) {
            target_request = target_request.header("x-request-id", val);
        }

        if request.api_type() == ApiType::OpenAI {
            match config.api_key.as_deref() {
                Some(key) if !key.is_empty() => {
                    target_request = target_request.header("Authorization", format!("Bearer {}", key));
                }
                _ => warn!("No api_key configured for the openai endpoint, sending without Authorization"),
            }
        }

        info!("Forwarding request to: {}", target_url);
        debug!(
            "model: {}, images attached: {}",
            request.get_model(),
            request.image_count()
        );
        target_request.json(request).send()
    }
}
