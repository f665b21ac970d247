use crate::error::DescribeError;
use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_MODEL: &str = "gemma3:4b";
pub const DEFAULT_API_BASE: &str = "http://localhost:11434";
pub const DEFAULT_PROMPT: &str = "Can you describe the content of this image?";
pub const DEFAULT_IMAGE: &str = "GettyImages.jpg";

/// Wire dialect spoken by the inference server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ApiType {
    /// Native `/api/chat` endpoint with base64 `images`.
    #[default]
    Ollama,
    /// OpenAI compatible `/chat/completions` endpoint with data URLs.
    #[value(name = "openai")]
    OpenAI,
}

impl fmt::Display for ApiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiType::Ollama => f.write_str("ollama"),
            ApiType::OpenAI => f.write_str("openai"),
        }
    }
}

impl FromStr for ApiType {
    type Err = DescribeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ollama" => Ok(ApiType::Ollama),
            "openai" => Ok(ApiType::OpenAI),
            other => Err(DescribeError::configuration(format!(
                "unknown api type '{}', expected 'ollama' or 'openai'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub model: String,
    pub api_base: String,
    pub api_type: ApiType,
    pub api_key: Option<String>,
    pub prompt: String,
    /// Local path, `file://` or `http(s)://` URL.
    pub image: String,
    /// socks or http proxy, example: socks5://192.168.0.2:10080
    pub proxy: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            api_type: ApiType::default(),
            api_key: None,
            prompt: DEFAULT_PROMPT.to_string(),
            image: DEFAULT_IMAGE.to_string(),
            proxy: None,
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, DescribeError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DescribeError::configuration(format!("cannot read {}: {}", path.display(), e))
        })?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(&content).map_err(|e| {
            DescribeError::configuration(format!("invalid config file {}: {}", path.display(), e))
        })
    }

    /// Overlay `OLLAMA_*` variables resolved through `lookup`.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, DescribeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base) = lookup("OLLAMA_BASE_URL") {
            self.api_base = base;
        }
        if let Some(model) = lookup("OLLAMA_MODEL") {
            self.model = model;
        }
        if let Some(key) = lookup("OLLAMA_API_KEY") {
            self.api_key = Some(key);
        }
        if let Some(api_type) = lookup("OLLAMA_API_TYPE") {
            self.api_type = api_type.parse()?;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), DescribeError> {
        if self.model.trim().is_empty() {
            return Err(DescribeError::configuration("model name is empty"));
        }
        if self.prompt.trim().is_empty() {
            return Err(DescribeError::configuration("prompt is empty"));
        }
        if self.image.trim().is_empty() {
            return Err(DescribeError::configuration("image is empty"));
        }
        if self.api_base.trim().is_empty() {
            return Err(DescribeError::configuration("api_base is empty"));
        }
        let url = reqwest::Url::parse(&self.api_base).map_err(|e| {
            DescribeError::configuration(format!("api_base '{}' is not a valid URL: {}", self.api_base, e))
        })?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(DescribeError::configuration(format!(
                "api_base '{}' uses unsupported scheme '{}'",
                self.api_base, scheme
            ))),
        }
    }
}
