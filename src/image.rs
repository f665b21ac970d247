use crate::error::DescribeError;
use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use reqwest::Url;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where the image comes from: a local file or a web address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Path(PathBuf),
    Url(Url),
}

impl ImageSource {
    /// Plain paths and `file://` URLs read from disk, `http(s)://` URLs are downloaded.
    pub fn parse(raw: &str) -> Result<Self, DescribeError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DescribeError::configuration("image source is empty"));
        }
        if !raw.contains("://") {
            return Ok(ImageSource::Path(PathBuf::from(raw)));
        }
        let url = Url::parse(raw)
            .map_err(|e| DescribeError::image_read(raw, format!("not a valid URL: {}", e)))?;
        match url.scheme() {
            "http" | "https" => Ok(ImageSource::Url(url)),
            "file" => url
                .to_file_path()
                .map(ImageSource::Path)
                .map_err(|_| DescribeError::image_read(raw, "could not parse file path")),
            scheme => Err(DescribeError::image_read(
                raw,
                format!("unsupported URL scheme '{}'", scheme),
            )),
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Path(path) => write!(f, "{}", path.display()),
            ImageSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Raw bytes of a decodable image.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    location: String,
    media_type: &'static str,
    bytes: Vec<u8>,
}

/// Base64 text of an image, ready for a JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub media_type: &'static str,
    pub data: String,
}

impl ImagePayload {
    pub async fn load(client: &reqwest::Client, source: &ImageSource) -> Result<Self, DescribeError> {
        match source {
            ImageSource::Path(path) => Self::read(path),
            ImageSource::Url(url) => Self::fetch(client, url).await,
        }
    }

    pub fn read(path: &Path) -> Result<Self, DescribeError> {
        let location = path.display().to_string();
        let bytes = std::fs::read(path).map_err(|e| DescribeError::image_read(location.as_str(), e.to_string()))?;
        Self::from_bytes(location, bytes)
    }

    pub async fn fetch(client: &reqwest::Client, url: &Url) -> Result<Self, DescribeError> {
        info!("Downloading image from {}", url);
        let response = client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| DescribeError::image_read(url.as_str(), format!("download failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DescribeError::image_read(
                url.as_str(),
                format!("download failed: HTTP {}", status),
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DescribeError::image_read(url.as_str(), format!("download failed: {}", e)))?;
        Self::from_bytes(url.to_string(), bytes.to_vec())
    }

    /// Accept `bytes` only if they decode as an image.
    pub fn from_bytes(location: String, bytes: Vec<u8>) -> Result<Self, DescribeError> {
        if bytes.is_empty() {
            return Err(DescribeError::image_read(location, "file is empty"));
        }
        let format = match ::image::guess_format(&bytes) {
            Ok(format) => format,
            Err(_) => return Err(DescribeError::image_read(location, "not a recognized image format")),
        };
        if let Err(e) = ::image::load_from_memory_with_format(&bytes, format) {
            return Err(DescribeError::image_read(location, format!("corrupt image: {}", e)));
        }

        debug!("Loaded {} ({} bytes, {})", location, bytes.len(), format.to_mime_type());
        Ok(Self {
            location,
            media_type: format.to_mime_type(),
            bytes,
        })
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn media_type(&self) -> &'static str {
        self.media_type
    }

    pub fn encode(&self) -> EncodedImage {
        EncodedImage {
            media_type: self.media_type,
            data: BASE64_STANDARD.encode(&self.bytes),
        }
    }
}

impl EncodedImage {
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.data)
    }
}
