/// Failure of one describe run, tagged by the stage that failed.
#[derive(Debug, thiserror::Error)]
pub enum DescribeError {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("cannot read image {location}: {reason}")]
    ImageRead { location: String, reason: String },

    #[error("inference service at {url} is unreachable: {source}")]
    ServiceUnavailable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("inference service returned HTTP {status}: {body}")]
    ServiceResponse { status: u16, body: String },

    #[error("unexpected response body: {0}")]
    ResponseSchema(String),
}

impl DescribeError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn image_read(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ImageRead {
            location: location.into(),
            reason: reason.into(),
        }
    }

    pub fn response_schema(message: impl Into<String>) -> Self {
        Self::ResponseSchema(message.into())
    }

    pub fn stage(&self) -> &'static str {
        match self {
            DescribeError::Configuration(_) => "configuration",
            DescribeError::ImageRead { .. } => "image read",
            DescribeError::ServiceUnavailable { .. } => "service connection",
            DescribeError::ServiceResponse { .. } => "service response",
            DescribeError::ResponseSchema(_) => "response parsing",
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            DescribeError::Configuration(_) => 2,
            DescribeError::ImageRead { .. } => 3,
            DescribeError::ServiceUnavailable { .. } => 4,
            DescribeError::ServiceResponse { .. } => 5,
            DescribeError::ResponseSchema(_) => 6,
        }
    }
}
