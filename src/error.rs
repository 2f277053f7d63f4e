use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::put_object::PutObjectError;
use aws_sdk_s3::primitives::ByteStreamError;
use thiserror::Error;

/// Failure while writing an artifact to the storage bucket.
///
/// Both variants carry the underlying error unchanged; no retry or
/// recovery happens at this level.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The local source file could not be opened or read.
    #[error("Failed to read source file: {0}")]
    Source(#[from] ByteStreamError),

    /// The storage backend rejected or could not complete the write.
    #[error("Bucket write failed: {0}")]
    Backend(#[from] SdkError<PutObjectError>),
}

/// Failure while posting to the results API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the response body not read.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Server error {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Failure while loading process configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    InvalidVar { name: &'static str, reason: String },

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}
