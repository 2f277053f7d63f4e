mod api_client;
mod api_contracts;
mod artifact_uploader;
mod config;
mod error;
mod log_buffer;
mod result_reporter;

#[cfg(test)]
mod test_harness;

pub use api_client::ApiClient;
pub use api_contracts::{Comparison, ResultPayload, WebhookEvent};
pub use artifact_uploader::{ArtifactUploader, UploadRequest, UploadResult};
pub use config::{Config, S3Config};
pub use error::{ApiError, ConfigError, UploadError};
pub use log_buffer::LogBuffer;
pub use result_reporter::{BuildOutcome, ResultReporter};

/// Initialize structured logging for the embedding process.
///
/// Respects `RUST_LOG`; defaults to `info` when unset. Call once at
/// startup before any upload or report runs.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
