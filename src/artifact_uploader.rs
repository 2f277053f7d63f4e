use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::OnceLock;

use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use crate::config::S3Config;
use crate::error::UploadError;
use crate::log_buffer::LogBuffer;

/// Signing region used when the configuration leaves it unset; matches the
/// default most S3-compatible backends assume.
const DEFAULT_REGION: &str = "us-east-1";

/// Storage client shared by every upload in the process. Constructed on
/// first use; the first uploader's configuration wins.
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// A single artifact to store.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Object key under the configured bucket.
    pub upload_path: String,
    /// Local file to read.
    pub file_path: PathBuf,
    /// Key/value metadata attached to the stored object.
    pub metadata: HashMap<String, String>,
}

/// Backend descriptor for a stored object.
#[derive(Debug, Clone)]
pub struct UploadResult {
    pub etag: Option<String>,
    pub version_id: Option<String>,
}

/// Uploads artifact files into the configured bucket.
pub struct ArtifactUploader {
    config: S3Config,
    logger: LogBuffer,
}

impl ArtifactUploader {
    pub fn new(config: S3Config, logger: LogBuffer) -> Self {
        Self { config, logger }
    }

    /// Store one local file under its destination key in the configured
    /// bucket, attaching the request's metadata.
    ///
    /// The storage client is created lazily on the first upload and reused
    /// process-wide; later calls do not re-authenticate. Failures are
    /// propagated without retrying.
    pub async fn upload_file(&self, request: UploadRequest) -> Result<UploadResult, UploadError> {
        self.logger.log(format!(
            "Uploading '{}' to '{}'",
            request.file_path.display(),
            request.upload_path
        ));

        // Read the source before touching the client so a missing file
        // never initializes the backend connection.
        let body = ByteStream::from_path(&request.file_path).await?;

        let client = self.shared_client();
        self.put_object(client, &request, body).await
    }

    /// The process-wide storage client, built from this uploader's
    /// configuration if no upload has run yet.
    fn shared_client(&self) -> &'static Client {
        SHARED_CLIENT.get_or_init(|| build_client(&self.config))
    }

    async fn put_object(
        &self,
        client: &Client,
        request: &UploadRequest,
        body: ByteStream,
    ) -> Result<UploadResult, UploadError> {
        let output = client
            .put_object()
            .bucket(&self.config.bucket_name)
            .key(&request.upload_path)
            .body(body)
            .set_metadata(Some(request.metadata.clone()))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.config.bucket_name,
                    key = %request.upload_path,
                    "Bucket write failed"
                );
                UploadError::Backend(e)
            })?;

        Ok(UploadResult {
            etag: output.e_tag().map(str::to_string),
            version_id: output.version_id().map(str::to_string),
        })
    }
}

/// Build a storage client bound to the configured endpoint and credentials.
fn build_client(config: &S3Config) -> Client {
    let credentials = Credentials::new(
        config.access_key.clone(),
        config.secret_key.clone(),
        config.session_token.clone(),
        None,
        "lost-pixel-config",
    );

    let region = config
        .region
        .clone()
        .unwrap_or_else(|| DEFAULT_REGION.to_string());

    let s3_config = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(region))
        .endpoint_url(config.endpoint_url())
        .credentials_provider(credentials)
        .force_path_style(true)
        .build();

    Client::from_conf(s3_config)
}
