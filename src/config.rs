//! Process configuration
//!
//! All fields mirror the camelCase shape of the project's JSON config file,
//! and every CI-provided value can also be sourced directly from
//! environment variables. The loaded struct is passed explicitly into the
//! uploader and the reporter; nothing reads configuration globally.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

const DEFAULT_PLATFORM_URL: &str = "https://api.lost-pixel.com";
const DEFAULT_S3_PORT: u16 = 443;

/// Object-storage connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct S3Config {
    pub end_point: String,
    #[serde(default)]
    pub region: Option<String>,
    pub access_key: String,
    pub secret_key: String,
    #[serde(default)]
    pub session_token: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default = "default_ssl")]
    pub ssl: bool,
    pub bucket_name: String,
}

fn default_ssl() -> bool {
    true
}

impl S3Config {
    /// Full endpoint URL for the storage backend.
    ///
    /// The port defaults to 443 and the scheme follows the `ssl` flag.
    pub fn endpoint_url(&self) -> String {
        let scheme = if self.ssl { "https" } else { "http" };
        let port = self.port.unwrap_or(DEFAULT_S3_PORT);
        format!("{}://{}:{}", scheme, self.end_point, port)
    }
}

/// Build and repository configuration for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub lost_pixel_project_id: String,
    #[serde(default = "default_platform_url")]
    pub lost_pixel_platform_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    pub ci_build_id: String,
    pub ci_build_number: String,
    /// Single `owner/name` string, the way CI providers expose it.
    pub repository: String,
    pub commit_ref: String,
    pub commit_ref_name: String,
    pub commit_hash: String,
    pub s3: S3Config,
}

fn default_platform_url() -> String {
    DEFAULT_PLATFORM_URL.to_string()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `S3_REGION` and `S3_SESSION_TOKEN` are optional and simply omitted
    /// when unset; every other variable without a default is required.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            lost_pixel_project_id: require_var("LOST_PIXEL_PROJECT_ID")?,
            lost_pixel_platform_url: env::var("LOST_PIXEL_PLATFORM_URL")
                .unwrap_or_else(|_| DEFAULT_PLATFORM_URL.to_string()),
            api_key: optional_var("LOST_PIXEL_API_KEY"),
            ci_build_id: require_var("CI_BUILD_ID")?,
            ci_build_number: require_var("CI_BUILD_NUMBER")?,
            repository: require_var("REPOSITORY")?,
            commit_ref: require_var("COMMIT_REF")?,
            commit_ref_name: require_var("COMMIT_REF_NAME")?,
            commit_hash: require_var("COMMIT_HASH")?,
            s3: S3Config {
                end_point: require_var("S3_END_POINT")?,
                region: optional_var("S3_REGION"),
                access_key: require_var("S3_ACCESS_KEY")?,
                secret_key: require_var("S3_SECRET_KEY")?,
                session_token: optional_var("S3_SESSION_TOKEN"),
                port: parse_port_var("S3_PORT")?,
                ssl: parse_bool_var("S3_SSL", true)?,
                bucket_name: require_var("S3_BUCKET_NAME")?,
            },
        })
    }

    /// Load configuration from a JSON config file.
    ///
    /// # Returns
    /// * `Ok(Some(config))` if the file exists and was parsed successfully
    /// * `Ok(None)` if the file doesn't exist
    /// * `Err(...)` if the file exists but couldn't be read/parsed
    pub fn from_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;

        Ok(Some(config))
    }

    /// Split the `owner/name` repository string on its first separator.
    ///
    /// A name containing further slashes is kept intact; a string without
    /// any separator yields an empty name.
    pub fn repo_owner_and_name(&self) -> (&str, &str) {
        match self.repository.split_once('/') {
            Some((owner, name)) => (owner, name),
            None => (self.repository.as_str(), ""),
        }
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

fn parse_port_var(name: &'static str) -> Result<Option<u16>, ConfigError> {
    match optional_var(name) {
        Some(raw) => raw.parse().map(Some).map_err(|e| ConfigError::InvalidVar {
            name,
            reason: format!("{}", e),
        }),
        None => Ok(None),
    }
}

fn parse_bool_var(name: &'static str, default: bool) -> Result<bool, ConfigError> {
    match optional_var(name) {
        Some(raw) => match raw.as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(ConfigError::InvalidVar {
                name,
                reason: format!("expected a boolean, got '{}'", other),
            }),
        },
        None => Ok(default),
    }
}
