use crate::api_client::ApiClient;
use crate::api_contracts::{Comparison, ResultPayload, WebhookEvent};
use crate::config::Config;
use crate::error::ApiError;
use crate::log_buffer::LogBuffer;

/// Caller-supplied outcome of one build.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub success: bool,
    /// Comparison records in the order the engine produced them; `None`
    /// means the build produced none.
    pub comparisons: Option<Vec<Comparison>>,
    /// The webhook event that triggered the run, if any.
    pub event: Option<WebhookEvent>,
}

/// Assembles and posts the result payload for the current build.
pub struct ResultReporter {
    config: Config,
    api: ApiClient,
    logger: LogBuffer,
}

impl ResultReporter {
    pub fn new(config: Config, logger: LogBuffer) -> Self {
        let api = ApiClient::new(&config);
        Self {
            config,
            api,
            logger,
        }
    }

    /// Send the build outcome to the results API.
    ///
    /// The response body is returned opaquely; failures from the outbound
    /// request are propagated without retrying. Neither the configuration
    /// nor the caller's comparisons are modified.
    pub async fn send_result(&self, outcome: BuildOutcome) -> Result<serde_json::Value, ApiError> {
        self.api.send("result", &self.build_payload(outcome)).await
    }

    /// Assemble the result payload from configuration, caller data and the
    /// accumulated log.
    fn build_payload(&self, outcome: BuildOutcome) -> ResultPayload {
        let (repo_owner, repo_name) = self.config.repo_owner_and_name();

        ResultPayload {
            project_id: self.config.lost_pixel_project_id.clone(),
            build_id: self.config.ci_build_id.clone(),
            build_number: self.config.ci_build_number.clone(),
            branch_ref: self.config.commit_ref.clone(),
            branch_name: self.config.commit_ref_name.clone(),
            repo_owner: repo_owner.to_string(),
            repo_name: repo_name.to_string(),
            commit: self.config.commit_hash.clone(),
            build_meta: outcome.event,
            comparisons: outcome.comparisons.unwrap_or_default(),
            success: outcome.success,
            log: self.logger.snapshot(),
        }
    }
}
