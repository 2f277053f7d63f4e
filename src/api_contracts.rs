//! API contract types for the Lost Pixel platform
//!
//! These types define the exact JSON shape sent to the result-ingestion
//! endpoint. Field names are camelCase on the wire and must stay in sync
//! with the platform's TypeScript definitions.

use serde::{Deserialize, Serialize};

/// One visual comparison outcome.
///
/// Produced by the comparison engine and carried through to the API
/// unmodified; this crate never inspects its contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Comparison(pub serde_json::Value);

/// Snapshot of the webhook event that triggered the current run.
///
/// Only the kind of trigger is distinguished; the payload itself is opaque
/// and serializes as-is under `buildMeta`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WebhookEvent {
    PullRequest(serde_json::Value),
    CheckSuiteRequested(serde_json::Value),
    CheckRunRerequested(serde_json::Value),
}

impl WebhookEvent {
    /// The raw event payload.
    pub fn payload(&self) -> &serde_json::Value {
        match self {
            WebhookEvent::PullRequest(payload)
            | WebhookEvent::CheckSuiteRequested(payload)
            | WebhookEvent::CheckRunRerequested(payload) => payload,
        }
    }
}

/// Body of `POST /api/result`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPayload {
    pub project_id: String,
    pub build_id: String,
    pub build_number: String,
    pub branch_ref: String,
    pub branch_name: String,
    pub repo_owner: String,
    pub repo_name: String,
    pub commit: String,
    /// Omitted entirely for runs that were not webhook-triggered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_meta: Option<WebhookEvent>,
    pub comparisons: Vec<Comparison>,
    pub success: bool,
    /// The full in-memory log of the run, line by line.
    pub log: Vec<String>,
}
