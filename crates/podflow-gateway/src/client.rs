//! Webhook client for the remote automation service.

use async_trait::async_trait;
use chrono::Utc;
use podflow_models::{MediaRecord, Project, ScriptRecord};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::config::GatewayConfig;
use crate::error::{GatewayError, Result};
use crate::normalize;
use crate::traits::SyncGateway;

/// HTTP client for the webhook-driven automation service.
///
/// One POST per operation, no retry. Responses are normalized through
/// [`crate::normalize`] before they reach the caller.
#[derive(Clone)]
pub struct WebhookClient {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl WebhookClient {
    /// Creates a new client with the given endpoint configuration.
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client, config })
    }

    /// Posts a JSON payload and returns the decoded response body.
    async fn post(&self, url: &str, payload: &impl Serialize) -> Result<Value> {
        trace!("posting webhook request to {}", url);

        let response = self.client.post(url).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let value = response
            .json()
            .await
            .map_err(|e| GatewayError::Malformed(e.to_string()))?;

        debug!("webhook response received from {}", url);
        Ok(value)
    }
}

#[async_trait]
impl SyncGateway for WebhookClient {
    async fn initial_script(&self, project: &Project) -> Result<ScriptRecord> {
        let payload = SyncRequest::from_project(project);
        let value = self.post(&self.config.sync_project_url, &payload).await?;
        normalize::script_record(value)
    }

    async fn process_approved_script(
        &self,
        project: &Project,
        script: &str,
        script_data: &ScriptRecord,
    ) -> Result<ScriptRecord> {
        let payload = ProcessScriptRequest {
            project_id: project.id.as_str().to_string(),
            project_name: project.name.clone(),
            script: script.to_string(),
            script_data: script_data.clone(),
            timestamp: Utc::now().to_rfc3339(),
        };
        let value = self.post(&self.config.process_script_url, &payload).await?;
        normalize::script_record(value)
    }

    async fn generate_video(&self, project: &Project) -> Result<MediaRecord> {
        let payload = MediaRequest::from_project(project);
        let value = self.post(&self.config.generate_video_url, &payload).await?;
        normalize::media_record(value)
    }

    async fn generate_image(&self, project: &Project) -> Result<MediaRecord> {
        let payload = MediaRequest::from_project(project);
        let value = self.post(&self.config.generate_image_url, &payload).await?;
        normalize::media_record(value)
    }
}

/// Payload for the new-project synchronization endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRequest {
    /// Project identifier.
    pub project_id: String,
    /// Project display name.
    pub project_name: String,
    /// Episode topic.
    pub project_topic: String,
    /// Workflow stage at the time of the request.
    pub current_status: String,
    /// RFC 3339 request timestamp.
    pub timestamp: String,
}

impl SyncRequest {
    fn from_project(project: &Project) -> Self {
        Self {
            project_id: project.id.as_str().to_string(),
            project_name: project.name.clone(),
            project_topic: project.topic.clone(),
            current_status: project.status.as_str().to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Payload for the approved-script post-processing endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessScriptRequest {
    /// Project identifier.
    pub project_id: String,
    /// Project display name.
    pub project_name: String,
    /// Compiled script text as approved.
    pub script: String,
    /// Full script record at the time of approval.
    pub script_data: ScriptRecord,
    /// RFC 3339 request timestamp.
    pub timestamp: String,
}

/// Payload for the media-generation endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRequest {
    /// Project identifier.
    pub project_id: String,
    /// Project display name.
    pub project_name: String,
    /// Episode topic.
    pub project_topic: String,
    /// Workflow stage at the time of the request.
    pub current_status: String,
    /// Script record, when the project has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_data: Option<ScriptRecord>,
}

impl MediaRequest {
    fn from_project(project: &Project) -> Self {
        Self {
            project_id: project.id.as_str().to_string(),
            project_name: project.name.clone(),
            project_topic: project.topic.clone(),
            current_status: project.status.as_str().to_string(),
            script_data: project.script_data.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_request_wire_shape() {
        let project = Project::new("W1", "AI topics");
        let payload = SyncRequest::from_project(&project);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["projectId"], project.id.as_str());
        assert_eq!(json["projectName"], "W1");
        assert_eq!(json["projectTopic"], "AI topics");
        assert_eq!(json["currentStatus"], "initialize");
        assert!(json["timestamp"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn test_process_script_request_wire_shape() {
        let record = ScriptRecord {
            opening_hook: Some("h".to_string()),
            ..ScriptRecord::default()
        };
        let payload = ProcessScriptRequest {
            project_id: "proj-1".to_string(),
            project_name: "W1".to_string(),
            script: "full text".to_string(),
            script_data: record,
            timestamp: "2025-01-01T00:00:00Z".to_string(),
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["script"], "full text");
        assert_eq!(json["scriptData"]["Opening Hook"], "h");
    }

    #[test]
    fn test_media_request_omits_missing_script_data() {
        let project = Project::new("W1", "AI topics");
        let payload = MediaRequest::from_project(&project);

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("scriptData").is_none());
    }

    #[test]
    fn test_client_builds_with_timeout() {
        let config = GatewayConfig::new().with_timeout(std::time::Duration::from_secs(5));
        assert!(WebhookClient::new(config).is_ok());
    }
}
