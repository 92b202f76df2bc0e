//! The project entity tracked through the production workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::ProjectId;
use crate::script::ScriptRecord;
use crate::stage::WorkflowStage;

/// A podcast production project.
///
/// Created in the `initialize` stage and mutated in place by every workflow
/// operation; the identity (`id`) never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier, generated at creation, immutable.
    pub id: ProjectId,

    /// Display name.
    pub name: String,

    /// Episode topic.
    pub topic: String,

    /// Current workflow stage.
    pub status: WorkflowStage,

    /// Compiled script text, written at script approval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,

    /// Structured script content from the remote generation service.
    #[serde(rename = "scriptData", skip_serializing_if = "Option::is_none")]
    pub script_data: Option<ScriptRecord>,

    /// Approved prompt for image generation.
    #[serde(rename = "imagePrompt", skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,

    /// URL of the generated image.
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// URL of the generated video.
    #[serde(rename = "videoUrl", skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,

    /// When the project was created.
    #[serde(rename = "createdAt", default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new project in the `initialize` stage.
    pub fn new(name: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            id: ProjectId::new(),
            name: name.into(),
            topic: topic.into(),
            status: WorkflowStage::Initialize,
            script: None,
            script_data: None,
            image_prompt: None,
            image_url: None,
            video_url: None,
            created_at: Utc::now(),
        }
    }

    /// Merges a partial script record into this project's script data.
    ///
    /// Creates the record if none exists yet.
    pub fn merge_script_data(&mut self, patch: ScriptRecord) {
        match &mut self.script_data {
            Some(data) => data.merge(patch),
            None => self.script_data = Some(patch),
        }
    }

    /// Returns true once media generation has completed.
    pub fn is_finalized(&self) -> bool {
        self.status.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_creation() {
        let project = Project::new("W1", "AI topics");

        assert!(project.id.as_str().starts_with("proj-"));
        assert_eq!(project.name, "W1");
        assert_eq!(project.topic, "AI topics");
        assert_eq!(project.status, WorkflowStage::Initialize);
        assert!(project.script.is_none());
        assert!(project.script_data.is_none());
        assert!(project.image_prompt.is_none());
        assert!(!project.is_finalized());
    }

    #[test]
    fn test_merge_script_data_creates_record() {
        let mut project = Project::new("W1", "AI topics");
        let patch = ScriptRecord {
            opening_hook: Some("h".to_string()),
            ..ScriptRecord::default()
        };

        project.merge_script_data(patch);

        let data = project.script_data.as_ref().unwrap();
        assert_eq!(data.opening_hook.as_deref(), Some("h"));
    }

    #[test]
    fn test_merge_script_data_is_partial() {
        let mut project = Project::new("W1", "AI topics");
        project.script_data = Some(ScriptRecord {
            opening_hook: Some("h".to_string()),
            part_1: Some("p1".to_string()),
            ..ScriptRecord::default()
        });

        project.merge_script_data(ScriptRecord {
            part_1: Some("edited".to_string()),
            ..ScriptRecord::default()
        });

        let data = project.script_data.as_ref().unwrap();
        assert_eq!(data.opening_hook.as_deref(), Some("h"));
        assert_eq!(data.part_1.as_deref(), Some("edited"));
    }

    #[test]
    fn test_project_serialization_roundtrip() {
        let mut project = Project::new("W1", "AI topics");
        project.status = WorkflowStage::ApproveScript;
        project.script = Some("full text".to_string());
        project.video_url = Some("https://cdn.example.com/v.mp4".to_string());

        let json = serde_json::to_string(&project).unwrap();
        let loaded: Project = serde_json::from_str(&json).unwrap();

        assert_eq!(project, loaded);
    }

    #[test]
    fn test_project_serializes_camel_case_keys() {
        let mut project = Project::new("W1", "AI topics");
        project.image_prompt = Some("sunset over a harbor".to_string());

        let json = serde_json::to_string(&project).unwrap();
        assert!(json.contains("\"imagePrompt\""));
        assert!(json.contains("\"status\":\"initialize\""));
        assert!(!json.contains("\"videoUrl\""));
    }

    #[test]
    fn test_project_deserializes_without_created_at() {
        // Collections persisted before the timestamp existed still load.
        let json = r#"{"id":"proj-1","name":"W1","topic":"t","status":"draft_script"}"#;
        let project: Project = serde_json::from_str(json).unwrap();

        assert_eq!(project.status, WorkflowStage::DraftScript);
    }
}
