//! The six-stage podcast production workflow.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One discrete phase of podcast production, tracked per project.
///
/// The enum is closed and ordered: a project moves forward through these
/// stages and never backward. Draft stages hold until an explicit approval
/// is recorded.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStage {
    /// Project created; no script generated yet.
    #[default]
    Initialize,
    /// Draft script received from the remote service, awaiting approval.
    DraftScript,
    /// Script approved by the user.
    ApproveScript,
    /// Image prompt being drafted, awaiting approval.
    DraftImagePrompt,
    /// Image prompt approved by the user.
    ApproveImagePrompt,
    /// Video and/or image generated; terminal stage.
    MediaFinalized,
}

impl WorkflowStage {
    /// All stages in workflow order.
    pub const ALL: [WorkflowStage; 6] = [
        WorkflowStage::Initialize,
        WorkflowStage::DraftScript,
        WorkflowStage::ApproveScript,
        WorkflowStage::DraftImagePrompt,
        WorkflowStage::ApproveImagePrompt,
        WorkflowStage::MediaFinalized,
    ];

    /// Returns the next stage on the normal path.
    ///
    /// Draft stages return themselves: they hold until the corresponding
    /// approval operation records the transition. The terminal stage also
    /// returns itself.
    pub fn next(self) -> WorkflowStage {
        match self {
            WorkflowStage::Initialize => WorkflowStage::DraftScript,
            WorkflowStage::DraftScript => WorkflowStage::DraftScript,
            WorkflowStage::ApproveScript => WorkflowStage::DraftImagePrompt,
            WorkflowStage::DraftImagePrompt => WorkflowStage::DraftImagePrompt,
            WorkflowStage::ApproveImagePrompt => WorkflowStage::MediaFinalized,
            WorkflowStage::MediaFinalized => WorkflowStage::MediaFinalized,
        }
    }

    /// The wire/storage identifier for the stage.
    pub fn as_str(self) -> &'static str {
        match self {
            WorkflowStage::Initialize => "initialize",
            WorkflowStage::DraftScript => "draft_script",
            WorkflowStage::ApproveScript => "approve_script",
            WorkflowStage::DraftImagePrompt => "draft_image_prompt",
            WorkflowStage::ApproveImagePrompt => "approve_image_prompt",
            WorkflowStage::MediaFinalized => "media_finalized",
        }
    }

    /// Human-readable label for progress displays.
    pub fn label(self) -> &'static str {
        match self {
            WorkflowStage::Initialize => "Initialize",
            WorkflowStage::DraftScript => "Draft Script",
            WorkflowStage::ApproveScript => "Approve Script",
            WorkflowStage::DraftImagePrompt => "Draft Image",
            WorkflowStage::ApproveImagePrompt => "Approve Image",
            WorkflowStage::MediaFinalized => "Finalized",
        }
    }

    /// Returns true if this is the terminal stage.
    pub fn is_terminal(self) -> bool {
        self == WorkflowStage::MediaFinalized
    }
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_default() {
        assert_eq!(WorkflowStage::default(), WorkflowStage::Initialize);
    }

    #[test]
    fn test_stage_serialization() {
        let json = serde_json::to_string(&WorkflowStage::DraftScript).unwrap();
        assert_eq!(json, "\"draft_script\"");

        let parsed: WorkflowStage = serde_json::from_str("\"approve_image_prompt\"").unwrap();
        assert_eq!(parsed, WorkflowStage::ApproveImagePrompt);
    }

    #[test]
    fn test_unknown_stage_rejected() {
        let result: Result<WorkflowStage, _> = serde_json::from_str("\"published\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_next_advances_from_initialize() {
        assert_eq!(WorkflowStage::Initialize.next(), WorkflowStage::DraftScript);
    }

    #[test]
    fn test_next_holds_draft_stages() {
        assert_eq!(WorkflowStage::DraftScript.next(), WorkflowStage::DraftScript);
        assert_eq!(
            WorkflowStage::DraftImagePrompt.next(),
            WorkflowStage::DraftImagePrompt
        );
    }

    #[test]
    fn test_next_advances_approved_stages() {
        assert_eq!(
            WorkflowStage::ApproveScript.next(),
            WorkflowStage::DraftImagePrompt
        );
        assert_eq!(
            WorkflowStage::ApproveImagePrompt.next(),
            WorkflowStage::MediaFinalized
        );
    }

    #[test]
    fn test_next_is_closed_over_the_enum() {
        // Every transition lands back inside the six-value enum.
        for stage in WorkflowStage::ALL {
            assert!(WorkflowStage::ALL.contains(&stage.next()));
        }
    }

    #[test]
    fn test_terminal_stage_is_fixed_point() {
        assert!(WorkflowStage::MediaFinalized.is_terminal());
        assert_eq!(
            WorkflowStage::MediaFinalized.next(),
            WorkflowStage::MediaFinalized
        );
    }

    #[test]
    fn test_stage_ordering() {
        assert!(WorkflowStage::Initialize < WorkflowStage::DraftScript);
        assert!(WorkflowStage::ApproveImagePrompt < WorkflowStage::MediaFinalized);
    }

    #[test]
    fn test_labels() {
        assert_eq!(WorkflowStage::Initialize.label(), "Initialize");
        assert_eq!(WorkflowStage::DraftImagePrompt.label(), "Draft Image");
        assert_eq!(WorkflowStage::MediaFinalized.label(), "Finalized");
    }
}
