//! Gateway configuration.

use std::time::Duration;

/// Endpoint configuration for the remote automation service.
///
/// The defaults point at the hosted automation workflows; deployments with
/// their own automation engine override them with the builder setters.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Endpoint for new-project synchronization (initial script generation).
    pub sync_project_url: String,
    /// Endpoint for approved-script post-processing.
    pub process_script_url: String,
    /// Endpoint for video generation.
    pub generate_video_url: String,
    /// Endpoint for image generation.
    pub generate_image_url: String,
    /// Request timeout; transport default when unset.
    pub timeout: Option<Duration>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            sync_project_url: "https://n8n.chichung.studio/webhook/SyncProject".to_string(),
            process_script_url: "https://n8n.chichung.studio/webhook/ProcessScript".to_string(),
            generate_video_url: "https://n8n.chichung.studio/webhook/GenerateVideo".to_string(),
            generate_image_url: "https://n8n.chichung.studio/webhook/GenerateImage".to_string(),
            timeout: None,
        }
    }
}

impl GatewayConfig {
    /// Creates a new config with default endpoints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the project-synchronization endpoint.
    pub fn with_sync_project_url(mut self, url: impl Into<String>) -> Self {
        self.sync_project_url = url.into();
        self
    }

    /// Sets the script post-processing endpoint.
    pub fn with_process_script_url(mut self, url: impl Into<String>) -> Self {
        self.process_script_url = url.into();
        self
    }

    /// Sets the video-generation endpoint.
    pub fn with_generate_video_url(mut self, url: impl Into<String>) -> Self {
        self.generate_video_url = url.into();
        self
    }

    /// Sets the image-generation endpoint.
    pub fn with_generate_image_url(mut self, url: impl Into<String>) -> Self {
        self.generate_image_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
