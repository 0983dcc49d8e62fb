use genie_core::{AssetId, GeneratedAsset, IdeaCreated, IdeaParams};

pub mod endpoints;
pub mod http;

/// Failure of a single exchange with the generation service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    /// Service unreachable, connection dropped, or the request timed out.
    #[error("Transport error: {0}")]
    Transport(String),
    /// Service answered, but not with a usable success response.
    #[error("Service error ({status}): {detail}")]
    Service { status: u16, detail: String },
    #[error("Invalid service address: {0}")]
    InvalidBase(String),
}

impl PipelineError {
    pub fn is_transport(&self) -> bool {
        matches!(self, PipelineError::Transport(_))
    }
}

/// Request/response operations of the remote pipeline. No retries happen at
/// this layer; callers own the recovery policy.
#[async_trait::async_trait]
pub trait PipelineClient: Send + Sync + 'static {
    async fn create_idea(&self, params: &IdeaParams) -> Result<IdeaCreated, PipelineError>;
    async fn expand_asset(&self, id: &AssetId) -> Result<(), PipelineError>;
    async fn list_history(&self) -> Result<Vec<GeneratedAsset>, PipelineError>;
}
