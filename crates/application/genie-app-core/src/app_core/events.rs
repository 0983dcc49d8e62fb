use chrono::{DateTime, Utc};

use crate::domain::Screen;
use crate::pipeline::{PipelineRunEvent, PipelineRunId};
use genie_core::GeneratedAsset;

#[derive(Debug, Clone)]
pub enum DomainEvent {
    // Navigation
    RouteChanged(Screen),

    // Inputs
    BriefEdited(String),
    AvoidTopicsEdited(String),

    // Pipeline
    PipelineEvent {
        run_id: PipelineRunId,
        ev: PipelineRunEvent,
    },

    // History
    HistoryRefreshStarted {
        seq: u64,
    },
    HistoryLoaded {
        seq: u64,
        assets: Vec<GeneratedAsset>,
        at: DateTime<Utc>,
    },
    HistoryRefreshFailed {
        seq: u64,
    },
}
