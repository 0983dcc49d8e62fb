use genie_core::AssetId;
use genie_pipeline::PipelineError;
use uuid::Uuid;

pub type PipelineRunId = Uuid;

pub const STAGE_ONE_MESSAGE: &str = "Strategist Agent initiating market scan...";
pub const STAGE_TWO_MESSAGE: &str = "Engineer Agent architecting PAS copy & logic...";
pub const COMPLETE_MESSAGE: &str = "Neural Funnel Deployed.";
pub const RETRY_PROMPT: &str = "Link error. Re-try requested.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Idle,
    Generating,
}

/// Named states of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunStage {
    Idle,
    CreatingIdea,
    ExpandingAsset,
    /// Both remote calls succeeded; waiting out the settle delay.
    Completing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageSignal {
    Start,
    Succeeded,
    Failed,
    Settled,
    Cancelled,
}

impl RunStage {
    /// Transition table. `None` means the signal is not valid in this stage.
    pub fn next(self, signal: StageSignal) -> Option<RunStage> {
        use RunStage::*;
        use StageSignal::*;

        match (self, signal) {
            (Idle, Start) => Some(CreatingIdea),
            (CreatingIdea, Succeeded) => Some(ExpandingAsset),
            (ExpandingAsset, Succeeded) => Some(Completing),
            (CreatingIdea | ExpandingAsset, Failed) => Some(Idle),
            (Completing, Settled) => Some(Idle),
            (CreatingIdea | ExpandingAsset | Completing, Cancelled) => Some(Idle),
            _ => None,
        }
    }

    /// Progress reported on entering the stage.
    pub fn progress(self) -> Option<u8> {
        match self {
            RunStage::Idle => None,
            RunStage::CreatingIdea => Some(10),
            RunStage::ExpandingAsset => Some(60),
            RunStage::Completing => Some(100),
        }
    }

    pub fn log_message(self) -> Option<&'static str> {
        match self {
            RunStage::Idle => None,
            RunStage::CreatingIdea => Some(STAGE_ONE_MESSAGE),
            RunStage::ExpandingAsset => Some(STAGE_TWO_MESSAGE),
            RunStage::Completing => Some(COMPLETE_MESSAGE),
        }
    }
}

#[derive(Debug, Clone)]
pub enum PipelineRunEvent {
    Started,
    StageEntered {
        stage: RunStage,
        asset_id: Option<AssetId>,
    },
    Failed {
        stage: RunStage,
        error: PipelineError,
    },
    /// Settle delay elapsed; completion side effects are due.
    Completed {
        asset_id: AssetId,
    },
    /// The run's task was dropped; no completion side effects follow.
    Cancelled,
}

/// Why a start request was declined. Neither case changes any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StartRejected {
    #[error("A brief is required")]
    EmptyBrief,
    #[error("A generation run is already in progress")]
    AlreadyRunning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineRun {
    pub run_id: Option<PipelineRunId>,
    pub status: RunStatus,
    pub stage: RunStage,
    pub progress_percent: u8,
    pub log_message: String,
    pub asset_id: Option<AssetId>,
    /// Why the last run stopped early, cleared by the next start.
    pub failure: Option<PipelineError>,
}

impl PipelineRun {
    pub fn idle() -> Self {
        Self {
            run_id: None,
            status: RunStatus::Idle,
            stage: RunStage::Idle,
            progress_percent: 0,
            log_message: String::new(),
            asset_id: None,
            failure: None,
        }
    }

    pub fn starting(run_id: PipelineRunId) -> Self {
        let stage = RunStage::CreatingIdea;
        Self {
            run_id: Some(run_id),
            status: RunStatus::Generating,
            stage,
            progress_percent: stage.progress().unwrap_or_default(),
            log_message: stage.log_message().unwrap_or_default().to_string(),
            asset_id: None,
            failure: None,
        }
    }

    pub fn is_generating(&self) -> bool {
        self.status == RunStatus::Generating
    }

    /// Moves into `stage` if the table allows it from the current one.
    pub(crate) fn enter(&mut self, signal: StageSignal, stage: RunStage) -> bool {
        if self.stage.next(signal) != Some(stage) {
            return false;
        }
        self.stage = stage;
        if let Some(progress) = stage.progress() {
            self.progress_percent = self.progress_percent.max(progress);
        }
        if let Some(message) = stage.log_message() {
            self.log_message = message.to_string();
        }
        if stage == RunStage::Idle {
            self.status = RunStatus::Idle;
        }
        true
    }
}

impl Default for PipelineRun {
    fn default() -> Self {
        Self::idle()
    }
}
