pub mod app;
pub mod app_core;
mod async_runtime;
pub mod domain;
pub mod history;
pub mod kernel;
pub mod orchestrator;
pub mod pipeline;
pub mod ports;
pub mod preview;
pub mod viewmodel;

pub use app::GenieConsole;
pub use app_core::*;
pub use domain::{AppState, ConsoleSettings, HistoryState, Screen};
pub use kernel::AppKernel;
pub use pipeline::{
    PipelineRun, PipelineRunEvent, PipelineRunId, RunStage, RunStatus, StageSignal, StartRejected,
};
pub use ports::*;
pub use viewmodel::*;
