use std::sync::Arc;
use tokio::sync::mpsc;

use crate::app_core::{AppCommand, AppStore, DomainEvent};
use crate::domain::ConsoleSettings;
use crate::history::HistoryRefresher;
use crate::orchestrator::GenerationOrchestrator;
use crate::pipeline::{PipelineRunEvent, PipelineRunId, RunStage, StartRejected};
use crate::ports::PreviewPort;

use genie_core::AssetId;
use genie_pipeline::{Endpoints, PipelineClient, PipelineError};

/// Single entry point of the console.
///
/// Commands and completed remote work are both turned into `DomainEvent`s and
/// applied to the store on the thread that calls `dispatch`/`tick`.
pub struct AppKernel<C, P> {
    pub store: AppStore,
    preview: Arc<P>,
    endpoints: Endpoints,
    orchestrator: GenerationOrchestrator<C>,
    history: HistoryRefresher<C>,

    tx: mpsc::Sender<DomainEvent>,
    rx: mpsc::Receiver<DomainEvent>,
}

impl<C, P> AppKernel<C, P>
where
    C: PipelineClient,
    P: PreviewPort,
{
    pub fn new(
        store: AppStore,
        client: C,
        preview: P,
        endpoints: Endpoints,
        settings: &ConsoleSettings,
    ) -> Self {
        let (tx, rx) = mpsc::channel(genie_config::EVENT_CHANNEL_CAPACITY);
        let client = Arc::new(client);
        Self {
            store,
            preview: Arc::new(preview),
            endpoints,
            orchestrator: GenerationOrchestrator::new(
                client.clone(),
                tx.clone(),
                settings.settle_delay(),
            ),
            history: HistoryRefresher::new(client, tx.clone()),
            tx,
            rx,
        }
    }

    pub fn dispatch(&mut self, cmd: AppCommand) {
        match cmd {
            AppCommand::LoadInitialState => self.refresh_history(),

            AppCommand::Navigate(screen) => self.store.apply(DomainEvent::RouteChanged(screen)),

            AppCommand::EditBrief(brief) => self.store.apply(DomainEvent::BriefEdited(brief)),
            AppCommand::EditAvoidTopics(topics) => {
                self.store.apply(DomainEvent::AvoidTopicsEdited(topics))
            }

            AppCommand::StartGeneration => {
                if let Err(reason) = self.start_generation() {
                    tracing::debug!("Start ignored: {reason}");
                }
            }

            AppCommand::RefreshHistory => self.refresh_history(),

            AppCommand::OpenPreview(id) => self.open_preview(&id),
        }
    }

    /// Starts a run from the current inputs.
    ///
    /// On success the state already reads `generating` when this returns.
    pub fn start_generation(&mut self) -> Result<PipelineRunId, StartRejected> {
        let state = self.store.state();
        if state.run.is_generating() {
            tracing::warn!("Generation already in progress; ignoring new request");
            return Err(StartRejected::AlreadyRunning);
        }
        if !state.form.is_submittable() {
            return Err(StartRejected::EmptyBrief);
        }

        let run_id: PipelineRunId = uuid::Uuid::new_v4();
        self.store.apply(DomainEvent::PipelineEvent {
            run_id,
            ev: PipelineRunEvent::Started,
        });

        if let Err(e) = self.orchestrator.start(run_id, state.form) {
            tracing::error!("Failed to schedule generation run: {e}");
            self.store.apply(DomainEvent::PipelineEvent {
                run_id,
                ev: PipelineRunEvent::Failed {
                    stage: RunStage::CreatingIdea,
                    error: PipelineError::Transport(e.to_string()),
                },
            });
        }
        Ok(run_id)
    }

    pub fn refresh_history(&mut self) {
        let seq = self.store.with_state(|s| s.history.requested_seq) + 1;
        self.store
            .apply(DomainEvent::HistoryRefreshStarted { seq });
        if let Err(e) = self.history.refresh(seq) {
            tracing::warn!("Failed to schedule history refresh: {e}");
            self.store.apply(DomainEvent::HistoryRefreshFailed { seq });
        }
    }

    pub fn preview_url(&self, id: &AssetId) -> Option<String> {
        match self.endpoints.preview(id) {
            Ok(url) => Some(url.to_string()),
            Err(e) => {
                tracing::warn!("No preview address for {id}: {e}");
                None
            }
        }
    }

    pub fn open_preview(&self, id: &AssetId) {
        if let Some(url) = self.preview_url(id) {
            if let Err(e) = self.preview.open_preview(&url) {
                tracing::warn!("Failed to open preview {url}: {e}");
            }
        }
    }

    /// Applies everything remote work has reported since the last call.
    pub fn tick(&mut self) {
        while let Ok(ev) = self.rx.try_recv() {
            self.apply_remote(ev);
        }
    }

    /// Waits for the next remote event and applies it, together with any
    /// others already queued. Returns `false` once no sender is left.
    pub async fn next_event(&mut self) -> bool {
        match self.rx.recv().await {
            Some(ev) => {
                self.apply_remote(ev);
                self.tick();
                true
            }
            None => false,
        }
    }

    fn apply_remote(&mut self, ev: DomainEvent) {
        if let DomainEvent::PipelineEvent { run_id, ev: run_ev } = &ev {
            let run = self.store.with_state(|s| s.run.clone());
            if run.run_id != Some(*run_id) {
                return;
            }

            if let PipelineRunEvent::Completed { asset_id } = run_ev {
                if run.stage != RunStage::Completing {
                    return;
                }
                let asset_id = asset_id.clone();
                // Preview, dashboard, cleared inputs and idle status land in one
                // apply; the history refresh is requested right after.
                self.store.apply(ev);
                self.open_preview(&asset_id);
                self.refresh_history();
                return;
            }
        }
        self.store.apply(ev);
    }

    pub fn is_generating(&self) -> bool {
        self.store.with_state(|s| s.run.is_generating())
    }

    /// Drops any in-flight run, including a completion still waiting on its delay.
    /// The run settles to idle with no completion side effects.
    pub fn shutdown(&mut self) {
        self.orchestrator.cancel();
        let active = self
            .store
            .with_state(|s| s.run.run_id.filter(|_| s.run.is_generating()));
        if let Some(run_id) = active {
            tracing::debug!(%run_id, "Generation run cancelled");
            self.store.apply(DomainEvent::PipelineEvent {
                run_id,
                ev: PipelineRunEvent::Cancelled,
            });
        }
    }

    pub fn sender(&self) -> mpsc::Sender<DomainEvent> {
        self.tx.clone()
    }
}
