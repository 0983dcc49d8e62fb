use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::app_core::DomainEvent;
use crate::pipeline::{PipelineRunEvent, PipelineRunId, RunStage, StageSignal};

use genie_core::{AssetId, GenerationRequest};
use genie_pipeline::PipelineClient;

/// Drives pipeline runs on the shared runtime and reports back as events.
///
/// It never touches application state itself; the kernel applies whatever
/// it sends, which keeps state single-writer.
pub struct GenerationOrchestrator<C> {
    client: Arc<C>,
    tx: mpsc::Sender<DomainEvent>,
    settle_delay: Duration,
    cancel: Option<CancellationToken>,
}

impl<C: PipelineClient> GenerationOrchestrator<C> {
    pub fn new(client: Arc<C>, tx: mpsc::Sender<DomainEvent>, settle_delay: Duration) -> Self {
        Self {
            client,
            tx,
            settle_delay,
            cancel: None,
        }
    }

    /// Drops the task of the current run, including a pending completion.
    pub fn cancel(&mut self) {
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
    }

    pub fn start(&mut self, run_id: PipelineRunId, request: GenerationRequest) -> anyhow::Result<()> {
        let rt = crate::async_runtime::runtime()?;

        self.cancel();
        let token = CancellationToken::new();
        self.cancel = Some(token.clone());

        let client = self.client.clone();
        let tx = self.tx.clone();
        let settle_delay = self.settle_delay;

        rt.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!(%run_id, "Generation run dropped before completion");
                }
                _ = run_pipeline(client.as_ref(), &tx, run_id, request, settle_delay) => {}
            }
        });

        Ok(())
    }
}

impl<C> Drop for GenerationOrchestrator<C> {
    fn drop(&mut self) {
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
    }
}

/// One run from stage 1 to the completion event.
///
/// The loop walks the stage table; a failed call ends the run at once, so
/// the asset is never expanded unless its idea was created.
pub async fn run_pipeline<C: PipelineClient + ?Sized>(
    client: &C,
    tx: &mpsc::Sender<DomainEvent>,
    run_id: PipelineRunId,
    request: GenerationRequest,
    settle_delay: Duration,
) {
    let emit = move |ev: PipelineRunEvent| async move {
        let _ = tx.send(DomainEvent::PipelineEvent { run_id, ev }).await;
    };

    let params = request.idea_params();
    let mut stage = RunStage::CreatingIdea;
    let mut asset_id: Option<AssetId> = None;

    tracing::info!(%run_id, "Generation started");

    loop {
        let result = match stage {
            RunStage::CreatingIdea => client.create_idea(&params).await.map(|created| {
                tracing::info!(%run_id, id = %created.id, "Idea created");
                asset_id = Some(created.id);
            }),
            RunStage::ExpandingAsset => match asset_id.as_ref() {
                Some(id) => client.expand_asset(id).await,
                None => return,
            },
            RunStage::Completing => {
                let Some(id) = asset_id else { return };
                tokio::time::sleep(settle_delay).await;
                tracing::info!(%run_id, %id, "Generation complete");
                emit(PipelineRunEvent::Completed { asset_id: id }).await;
                return;
            }
            RunStage::Idle => return,
        };

        match result {
            Ok(()) => {
                let Some(next) = stage.next(StageSignal::Succeeded) else {
                    return;
                };
                emit(PipelineRunEvent::StageEntered {
                    stage: next,
                    asset_id: asset_id.clone(),
                })
                .await;
                stage = next;
            }
            Err(error) => {
                tracing::error!(%run_id, ?stage, "Generation failed: {error}");
                emit(PipelineRunEvent::Failed { stage, error }).await;
                return;
            }
        }
    }
}
