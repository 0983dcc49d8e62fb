use std::sync::Arc;

use chrono::Utc;
use tokio::sync::mpsc;

use crate::app_core::DomainEvent;
use genie_pipeline::PipelineClient;

/// Fetches the history listing in the background.
pub struct HistoryRefresher<C> {
    client: Arc<C>,
    tx: mpsc::Sender<DomainEvent>,
}

impl<C: PipelineClient> HistoryRefresher<C> {
    pub fn new(client: Arc<C>, tx: mpsc::Sender<DomainEvent>) -> Self {
        Self { client, tx }
    }

    pub fn refresh(&self, seq: u64) -> anyhow::Result<()> {
        let rt = crate::async_runtime::runtime()?;
        let client = self.client.clone();
        let tx = self.tx.clone();
        rt.spawn(async move {
            let ev = fetch_history(client.as_ref(), seq).await;
            let _ = tx.send(ev).await;
        });
        Ok(())
    }
}

/// A failed listing is reported as "no change", never as an empty history.
pub async fn fetch_history<C: PipelineClient + ?Sized>(client: &C, seq: u64) -> DomainEvent {
    match client.list_history().await {
        Ok(assets) => {
            tracing::debug!(seq, count = assets.len(), "History refreshed");
            DomainEvent::HistoryLoaded {
                seq,
                assets,
                at: Utc::now(),
            }
        }
        Err(e) => {
            tracing::warn!(seq, "History refresh failed, keeping cached entries: {e}");
            DomainEvent::HistoryRefreshFailed { seq }
        }
    }
}
