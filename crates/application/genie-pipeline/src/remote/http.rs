use std::time::Duration;

use genie_core::{AssetId, GeneratedAsset, IdeaCreated, IdeaParams};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::endpoints::Endpoints;
use super::{PipelineClient, PipelineError};

/// Longest slice of an error body carried into `PipelineError::Service`.
const MAX_DETAIL_LEN: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTimeouts {
    /// Idea and full-asset calls.
    pub generation: Duration,
    pub history: Duration,
}

impl Default for RequestTimeouts {
    fn default() -> Self {
        Self {
            generation: Duration::from_secs(genie_config::DEFAULT_GENERATION_TIMEOUT_SECS),
            history: Duration::from_secs(genie_config::DEFAULT_HISTORY_TIMEOUT_SECS),
        }
    }
}

/// HTTP implementation of the pipeline contract.
pub struct HttpPipelineClient {
    client: Client,
    endpoints: Endpoints,
    timeouts: RequestTimeouts,
}

impl HttpPipelineClient {
    pub fn new(client: Client, endpoints: Endpoints, timeouts: RequestTimeouts) -> Self {
        Self {
            client,
            endpoints,
            timeouts,
        }
    }

    async fn send(&self, op: &str, req: RequestBuilder) -> Result<Response, PipelineError> {
        let resp = req.send().await.map_err(|e| transport(op, e))?;
        let status = resp.status();
        tracing::debug!("{op} -> {status}");

        if status.is_success() {
            return Ok(resp);
        }

        // Best effort: the body only feeds the log line.
        let body = resp.text().await.unwrap_or_default();
        Err(PipelineError::Service {
            status: status.as_u16(),
            detail: truncate(&body),
        })
    }

    async fn decode<T: DeserializeOwned>(op: &str, resp: Response) -> Result<T, PipelineError> {
        let status = resp.status().as_u16();
        let bytes = resp.bytes().await.map_err(|e| transport(op, e))?;
        serde_json::from_slice(&bytes).map_err(|e| PipelineError::Service {
            status,
            detail: format!("{op} returned an unexpected body: {e}"),
        })
    }
}

fn transport(op: &str, e: reqwest::Error) -> PipelineError {
    if e.is_timeout() {
        PipelineError::Transport(format!("{op} timed out: {e}"))
    } else {
        PipelineError::Transport(format!("{op} request failed: {e}"))
    }
}

fn truncate(body: &str) -> String {
    match body.char_indices().nth(MAX_DETAIL_LEN) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[async_trait::async_trait]
impl PipelineClient for HttpPipelineClient {
    async fn create_idea(&self, params: &IdeaParams) -> Result<IdeaCreated, PipelineError> {
        let url = self.endpoints.generate_idea()?;
        tracing::debug!("POST {url}");
        let req = self
            .client
            .post(url)
            .timeout(self.timeouts.generation)
            .json(params);
        let resp = self.send("generate-idea", req).await?;
        Self::decode("generate-idea", resp).await
    }

    async fn expand_asset(&self, id: &AssetId) -> Result<(), PipelineError> {
        let url = self.endpoints.generate_full_asset(id)?;
        tracing::debug!("POST {url}");
        let req = self.client.post(url).timeout(self.timeouts.generation);
        // The response body is not part of the contract.
        self.send("generate-full-asset", req).await.map(|_| ())
    }

    async fn list_history(&self) -> Result<Vec<GeneratedAsset>, PipelineError> {
        let url = self.endpoints.history()?;
        tracing::debug!("GET {url}");
        let req = self.client.get(url).timeout(self.timeouts.history);
        let resp = self.send("lead-magnets-all", req).await?;
        Self::decode("lead-magnets-all", resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(MAX_DETAIL_LEN + 10);
        let out = truncate(&body);
        assert_eq!(out.len(), MAX_DETAIL_LEN + 3);
        assert!(out.ends_with("..."));
        assert_eq!(truncate("short"), "short");
    }
}
