use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Time allowed to establish a TCP connection to the service.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum NetError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

fn user_agent() -> String {
    format!("genie-console/{}", env!("CARGO_PKG_VERSION"))
}

/// Shared HTTP client for all service calls.
///
/// Request timeouts are set per call by the pipeline client since the idea
/// and history endpoints have very different latencies.
pub fn default_http_client() -> Result<Client, NetError> {
    let client = Client::builder()
        .user_agent(user_agent())
        .connect_timeout(CONNECT_TIMEOUT)
        .build()?;
    tracing::debug!("HTTP client ready ({})", user_agent());
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_names_the_console() {
        assert!(user_agent().starts_with("genie-console/"));
    }
}
