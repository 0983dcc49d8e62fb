pub mod remote;

// Re-export the client contract
pub use remote::endpoints::Endpoints;
pub use remote::http::{HttpPipelineClient, RequestTimeouts};
pub use remote::{PipelineClient, PipelineError};

/// Convenience constructor for the HTTP client against `api_base`.
pub fn default_client(
    client: reqwest::Client,
    api_base: &str,
    timeouts: RequestTimeouts,
) -> Result<HttpPipelineClient, PipelineError> {
    Ok(HttpPipelineClient::new(
        client,
        Endpoints::new(api_base)?,
        timeouts,
    ))
}
