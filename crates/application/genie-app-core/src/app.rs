use crate::app_core::AppStore;
use crate::domain::{AppState, ConsoleSettings, Screen};
use crate::kernel::AppKernel;
use crate::preview::BrowserPreview;

use genie_pipeline::{Endpoints, HttpPipelineClient};

/// The console wired to the HTTP service and the system browser.
pub type GenieConsole = AppKernel<HttpPipelineClient, BrowserPreview>;

impl GenieConsole {
    pub fn connect(settings: &ConsoleSettings, screen: Screen) -> anyhow::Result<Self> {
        let http = genie_infra::net::default_http_client()?;
        let endpoints = Endpoints::new(&settings.api_base)?;
        let client = genie_pipeline::default_client(
            http,
            &settings.api_base,
            settings.request_timeouts(),
        )?;

        tracing::info!(api_base = %endpoints.base(), ?screen, "Console connected");

        Ok(AppKernel::new(
            AppStore::new(AppState::new(screen)),
            client,
            BrowserPreview::new(settings.open_previews),
            endpoints,
            settings,
        ))
    }
}
