use crate::ports::PreviewPort;

/// Opens previews in the system browser, or only logs the address when disabled.
pub struct BrowserPreview {
    enabled: bool,
}

impl Default for BrowserPreview {
    fn default() -> Self {
        Self::new(true)
    }
}

impl BrowserPreview {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl PreviewPort for BrowserPreview {
    fn open_preview(&self, url: &str) -> anyhow::Result<()> {
        if !self.enabled {
            tracing::info!("Preview ready at {url}");
            return Ok(());
        }
        genie_infra::open_url(url)?;
        Ok(())
    }
}
