use genie_core::AssetId;
use reqwest::Url;

use super::PipelineError;

const GENERATE_IDEA: &str = "generate-idea";
const GENERATE_FULL_ASSET: &str = "generate-full-asset";
const PREVIEW: &str = "preview";
const HISTORY: &str = "lead-magnets-all";

/// Route table of the generation service, rooted at the versioned prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    /// Accepts the base with or without a trailing slash.
    pub fn new(api_base: &str) -> Result<Self, PipelineError> {
        let mut base = Url::parse(api_base.trim())
            .map_err(|e| PipelineError::InvalidBase(format!("{api_base}: {e}")))?;

        if !matches!(base.scheme(), "http" | "https") || base.cannot_be_a_base() {
            return Err(PipelineError::InvalidBase(format!(
                "{api_base}: expected an http(s) address"
            )));
        }

        base.set_query(None);
        base.set_fragment(None);

        // Treat the input as a directory so joins land under the prefix
        // (`/api/v1/x`) instead of replacing its last segment.
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }

        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn generate_idea(&self) -> Result<Url, PipelineError> {
        self.with_segments(&[GENERATE_IDEA])
    }

    pub fn generate_full_asset(&self, id: &AssetId) -> Result<Url, PipelineError> {
        self.with_segments(&[GENERATE_FULL_ASSET, id.as_str()])
    }

    pub fn preview(&self, id: &AssetId) -> Result<Url, PipelineError> {
        self.with_segments(&[PREVIEW, id.as_str()])
    }

    pub fn history(&self) -> Result<Url, PipelineError> {
        self.with_segments(&[HISTORY])
    }

    fn with_segments(&self, segments: &[&str]) -> Result<Url, PipelineError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| PipelineError::InvalidBase(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
