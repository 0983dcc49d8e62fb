use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::pipeline::PipelineRun;
use genie_core::{AssetId, GeneratedAsset, GenerationRequest};
use genie_pipeline::RequestTimeouts;

/// Query parameter that selects the initial screen.
pub const VIEW_QUERY_KEY: &str = "view";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsoleSettings {
    pub api_base: String,
    pub settle_delay_ms: u64,
    pub generation_timeout_secs: u64,
    pub history_timeout_secs: u64,
    #[serde(default = "default_open_previews")]
    pub open_previews: bool,
}

fn default_open_previews() -> bool {
    true
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            api_base: genie_config::DEFAULT_API_BASE.to_string(),
            settle_delay_ms: genie_config::DEFAULT_SETTLE_DELAY_MS,
            generation_timeout_secs: genie_config::DEFAULT_GENERATION_TIMEOUT_SECS,
            history_timeout_secs: genie_config::DEFAULT_HISTORY_TIMEOUT_SECS,
            open_previews: default_open_previews(),
        }
    }
}

impl ConsoleSettings {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn request_timeouts(&self) -> RequestTimeouts {
        RequestTimeouts {
            generation: genie_config::clamp_generation_timeout(self.generation_timeout_secs),
            history: Duration::from_secs(self.history_timeout_secs.max(1)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    Generate,
    Dashboard,
    Pricing,
    Account,
}

impl Screen {
    /// Navigation order.
    pub const ALL: [Screen; 4] = [
        Screen::Generate,
        Screen::Pricing,
        Screen::Dashboard,
        Screen::Account,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Screen::Generate => "HOME",
            Screen::Pricing => "OFFER",
            Screen::Dashboard => "VAULT",
            Screen::Account => "LOGIN",
        }
    }

    /// Initial screen from a launch URL or bare query string.
    ///
    /// Only `view=pricing` selects something other than the generate screen.
    pub fn from_launch_url(raw: Option<&str>) -> Screen {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Screen::Generate;
        };

        let parsed = reqwest::Url::parse(raw).or_else(|_| {
            let query = raw.trim_start_matches('?');
            reqwest::Url::parse(&format!("genie://console/?{query}"))
        });

        let wants_pricing = parsed.ok().is_some_and(|url| {
            url.query_pairs()
                .any(|(key, value)| key == VIEW_QUERY_KEY && value == "pricing")
        });

        if wants_pricing {
            Screen::Pricing
        } else {
            Screen::Generate
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryState {
    pub assets: Vec<GeneratedAsset>,
    pub last_refreshed: Option<DateTime<Utc>>,
    /// Sequence number of the most recently requested refresh.
    pub requested_seq: u64,
    /// Sequence number of the refresh currently shown.
    pub applied_seq: u64,
    /// Refreshes requested but not yet finished, successfully or not.
    pub in_flight: u32,
}

impl HistoryState {
    /// True until every outstanding refresh has settled.
    pub fn is_refreshing(&self) -> bool {
        self.in_flight > 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub screen: Screen,
    pub form: GenerationRequest,
    pub run: PipelineRun,
    pub history: HistoryState,
    pub last_completed: Option<AssetId>,
}

impl AppState {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            form: GenerationRequest::default(),
            run: PipelineRun::idle(),
            history: HistoryState::default(),
            last_completed: None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Screen::default())
    }
}
