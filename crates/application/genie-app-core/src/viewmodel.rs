use crate::domain::{AppState, Screen};
use chrono::{DateTime, Utc};
use genie_core::{AssetId, GeneratedAsset};

fn format_refreshed(ts: Option<DateTime<Utc>>) -> Option<String> {
    ts.map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
}

/// `2024-05-01T10:00:00.123456` -> `2024-05-01`. Unparseable values pass through.
fn format_created(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return String::new();
    };
    match raw.split_once('T') {
        Some((date, _)) => date.to_string(),
        None => raw.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct NavItemVm {
    pub screen: Screen,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct HeaderVm {
    pub items: Vec<NavItemVm>,
}

pub fn header_vm(state: &AppState) -> HeaderVm {
    HeaderVm {
        items: Screen::ALL
            .iter()
            .map(|&screen| NavItemVm {
                screen,
                label: screen.label(),
                active: state.screen == screen,
            })
            .collect(),
    }
}

#[derive(Debug, Clone)]
pub struct GenerateVm {
    pub brief: String,
    pub avoid_topics: String,
    pub generating: bool,
    /// The last run stopped on an error.
    pub failed: bool,
    /// 0.0..1.0 and its label, present while a run is visible.
    pub progress: Option<(f32, String)>,
    pub log_line: Option<String>,
    pub can_submit: bool,
    pub submit_label: &'static str,
}

pub fn generate_vm(state: &AppState) -> GenerateVm {
    let run = &state.run;
    let generating = run.is_generating();

    // A finished or failed run keeps its last progress on screen.
    let progress = (run.progress_percent > 0).then(|| {
        (
            f32::from(run.progress_percent) / 100.0,
            format!("{}%", run.progress_percent),
        )
    });

    GenerateVm {
        brief: state.form.brief.clone(),
        avoid_topics: state.form.avoid_topics.clone(),
        generating,
        failed: run.failure.is_some(),
        progress,
        log_line: (!run.log_message.is_empty()).then(|| format!("> {}", run.log_message)),
        can_submit: !generating && state.form.is_submittable(),
        submit_label: if generating {
            "PROCESSING..."
        } else {
            "DEPLOY AGENTS"
        },
    }
}

#[derive(Debug, Clone)]
pub struct AssetCardVm {
    pub id: AssetId,
    pub category: String,
    pub title: String,
    pub value_promise: String,
    /// 0.0..1.0 for the confidence bar.
    pub confidence: f32,
    pub confidence_label: String,
    pub promo_post: Option<String>,
    pub promo_image: Option<String>,
    pub created: String,
}

impl From<&GeneratedAsset> for AssetCardVm {
    fn from(a: &GeneratedAsset) -> Self {
        Self {
            id: a.id.clone(),
            category: a.category().to_uppercase(),
            title: a.title().to_string(),
            value_promise: a.value_promise().to_string(),
            confidence: f32::from(a.confidence()) / 100.0,
            confidence_label: format!("Confidence: {}%", a.confidence()),
            promo_post: a
                .linkedin_post
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
            promo_image: a
                .linkedin_img
                .as_deref()
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .map(str::to_string),
            created: format_created(a.created_at.as_deref()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardVm {
    pub count_label: String,
    pub cards: Vec<AssetCardVm>,
    pub last_refreshed: Option<String>,
    pub refreshing: bool,
    pub empty: bool,
}

pub fn dashboard_vm(state: &AppState) -> DashboardVm {
    let history = &state.history;
    DashboardVm {
        count_label: format!("{} assets", history.assets.len()),
        cards: history.assets.iter().map(AssetCardVm::from).collect(),
        last_refreshed: format_refreshed(history.last_refreshed),
        refreshing: history.is_refreshing(),
        empty: history.assets.is_empty(),
    }
}
