use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned identifier of a generated asset.
///
/// The service hands out integer keys, but the console treats them as opaque
/// and only ever echoes them back in paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "AssetIdExternal")]
pub struct AssetId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum AssetIdExternal {
    Number(i64),
    Text(String),
}

impl From<AssetIdExternal> for AssetId {
    fn from(raw: AssetIdExternal) -> Self {
        match raw {
            AssetIdExternal::Number(n) => AssetId(n.to_string()),
            AssetIdExternal::Text(s) => AssetId(s),
        }
    }
}

impl AssetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Response of the idea endpoint. Only `id` drives the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdeaCreated {
    pub id: AssetId,
    #[serde(default)]
    pub strategy: serde_json::Value,
}

/// One entry of the history listing. Columns the service has not filled yet
/// come back as `null`, so every text field is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedAsset {
    pub id: AssetId,
    #[serde(default)]
    pub idea_type: Option<String>,
    #[serde(default)]
    pub idea_title: Option<String>,
    #[serde(default)]
    pub value_promise: Option<String>,
    #[serde(default)]
    pub conversion_score: Option<i64>,
    #[serde(default)]
    pub linkedin_post: Option<String>,
    #[serde(default)]
    pub linkedin_img: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl GeneratedAsset {
    pub fn category(&self) -> &str {
        self.idea_type.as_deref().unwrap_or("Checklist")
    }

    pub fn title(&self) -> &str {
        self.idea_title.as_deref().unwrap_or("Untitled")
    }

    pub fn value_promise(&self) -> &str {
        self.value_promise.as_deref().unwrap_or_default()
    }

    /// Success confidence in percent, falling back to the console default
    /// when the service did not score the asset.
    pub fn confidence(&self) -> u8 {
        match self.conversion_score {
            Some(score) if score > 0 => score.clamp(0, 100) as u8,
            _ => genie_config::DEFAULT_CONFIDENCE_SCORE,
        }
    }
}
