use serde::{Deserialize, Serialize};

pub const PAIN_POINTS: &str = "Neural link established";
pub const BRAND_VOICE: &str = "Professional";
pub const OFFER_TYPE: &str = "SaaS";
pub const CONVERSION_GOAL: &str = "Direct Checkout";

/// Operator input for one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationRequest {
    pub brief: String,
    pub avoid_topics: String,
}

impl GenerationRequest {
    pub fn new(brief: impl Into<String>, avoid_topics: impl Into<String>) -> Self {
        Self {
            brief: brief.into(),
            avoid_topics: avoid_topics.into(),
        }
    }

    /// Any non-empty brief is sent as typed, whitespace included.
    pub fn is_submittable(&self) -> bool {
        !self.brief.is_empty()
    }

    pub fn composed_brief(&self) -> String {
        format!(
            "{}. Existing Content to Avoid: {}",
            self.brief, self.avoid_topics
        )
    }

    pub fn idea_params(&self) -> IdeaParams {
        IdeaParams {
            icp_profile: self.composed_brief(),
            pain_points: PAIN_POINTS.to_string(),
            brand_voice: BRAND_VOICE.to_string(),
            offer_type: OFFER_TYPE.to_string(),
            conversion_goal: CONVERSION_GOAL.to_string(),
        }
    }
}

/// Request body of the idea endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdeaParams {
    pub icp_profile: String,
    pub pain_points: String,
    pub brand_voice: String,
    pub offer_type: String,
    pub conversion_goal: String,
}
