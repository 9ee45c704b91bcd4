use serde::{Deserialize, Serialize};

use super::enums::{ActionCategory, ActionId};

// ---------------------------------------------------------------------------
// Confidence
// ---------------------------------------------------------------------------

/// Coarse bucketing of a recommendation's numeric score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Thresholds: >= 75 high, >= 45 medium, else low.
    pub fn from_score(score: u8) -> Self {
        if score >= 75 {
            Self::High
        } else if score >= 45 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

// ---------------------------------------------------------------------------
// RecommendedAction
// ---------------------------------------------------------------------------

/// One ranked next clinical step, built fresh per case.
/// Unique by `id` within a result list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedAction {
    pub id: ActionId,
    pub title: String,
    pub category: ActionCategory,
    /// 0..=100 after clamping.
    pub score: u8,
    pub confidence: Confidence,
    pub reasons: Vec<String>,
    pub what_would_change: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_notes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_questions: Option<Vec<String>>,
}
