use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single charged ad view, exactly as the API client hands it over.
///
/// `occurred_at` is kept as the raw RFC 3339 string from the wire; the
/// reporting layer parses it per aggregation pass and skips records whose
/// timestamp does not parse or whose amount is negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewEvent {
    /// RFC 3339 timestamp of the view, with offset.
    pub occurred_at: String,
    /// The ad (or other entity) that was viewed.
    pub subject_id: Uuid,
    /// Amount charged for this view. Non-negative for well-formed records.
    pub amount: f64,
}

impl ViewEvent {
    pub fn new(occurred_at: impl Into<String>, subject_id: Uuid, amount: f64) -> Self {
        Self {
            occurred_at: occurred_at.into(),
            subject_id,
            amount,
        }
    }
}

/// A scorable entity (ad, advertiser) with its rollup metrics, as supplied
/// by the API client for leaderboard ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitySummary {
    pub id: Uuid,
    pub label: String,
    pub views: u64,
    pub revenue: f64,
}

/// Which metric a leaderboard is ranked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingMetric {
    Views,
    Revenue,
}

impl RankingMetric {
    /// Extract the selected metric from a summary, as an f64 for ordering.
    pub fn value_of(&self, entity: &EntitySummary) -> f64 {
        match self {
            RankingMetric::Views => entity.views as f64,
            RankingMetric::Revenue => entity.revenue,
        }
    }
}
