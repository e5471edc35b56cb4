//! Top-N ranking — descending, stable on ties, for leaderboard tables.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;
use viewboard_core::types::{EntitySummary, RankingMetric};

/// One leaderboard row. `metric_value` is the field the ranking was
/// performed on; `views` and `revenue` ride along for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub id: Uuid,
    pub label: String,
    pub metric_value: f64,
    pub views: u64,
    pub revenue: f64,
}

/// Sort a copy of `items` descending by `score` and keep the first `n`.
///
/// The sort is stable: equal scores retain their input order, so fixtures
/// and re-runs produce identical leaderboards. `n = 0` yields an empty
/// vector. The input is never mutated.
pub fn top_n_by<T, F>(items: &[T], score: F, n: usize) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> f64,
{
    if n == 0 {
        return Vec::new();
    }
    let mut sorted: Vec<T> = items.to_vec();
    sorted.sort_by(|a, b| {
        score(b)
            .partial_cmp(&score(a))
            .unwrap_or(Ordering::Equal)
    });
    sorted.truncate(n);
    sorted
}

/// Rank entities descending by the chosen metric and keep the top `n`.
pub fn rank_top_n(entities: &[EntitySummary], metric: RankingMetric, n: usize) -> Vec<RankedEntry> {
    top_n_by(entities, |e| metric.value_of(e), n)
        .into_iter()
        .map(|e| RankedEntry {
            metric_value: metric.value_of(&e),
            id: e.id,
            label: e.label,
            views: e.views,
            revenue: e.revenue,
        })
        .collect()
}
