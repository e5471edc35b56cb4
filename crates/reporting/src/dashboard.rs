//! Dashboard aggregation facade — one entry point per chart view, with a
//! single-slot memo so re-rendering the same data is free.

use std::sync::Arc;

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use tracing::debug;
use viewboard_core::config::ReportingConfig;
use viewboard_core::error::ReportingResult;
use viewboard_core::types::{EntitySummary, RankingMetric, ViewEvent};

use crate::bucketing::{bucket_by_day, bucket_by_hour, Bucket, BucketSeries};
use crate::peaks::{find_peak, peak_hours_by_day_of_week, DayOfWeekPeaks};
use crate::ranking::{rank_top_n, RankedEntry};

/// Which derived view a chart is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationMode {
    Daily,
    Hourly,
    DayOfWeekPeaks,
}

/// The derived structure handed to the rendering layer.
///
/// Daily and hourly views carry their peak bucket so the chart can
/// highlight it without re-scanning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AggregateView {
    Daily {
        series: BucketSeries,
        peak: Option<Bucket>,
    },
    Hourly {
        series: BucketSeries,
        peak: Option<Bucket>,
    },
    DayOfWeekPeaks {
        peaks: DayOfWeekPeaks,
    },
}

struct MemoSlot {
    /// Clone of the input the cached view was computed from. Holding it
    /// keeps the allocation alive, so pointer equality cannot alias a
    /// recycled address.
    events: Arc<[ViewEvent]>,
    mode: AggregationMode,
    view: Arc<AggregateView>,
}

/// Composes bucketing, peak finding, and ranking behind one call per view.
///
/// Owns a single-slot memo: the most recent `(events, mode)` pair and its
/// result. Input identity is `Arc` pointer equality — any new collection
/// invalidates the slot for all modes. One aggregator per view lifecycle;
/// it is not meant to be shared across threads.
pub struct DashboardAggregator {
    timezone: FixedOffset,
    memo: Option<MemoSlot>,
}

impl DashboardAggregator {
    /// An aggregator deriving calendar days and hours in `timezone`.
    pub fn new(timezone: FixedOffset) -> Self {
        Self {
            timezone,
            memo: None,
        }
    }

    pub fn from_config(config: &ReportingConfig) -> ReportingResult<Self> {
        Ok(Self::new(config.reference_timezone()?))
    }

    pub fn timezone(&self) -> FixedOffset {
        self.timezone
    }

    /// Derive the view for `mode`, reusing the memoized result when the
    /// same input collection and mode are asked for again.
    pub fn aggregate(
        &mut self,
        events: &Arc<[ViewEvent]>,
        mode: AggregationMode,
    ) -> Arc<AggregateView> {
        if let Some(slot) = &self.memo {
            if slot.mode == mode && Arc::ptr_eq(&slot.events, events) {
                debug!("Aggregation memo hit for {:?}", mode);
                return Arc::clone(&slot.view);
            }
        }

        debug!("Recomputing {:?} aggregation over {} events", mode, events.len());
        let view = Arc::new(self.compute(events, mode));
        self.memo = Some(MemoSlot {
            events: Arc::clone(events),
            mode,
            view: Arc::clone(&view),
        });
        view
    }

    fn compute(&self, events: &[ViewEvent], mode: AggregationMode) -> AggregateView {
        match mode {
            AggregationMode::Daily => {
                let series = bucket_by_day(events, self.timezone);
                let peak = find_peak(&series).cloned();
                AggregateView::Daily { series, peak }
            }
            AggregationMode::Hourly => {
                let series = bucket_by_hour(events, self.timezone);
                let peak = find_peak(&series).cloned();
                AggregateView::Hourly { series, peak }
            }
            AggregationMode::DayOfWeekPeaks => AggregateView::DayOfWeekPeaks {
                peaks: peak_hours_by_day_of_week(events, self.timezone),
            },
        }
    }

    /// Top-N leaderboard over externally supplied entity rollups. Not
    /// memoized — entities are not part of the memo key.
    pub fn leaderboard(
        &self,
        entities: &[EntitySummary],
        metric: RankingMetric,
        n: usize,
    ) -> Vec<RankedEntry> {
        rank_top_n(entities, metric, n)
    }
}
