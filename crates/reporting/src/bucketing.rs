//! Time bucketing — groups raw view events into ordered daily and hourly
//! series for chart rendering.
//!
//! Daily series are sparse (only days that saw at least one event); hourly
//! series are dense (all 24 hours, zero-filled). Downstream peak finding
//! and chart axes rely on that asymmetry, so it is deliberate.

use chrono::{DateTime, FixedOffset, NaiveDate, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;
use viewboard_core::types::ViewEvent;

/// Key of one aggregation bucket: a calendar day or an hour of day.
///
/// Serializes untagged, so a daily bucket carries a `YYYY-MM-DD` string and
/// an hourly bucket a bare integer 0–23.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BucketKey {
    Hour(u32),
    Day(NaiveDate),
}

/// One aggregation cell: how many views landed on this key, and the total
/// amount charged for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub key: BucketKey,
    pub count: u64,
    pub total: f64,
}

/// An ordered series of buckets for one granularity, plus the number of
/// malformed input records that were dropped while building it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketSeries {
    /// Buckets sorted ascending by key.
    pub buckets: Vec<Bucket>,
    /// Input records excluded for an unparseable timestamp or a negative
    /// amount. Surfaced so the caller can show a data-quality warning.
    pub skipped_events: usize,
}

impl BucketSeries {
    /// Sum of `count` across all buckets.
    pub fn total_count(&self) -> u64 {
        self.buckets.iter().map(|b| b.count).sum()
    }

    /// Sum of `total` across all buckets.
    pub fn total_amount(&self) -> f64 {
        self.buckets.iter().map(|b| b.total).sum()
    }
}

/// Parse an event's timestamp into the reference timezone, rejecting
/// malformed records (bad timestamp, negative or NaN amount).
pub(crate) fn event_local_time(
    event: &ViewEvent,
    tz: FixedOffset,
) -> Option<DateTime<FixedOffset>> {
    if event.amount < 0.0 || event.amount.is_nan() {
        return None;
    }
    DateTime::parse_from_rfc3339(&event.occurred_at)
        .ok()
        .map(|t| t.with_timezone(&tz))
}

/// Bucket events by calendar day in the reference timezone.
///
/// Only days with at least one event appear, sorted ascending by date.
pub fn bucket_by_day(events: &[ViewEvent], tz: FixedOffset) -> BucketSeries {
    let mut days: BTreeMap<NaiveDate, (u64, f64)> = BTreeMap::new();
    let mut skipped = 0usize;

    for event in events {
        match event_local_time(event, tz) {
            Some(local) => {
                let cell = days.entry(local.date_naive()).or_insert((0, 0.0));
                cell.0 += 1;
                cell.1 += event.amount;
            }
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!("Skipped {} malformed view events in daily bucketing", skipped);
    }

    BucketSeries {
        buckets: days
            .into_iter()
            .map(|(day, (count, total))| Bucket {
                key: BucketKey::Day(day),
                count,
                total,
            })
            .collect(),
        skipped_events: skipped,
    }
}

/// Bucket events by hour of day in the reference timezone.
///
/// Always emits exactly 24 buckets with keys 0..=23, zero-filled where no
/// events landed.
pub fn bucket_by_hour(events: &[ViewEvent], tz: FixedOffset) -> BucketSeries {
    let mut hours = [(0u64, 0.0f64); 24];
    let mut skipped = 0usize;

    for event in events {
        match event_local_time(event, tz) {
            Some(local) => {
                let cell = &mut hours[local.hour() as usize];
                cell.0 += 1;
                cell.1 += event.amount;
            }
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!("Skipped {} malformed view events in hourly bucketing", skipped);
    }

    BucketSeries {
        buckets: hours
            .iter()
            .enumerate()
            .map(|(hour, &(count, total))| Bucket {
                key: BucketKey::Hour(hour as u32),
                count,
                total,
            })
            .collect(),
        skipped_events: skipped,
    }
}
