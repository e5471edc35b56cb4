//! Peak finding — the busiest bucket of a series, and the busiest hour per
//! day of week over a 7×24 cross-tabulation.

use chrono::{Datelike, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};
use viewboard_core::types::ViewEvent;

use crate::bucketing::{event_local_time, Bucket, BucketSeries};

/// Day-of-week numbering: 1 = Sunday … 7 = Saturday.
///
/// This matches the upstream data contract; keep it in one place rather
/// than as scattered offsets.
pub const DAY_OF_WEEK_MIN: u32 = 1;
pub const DAY_OF_WEEK_MAX: u32 = 7;

const HOURS_PER_DAY: usize = 24;
const DAYS_PER_WEEK: usize = 7;

/// The peak hour for one day of week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayHourCell {
    /// 1 = Sunday … 7 = Saturday (see [`DAY_OF_WEEK_MIN`]).
    pub day_of_week: u32,
    /// Hour 0–23 with the most views on this weekday, or `None` if the
    /// weekday saw no events at all.
    pub peak_hour: Option<u32>,
    pub peak_views: u64,
    pub peak_revenue: f64,
}

/// Result of the 7×24 cross-tabulation: one cell per day of week, plus the
/// count of malformed records dropped on the way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayOfWeekPeaks {
    pub cells: [DayHourCell; 7],
    pub skipped_events: usize,
}

/// The bucket with the highest view count, or `None` for an empty series.
///
/// Ties go to the first bucket in the series' ascending key order, so the
/// result is deterministic under re-runs.
pub fn find_peak(series: &BucketSeries) -> Option<&Bucket> {
    let mut peak: Option<&Bucket> = None;
    for bucket in &series.buckets {
        match peak {
            Some(best) if bucket.count <= best.count => {}
            _ => peak = Some(bucket),
        }
    }
    peak
}

/// Cross-tabulate events by day-of-week × hour and pick each weekday's
/// busiest hour.
///
/// Always returns exactly 7 cells. A weekday with zero events gets
/// `peak_hour: None` and zeroed totals. Hour ties resolve to the earliest
/// hour (scanning 0→23).
pub fn peak_hours_by_day_of_week(events: &[ViewEvent], tz: FixedOffset) -> DayOfWeekPeaks {
    let mut grid = [[(0u64, 0.0f64); HOURS_PER_DAY]; DAYS_PER_WEEK];
    let mut skipped = 0usize;

    for event in events {
        match event_local_time(event, tz) {
            Some(local) => {
                let day = local.weekday().num_days_from_sunday() as usize;
                let hour = local.hour() as usize;
                grid[day][hour].0 += 1;
                grid[day][hour].1 += event.amount;
            }
            None => skipped += 1,
        }
    }

    let cells = std::array::from_fn(|day| {
        let mut peak_hour = 0usize;
        let mut peak = grid[day][0];
        for (hour, &cell) in grid[day].iter().enumerate().skip(1) {
            if cell.0 > peak.0 {
                peak_hour = hour;
                peak = cell;
            }
        }
        DayHourCell {
            day_of_week: day as u32 + DAY_OF_WEEK_MIN,
            peak_hour: (peak.0 > 0).then_some(peak_hour as u32),
            peak_views: peak.0,
            peak_revenue: peak.1,
        }
    });

    DayOfWeekPeaks {
        cells,
        skipped_events: skipped,
    }
}
