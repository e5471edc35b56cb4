//! Ad-view analytics and reporting — time bucketing, peak windows, top-N
//! leaderboards, and stateless pagination for dashboard rendering.
//!
//! Everything here is a pure function of its inputs (the one exception is
//! the dashboard facade's single-slot memo). Raw events come from the API
//! client; derived value structures go to the rendering layer.

pub mod bucketing;
pub mod dashboard;
pub mod pagination;
pub mod peaks;
pub mod ranking;

pub use bucketing::{bucket_by_day, bucket_by_hour, Bucket, BucketKey, BucketSeries};
pub use dashboard::{AggregateView, AggregationMode, DashboardAggregator};
pub use pagination::{page_slice, paginate, PageWindow, PAGE_WINDOW_WIDTH};
pub use peaks::{find_peak, peak_hours_by_day_of_week, DayHourCell, DayOfWeekPeaks};
pub use ranking::{rank_top_n, top_n_by, RankedEntry};
