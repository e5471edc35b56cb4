//! Integration test for the full event → aggregate → rank → paginate flow
//! the dashboard drives.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::FixedOffset;
    use uuid::Uuid;
    use viewboard_core::types::{EntitySummary, RankingMetric, ViewEvent};
    use viewboard_reporting::{
        page_slice, paginate, AggregateView, AggregationMode, BucketKey, DashboardAggregator,
    };

    /// A week of views: mornings are busy, Jan 1 is the busiest day.
    fn sample_events() -> Arc<[ViewEvent]> {
        let stamps = [
            ("2024-01-01T09:00:00Z", 1.0),
            ("2024-01-01T09:30:00Z", 2.0),
            ("2024-01-01T14:00:00Z", 0.5),
            ("2024-01-02T10:00:00Z", 1.0),
            ("2024-01-03T09:05:00Z", 3.0),
            ("definitely-not-a-timestamp", 1.0),
        ];
        stamps
            .iter()
            .map(|&(t, amount)| ViewEvent::new(t, Uuid::new_v4(), amount))
            .collect()
    }

    fn sample_entities(n: usize) -> Vec<EntitySummary> {
        (0..n)
            .map(|i| EntitySummary {
                id: Uuid::new_v4(),
                label: format!("ad-{i}"),
                views: (n - i) as u64 * 10,
                revenue: i as f64,
            })
            .collect()
    }

    #[test]
    fn test_daily_aggregation_flow() {
        let mut agg = DashboardAggregator::new(FixedOffset::east_opt(0).unwrap());
        let events = sample_events();

        let view = agg.aggregate(&events, AggregationMode::Daily);
        let AggregateView::Daily { series, peak } = view.as_ref() else {
            panic!("expected daily view");
        };

        // Three distinct days, one malformed record dropped.
        assert_eq!(series.buckets.len(), 3);
        assert_eq!(series.skipped_events, 1);
        assert_eq!(series.total_count() + series.skipped_events as u64, 6);

        let peak = peak.as_ref().unwrap();
        assert_eq!(format!("{:?}", peak.key), "Day(2024-01-01)");
        assert_eq!(peak.count, 3);

        // Same collection again: served from the memo.
        let again = agg.aggregate(&events, AggregationMode::Daily);
        assert!(Arc::ptr_eq(&view, &again));
    }

    #[test]
    fn test_hourly_and_weekday_views_agree_on_the_morning_peak() {
        let mut agg = DashboardAggregator::new(FixedOffset::east_opt(0).unwrap());
        let events = sample_events();

        let hourly = agg.aggregate(&events, AggregationMode::Hourly);
        let AggregateView::Hourly { series, peak } = hourly.as_ref() else {
            panic!("expected hourly view");
        };
        assert_eq!(series.buckets.len(), 24);
        assert_eq!(peak.as_ref().unwrap().key, BucketKey::Hour(9));

        let weekday = agg.aggregate(&events, AggregationMode::DayOfWeekPeaks);
        let AggregateView::DayOfWeekPeaks { peaks } = weekday.as_ref() else {
            panic!("expected day-of-week view");
        };
        assert_eq!(peaks.cells.len(), 7);
        // Jan 1 2024 was a Monday; its peak is the 9 o'clock hour.
        let monday = &peaks.cells[1];
        assert_eq!(monday.day_of_week, 2);
        assert_eq!(monday.peak_hour, Some(9));
        assert_eq!(monday.peak_views, 2);
    }

    #[test]
    fn test_leaderboard_page_render() {
        let agg = DashboardAggregator::new(FixedOffset::east_opt(0).unwrap());
        let entities = sample_entities(23);

        let ranked = agg.leaderboard(&entities, RankingMetric::Views, entities.len());
        assert_eq!(ranked.len(), 23);
        assert_eq!(ranked[0].label, "ad-0");
        assert!(ranked.windows(2).all(|w| w[0].metric_value >= w[1].metric_value));

        let window = paginate(ranked.len(), 5, 99).unwrap();
        assert_eq!(window.effective_page, 5);
        assert_eq!(window.visible_pages, vec![1, 2, 3, 4, 5]);

        let rows = page_slice(&ranked, &window);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].label, "ad-22");
    }
}
