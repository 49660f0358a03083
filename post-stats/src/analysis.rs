use crate::buckets::HourRange;
use crate::clock::LocalClock;
use crate::histogram::{Bucket, Histogram};
use besttime_core::Post;
use chrono::Weekday;
use tracing::debug;

/// Weekday and hour-range histograms over one set of posts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostingTimes {
    weekdays: Histogram<Weekday>,
    hour_ranges: Histogram<HourRange>,
}

impl PostingTimes {
    /// Counts every post once in each histogram.
    pub fn tally(posts: &[Post], clock: &LocalClock) -> Self {
        let mut times = Self::default();
        for post in posts {
            let (weekday, hour) = clock.weekday_and_hour(post.created_at);
            times.weekdays.record(weekday);
            times.hour_ranges.record(HourRange::from_hour(hour));
        }

        debug!(
            posts = posts.len(),
            timezone = %clock.timezone(),
            weekdays = %summarize(&times.weekdays),
            hour_ranges = %summarize(&times.hour_ranges),
            "Tallied posting times"
        );
        times
    }

    pub fn weekdays(&self) -> &Histogram<Weekday> {
        &self.weekdays
    }

    pub fn hour_ranges(&self) -> &Histogram<HourRange> {
        &self.hour_ranges
    }

    /// Most common weekday, or `fallback` when there were no posts.
    pub fn best_weekday(&self, fallback: Weekday) -> Weekday {
        self.weekdays.mode().unwrap_or(fallback)
    }

    /// Most common hour range, `None` when there were no posts.
    pub fn best_hour_range(&self) -> Option<HourRange> {
        self.hour_ranges.mode()
    }
}

fn summarize<K: Bucket>(histogram: &Histogram<K>) -> String {
    histogram
        .iter()
        .map(|(bucket, count)| format!("{}={}", bucket.label(), count))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use besttime_core::TimeZoneSetting;
    use chrono::{TimeZone, Utc};

    fn utc_clock() -> LocalClock {
        LocalClock::new(TimeZoneSetting::Named(chrono_tz::UTC))
    }

    fn post(id: &str, y: i32, m: u32, d: u32, h: u32) -> Post {
        let created = Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap();
        Post::new(
            id.to_string(),
            "test".to_string(),
            1,
            1,
            0,
            created.timestamp() as f64,
        )
        .unwrap()
    }

    #[test]
    fn test_totals_match_post_count() {
        let posts: Vec<_> = (0..40)
            .map(|i| post(&format!("p{i}"), 2024, 3, 1 + (i % 28), i % 24))
            .collect();
        let times = PostingTimes::tally(&posts, &utc_clock());
        assert_eq!(times.weekdays().total(), 40);
        assert_eq!(times.hour_ranges().total(), 40);
    }

    #[test]
    fn test_empty_input_uses_fallbacks() {
        let times = PostingTimes::tally(&[], &utc_clock());
        assert_eq!(times.best_weekday(Weekday::Thu), Weekday::Thu);
        assert_eq!(times.best_hour_range(), None);
        assert_eq!(times.weekdays().total(), 0);
    }

    #[test]
    fn test_weekday_tie_goes_to_earliest_in_week() {
        // 2024-01-06 Saturday, 2024-01-02 Tuesday
        let posts = vec![post("a", 2024, 1, 6, 10), post("b", 2024, 1, 2, 10)];
        let times = PostingTimes::tally(&posts, &utc_clock());
        assert_eq!(times.best_weekday(Weekday::Fri), Weekday::Tue);
    }

    #[test]
    fn test_hour_tie_goes_to_earliest_range() {
        let posts = vec![post("a", 2024, 1, 1, 22), post("b", 2024, 1, 1, 5)];
        let times = PostingTimes::tally(&posts, &utc_clock());
        assert_eq!(times.best_hour_range(), Some(HourRange::EarlyMorning));
    }
}
