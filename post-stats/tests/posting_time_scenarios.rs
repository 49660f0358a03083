use besttime_core::{Post, TimeZoneSetting};
use chrono::{TimeZone, Utc, Weekday};
use post_stats::{HourRange, LocalClock, PostingTimes, Recommendation};

fn post_at<Tz: TimeZone>(tz: &Tz, id: &str, ymd: (i32, u32, u32), hour: u32) -> Post {
    let created = tz
        .with_ymd_and_hms(ymd.0, ymd.1, ymd.2, hour, 15, 0)
        .unwrap();
    Post::new(
        id.to_string(),
        "rust".to_string(),
        100,
        110,
        10,
        created.timestamp() as f64 + 0.5,
    )
    .unwrap()
}

fn clock(zone: chrono_tz::Tz) -> LocalClock {
    LocalClock::new(TimeZoneSetting::Named(zone))
}

#[test]
fn test_two_mondays_and_a_tuesday() {
    let zone = chrono_tz::UTC;
    // 2024-01-01 was a Monday.
    let posts = vec![
        post_at(&zone, "a", (2024, 1, 1), 1),
        post_at(&zone, "b", (2024, 1, 1), 2),
        post_at(&zone, "c", (2024, 1, 2), 9),
    ];

    let recommendation = Recommendation::from_posts("rust", &posts, &clock(zone));
    assert_eq!(recommendation.weekday, Weekday::Mon);
    assert_eq!(recommendation.hour_range, Some(HourRange::Night));
    assert_eq!(
        recommendation.to_string(),
        "/r/rust: It's best to submit your story on a Monday from 0-3."
    );
}

#[test]
fn test_single_late_saturday_post() {
    let zone = chrono_tz::UTC;
    let posts = vec![post_at(&zone, "sat", (2024, 1, 6), 23)];

    let recommendation = Recommendation::from_posts("rust", &posts, &clock(zone));
    assert_eq!(
        recommendation.to_string(),
        "/r/rust: It's best to submit your story on a Saturday from 20-23."
    );
}

#[test]
fn test_empty_listing_leaves_hour_clause_blank() {
    let zone = chrono_tz::Europe::Berlin;
    let recommendation = Recommendation::from_posts("quiet", &[], &clock(zone));

    assert_eq!(recommendation.hour_range, None);
    let sentence = recommendation.to_string();
    assert!(sentence.starts_with("/r/quiet: It's best to submit your story on a "));
    assert!(sentence.ends_with(" from ."));

    let named_weekday = [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ]
    .iter()
    .any(|day| sentence.contains(&format!(" a {day} from")));
    assert!(named_weekday, "no weekday in: {sentence}");
}

#[test]
fn test_local_hours_follow_configured_zone() {
    let zone = chrono_tz::America::New_York;
    // Local Tuesday evenings in New York are Wednesday night in UTC.
    let posts = vec![
        post_at(&zone, "a", (2024, 1, 2), 21),
        post_at(&zone, "b", (2024, 1, 9), 22),
        post_at(&zone, "c", (2024, 1, 5), 9),
    ];

    let in_new_york = Recommendation::from_posts("nyc", &posts, &clock(zone));
    assert_eq!(in_new_york.weekday, Weekday::Tue);
    assert_eq!(in_new_york.hour_range, Some(HourRange::LateEvening));

    let in_utc = Recommendation::from_posts("nyc", &posts, &clock(chrono_tz::UTC));
    assert_eq!(in_utc.weekday, Weekday::Wed);
    assert_eq!(in_utc.hour_range, Some(HourRange::Night));
}

#[test]
fn test_histogram_totals_equal_post_count() {
    let zone = chrono_tz::Asia::Kolkata;
    let posts: Vec<_> = (0..100u32)
        .map(|i| post_at(&zone, &format!("p{i}"), (2024, 2, 1 + i % 29), (i * 7) % 24))
        .collect();

    let times = PostingTimes::tally(&posts, &clock(zone));
    assert_eq!(times.weekdays().total(), 100);
    assert_eq!(times.hour_ranges().total(), 100);
}

#[test]
fn test_unique_maximum_is_stable() {
    let zone = chrono_tz::UTC;
    // Thursday 2024-01-04 three times, everything else once.
    let posts = vec![
        post_at(&zone, "a", (2024, 1, 4), 13),
        post_at(&zone, "b", (2024, 1, 4), 14),
        post_at(&zone, "c", (2024, 1, 4), 15),
        post_at(&zone, "d", (2024, 1, 1), 0),
        post_at(&zone, "e", (2024, 1, 7), 18),
    ];

    for _ in 0..10 {
        let recommendation = Recommendation::from_posts("rust", &posts, &clock(zone));
        assert_eq!(recommendation.weekday, Weekday::Thu);
        assert_eq!(recommendation.hour_range, Some(HourRange::Afternoon));
    }
}
