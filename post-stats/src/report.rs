use crate::analysis::PostingTimes;
use crate::buckets::HourRange;
use crate::clock::LocalClock;
use crate::histogram::Bucket;
use besttime_core::Post;
use chrono::Weekday;
use std::fmt;

/// The single-sentence answer for one subreddit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub subreddit: String,
    pub weekday: Weekday,
    /// `None` renders as an empty clause.
    pub hour_range: Option<HourRange>,
}

impl Recommendation {
    /// Tallies `posts` on `clock` and picks the busiest weekday and hour range.
    /// With no posts the weekday is today's and the hour range is left empty.
    pub fn from_posts(subreddit: &str, posts: &[Post], clock: &LocalClock) -> Self {
        let times = PostingTimes::tally(posts, clock);
        Self {
            subreddit: subreddit.to_string(),
            weekday: times.best_weekday(clock.today()),
            hour_range: times.best_hour_range(),
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/r/{}: It's best to submit your story on a {} from {}.",
            self.subreddit,
            self.weekday.label(),
            self.hour_range.as_ref().map_or("", Bucket::label)
        )
    }
}
