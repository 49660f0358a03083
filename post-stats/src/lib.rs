//! Posting-time statistics: when did a subreddit's top posts go up?

pub mod analysis;
pub mod buckets;
pub mod clock;
pub mod histogram;
pub mod report;

pub use analysis::PostingTimes;
pub use buckets::{weekday_name, HourRange};
pub use clock::LocalClock;
pub use histogram::{Bucket, Histogram};
pub use report::Recommendation;
