use crate::error::{CoreError, RedditApiError};
use chrono::{DateTime, Utc};

/// A single top post, reduced to the fields the posting-time analysis reads.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: String,
    pub subreddit: String,
    pub score: i64,
    pub upvotes: i64,
    pub downvotes: i64,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Builds a post from the raw API values.
    ///
    /// `created_utc` is in seconds and may carry a fractional part, which is
    /// truncated toward zero.
    pub fn new(
        id: String,
        subreddit: String,
        score: i64,
        upvotes: i64,
        downvotes: i64,
        created_utc: f64,
    ) -> Result<Self, CoreError> {
        let created_at = timestamp_from_unix_seconds(created_utc).ok_or_else(|| {
            RedditApiError::InvalidResponse {
                details: format!("post {id} has an unrepresentable created_utc: {created_utc}"),
            }
        })?;

        Ok(Self {
            id,
            subreddit,
            score,
            upvotes,
            downvotes,
            created_at,
        })
    }
}

fn timestamp_from_unix_seconds(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let whole = seconds.trunc();
    if whole < i64::MIN as f64 || whole > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp(whole as i64, 0)
}
