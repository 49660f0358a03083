use besttime_core::{AppConfig, CoreError, Post, RedditApiError};
use bytes::Bytes;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, error, info, warn};

/// Time window of the top listing.
pub const TOP_PERIOD: &str = "month";
/// Posts requested in the single page that is fetched.
pub const TOP_LIMIT: u32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct RedditListing<T> {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: RedditListingData<T>,
}

impl<T> Default for RedditListing<T> {
    fn default() -> Self {
        Self {
            kind: None,
            data: RedditListingData::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct RedditListingData<T> {
    #[serde(default, deserialize_with = "null_items_as_default")]
    pub children: Vec<RedditListingChild<T>>,
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default)]
    pub before: Option<String>,
    #[serde(default)]
    pub modhash: Option<String>,
    #[serde(default)]
    pub dist: Option<u32>,
}

impl<T> Default for RedditListingData<T> {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            after: None,
            before: None,
            modhash: None,
            dist: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct RedditListingChild<T> {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: T,
}

/// The post attributes read from a listing child. Anything else Reddit sends is ignored.
///
/// A missing or `null` attribute reads as zero / empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RedditPostData {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subreddit: String,
    #[serde(deserialize_with = "null_as_default")]
    pub score: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub ups: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub downs: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub created_utc: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_items_as_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let items: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

/// Builds the top-of-the-month listing URL. The subreddit is inserted as given.
pub fn top_posts_url(api_base: &str, subreddit: &str) -> String {
    format!(
        "{}/r/{}/top.json?t={}&limit={}",
        api_base.trim_end_matches('/'),
        subreddit,
        TOP_PERIOD,
        TOP_LIMIT
    )
}

/// Decodes a listing body. A bare `null` body is an empty listing.
pub fn parse_listing(body: &[u8]) -> Result<RedditListing<RedditPostData>, CoreError> {
    serde_json::from_slice::<Option<RedditListing<RedditPostData>>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| {
        error!("Failed to parse top listing: {}", e);
        CoreError::RedditApi(RedditApiError::InvalidResponse {
            details: e.to_string(),
        })
    })
}

/// Projects the post out of every listing child, keeping listing order.
pub fn into_posts(listing: RedditListing<RedditPostData>) -> Result<Vec<Post>, CoreError> {
    listing
        .data
        .children
        .into_iter()
        .map(|child| Post::try_from(child.data))
        .collect()
}

#[derive(Debug)]
pub struct RedditApiClient {
    http_client: Client,
    api_base: String,
}

impl RedditApiClient {
    pub fn new(config: &AppConfig) -> Result<Self, CoreError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }

        let http_client = builder.build().map_err(|e| {
            error!("Failed to create HTTP client: {}", e);
            CoreError::Network(e)
        })?;

        Ok(Self {
            http_client,
            api_base: config.api_base.clone(),
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Performs the one GET for the subreddit's top listing and returns the raw body,
    /// whatever the HTTP status.
    pub async fn fetch_top_listing(&self, subreddit: &str) -> Result<Bytes, CoreError> {
        let (_, body) = self.request_top_listing(subreddit).await?;
        Ok(body)
    }

    /// Fetches and decodes the top listing.
    ///
    /// A non-2xx answer is only an error when its body is not a listing; Reddit's
    /// JSON error bodies decode to an empty one.
    pub async fn get_top_posts(&self, subreddit: &str) -> Result<Vec<Post>, CoreError> {
        let (status, body) = self.request_top_listing(subreddit).await?;
        let listing = match parse_listing(&body) {
            Ok(listing) => listing,
            Err(e) if !status.is_success() => {
                error!(
                    "Undecodable body with status {} for r/{}: {}",
                    status, subreddit, e
                );
                return Err(CoreError::RedditApi(status_error(status, subreddit)));
            }
            Err(e) => return Err(e),
        };
        let posts = into_posts(listing)?;

        info!("Retrieved {} top posts from r/{}", posts.len(), subreddit);
        Ok(posts)
    }

    async fn request_top_listing(
        &self,
        subreddit: &str,
    ) -> Result<(StatusCode, Bytes), CoreError> {
        let url = top_posts_url(&self.api_base, subreddit);

        info!("Requesting top posts of the {} for r/{}", TOP_PERIOD, subreddit);
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error(e, &url))?;

        let status = response.status();
        if status.is_success() {
            debug!("Request successful: {} {}", status, url);
        } else {
            warn!("Request answered with status: {} for {}", status, url);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(e, &url))?;

        debug!("Read {} bytes for r/{}", body.len(), subreddit);
        Ok((status, body))
    }
}

fn transport_error(e: reqwest::Error, url: &str) -> CoreError {
    error!("Network error for GET {}: {}", url, e);
    if e.is_timeout() {
        CoreError::RedditApi(RedditApiError::RequestTimeout)
    } else {
        CoreError::Network(e)
    }
}

fn status_error(status: StatusCode, subreddit: &str) -> RedditApiError {
    match status {
        StatusCode::NOT_FOUND => RedditApiError::SubredditNotFound {
            subreddit: subreddit.to_string(),
        },
        StatusCode::FORBIDDEN => RedditApiError::Forbidden {
            resource: format!("r/{}", subreddit),
        },
        s if s.is_server_error() => RedditApiError::ServerError {
            status_code: s.as_u16(),
        },
        s => RedditApiError::UnexpectedStatus {
            status_code: s.as_u16(),
        },
    }
}

impl TryFrom<RedditPostData> for Post {
    type Error = CoreError;

    fn try_from(post_data: RedditPostData) -> Result<Self, Self::Error> {
        Post::new(
            post_data.id,
            post_data.subreddit,
            post_data.score,
            post_data.ups,
            post_data.downs,
            post_data.created_utc,
        )
    }
}
