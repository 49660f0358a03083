pub mod api;


pub use api::{
    into_posts, parse_listing, top_posts_url, RedditApiClient, RedditListing,
    RedditListingChild, RedditListingData, RedditPostData, TOP_LIMIT, TOP_PERIOD,
};
