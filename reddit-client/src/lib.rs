pub mod api;
pub mod fetcher;
pub mod selector;

mod tests;

pub use api::{RedditApiClient, RedditListing, RedditPostData, TimeWindow, USER_AGENT};
pub use fetcher::{PostFetcher, TopPostsSource, FALLBACK_WINDOW, PRIMARY_WINDOW};
pub use selector::{choose, is_suitable};
