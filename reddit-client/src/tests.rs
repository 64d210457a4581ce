#[cfg(test)]
mod tests {
    use crate::{PostFetcher, TimeWindow, TopPostsSource};
    use slakkit_core::{ConfigError, CoreError, Post, RedditApiError};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    type Call = (String, u32, TimeWindow);

    /// Replays canned responses in order and records every query.
    struct ScriptedSource {
        responses: Mutex<VecDeque<Result<Vec<Post>, CoreError>>>,
        calls: Mutex<Vec<Call>>,
    }

    impl ScriptedSource {
        fn new(responses: Vec<Result<Vec<Post>, CoreError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl TopPostsSource for ScriptedSource {
        async fn top_posts(
            &self,
            subreddit: &str,
            limit: u32,
            window: TimeWindow,
        ) -> Result<Vec<Post>, CoreError> {
            self.calls
                .lock()
                .unwrap()
                .push((subreddit.to_string(), limit, window));
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected extra query")
        }
    }

    fn posts(count: usize, tag: &str) -> Vec<Post> {
        (0..count)
            .map(|i| Post {
                title: format!("{tag} {i}"),
                url: format!("https://i.redd.it/{tag}{i}.jpg"),
                post_hint: Some("image".to_string()),
                is_video: false,
                is_gif: None,
                is_gallery: None,
                subreddit: "bears".to_string(),
                permalink: format!("/r/bears/comments/{tag}{i}/"),
            })
            .collect()
    }

    #[test]
    fn test_single_query_when_month_is_full() {
        let fetcher = PostFetcher::new(ScriptedSource::new(vec![Ok(posts(50, "month"))]));

        let result = tokio_test::block_on(fetcher.fetch("bears", 50)).unwrap();

        assert_eq!(result.len(), 50);
        assert_eq!(
            fetcher.source().calls(),
            vec![("bears".to_string(), 50, TimeWindow::Month)]
        );
    }

    #[tokio::test]
    async fn test_requests_more_data_when_reddit_returns_too_few_posts() {
        let fetcher = PostFetcher::new(ScriptedSource::new(vec![
            Ok(posts(2, "month")),
            Ok(posts(30, "year")),
        ]));

        let result = fetcher.fetch("bears", 50).await.unwrap();

        assert_eq!(
            fetcher.source().calls(),
            vec![
                ("bears".to_string(), 50, TimeWindow::Month),
                ("bears".to_string(), 50, TimeWindow::Year),
            ]
        );
        // The yearly result replaces the monthly one.
        assert_eq!(result, posts(30, "year"));
    }

    #[tokio::test]
    async fn test_short_year_result_is_returned_without_further_queries() {
        let fetcher = PostFetcher::new(ScriptedSource::new(vec![
            Ok(posts(1, "month")),
            Ok(posts(3, "year")),
        ]));

        let result = fetcher.fetch("bears", 50).await.unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(fetcher.source().calls().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_month_falls_back_to_year() {
        let fetcher =
            PostFetcher::new(ScriptedSource::new(vec![Ok(Vec::new()), Ok(Vec::new())]));

        let result = fetcher.fetch("bears", 3).await.unwrap();

        assert!(result.is_empty());
        assert_eq!(fetcher.source().calls()[1].2, TimeWindow::Year);
    }

    #[tokio::test]
    async fn test_overridden_page_size_is_used_for_both_queries() {
        let fetcher = PostFetcher::new(ScriptedSource::new(vec![
            Ok(posts(2, "month")),
            Ok(posts(3, "year")),
        ]));

        fetcher.fetch("bears", 3).await.unwrap();

        let limits: Vec<u32> = fetcher.source().calls().iter().map(|c| c.1).collect();
        assert_eq!(limits, vec![3, 3]);
    }

    #[tokio::test]
    async fn test_first_query_error_propagates_without_fallback() {
        let fetcher = PostFetcher::new(ScriptedSource::new(vec![Err(
            RedditApiError::ServerError { status_code: 502 }.into(),
        )]));

        let result = fetcher.fetch("bears", 50).await;

        assert!(matches!(
            result,
            Err(CoreError::RedditApi(RedditApiError::ServerError { status_code: 502 }))
        ));
        assert_eq!(fetcher.source().calls().len(), 1);
    }

    #[tokio::test]
    async fn test_fallback_query_error_propagates() {
        let fetcher = PostFetcher::new(ScriptedSource::new(vec![
            Ok(posts(1, "month")),
            Err(RedditApiError::RateLimitExceeded { retry_after: 60 }.into()),
        ]));

        let result = fetcher.fetch("bears", 50).await;

        assert!(matches!(
            result,
            Err(CoreError::RedditApi(RedditApiError::RateLimitExceeded { .. }))
        ));
    }

    #[tokio::test]
    async fn test_rejects_blank_subreddit_and_zero_page_size() {
        let fetcher = PostFetcher::new(ScriptedSource::new(Vec::new()));

        let blank = fetcher.fetch("  ", 50).await;
        assert!(matches!(
            blank,
            Err(CoreError::Config(ConfigError::InvalidValue { .. }))
        ));

        let zero = fetcher.fetch("bears", 0).await;
        assert!(matches!(
            zero,
            Err(CoreError::Config(ConfigError::InvalidValue { .. }))
        ));
        assert!(fetcher.source().calls().is_empty());
    }
}
