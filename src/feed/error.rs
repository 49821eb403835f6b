use thiserror::Error;

/// Failures while obtaining one scoreboard snapshot
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("scoreboard payload is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("game record {index} is malformed: {source}")]
    Field {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl FeedError {
    /// Only transport-level failures are worth another attempt
    pub fn is_retryable(&self) -> bool {
        matches!(self, FeedError::Fetch { .. })
    }
}
