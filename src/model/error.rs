use thiserror::Error;

/// The standard result type used throughout the application.
pub type StdResult<T> = Result<T, anyhow::Error>;

/// Fetcher error
#[derive(Error, Debug)]
pub enum FetcherError {
    /// The API answered with a non-success status other than a rate limit.
    #[error("GitHub API error: {0}")]
    Remote(u16),

    /// Transport failure or malformed response body.
    #[error("request error: {0}")]
    Http(#[from] reqwest::Error),
}
