use crate::{FetchOutcome, StdResult};

/// A trait for fetching the repository listing from the API.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RepositoryFetcher: Sync + Send {
    /// Fetches the repository listing of the configured account.
    async fn fetch(&self) -> StdResult<FetchOutcome>;
}
