use std::sync::Arc;

use log::{error, info};
use tokio::{sync::RwLock, task::JoinHandle};

use crate::{FetchOutcome, RepositoryCard, RepositoryFetcher};

/// Loads the repository listing once and keeps it as renderable cards.
pub struct RemoteListLoader {
    fetcher: Arc<dyn RepositoryFetcher>,
    cards: RwLock<Vec<RepositoryCard>>,
}

impl RemoteListLoader {
    /// Creates a new `RemoteListLoader` instance with an empty card list.
    pub fn new(fetcher: Arc<dyn RepositoryFetcher>) -> Self {
        Self {
            fetcher,
            cards: RwLock::new(vec![]),
        }
    }

    /// Fetches the listing and replaces the cards on success.
    ///
    /// Failures are logged and leave the current cards untouched.
    pub async fn load(&self) {
        match self.fetcher.fetch().await {
            Ok(FetchOutcome::Fetched(repositories)) => {
                let cards = repositories
                    .iter()
                    .map(RepositoryCard::from)
                    .collect::<Vec<_>>();
                info!("Loaded {} repositories", cards.len());
                *self.cards.write().await = cards;
            }
            Ok(FetchOutcome::RateLimited(rate_limit)) => {
                error!(
                    "Rate limit exceeded. Please wait until the limit resets. {rate_limit}"
                );
            }
            Err(e) => {
                error!("Failed to fetch GitHub repos: {e:#}");
            }
        }
    }

    /// Starts [Self::load] in the background.
    pub fn spawn(self: &Arc<Self>) -> JoinHandle<()> {
        let loader = self.clone();

        tokio::spawn(async move { loader.load().await })
    }

    /// Retrieves a copy of the current cards.
    pub async fn cards(&self) -> Vec<RepositoryCard> {
        self.cards.read().await.to_owned()
    }
}
