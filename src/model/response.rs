use std::fmt::Display;

use serde::Serialize;

use super::{FetcherRateLimit, RemoteRepository, RepositoryCard};

/// The outcome of a repository listing request.
#[derive(Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The listing was retrieved.
    Fetched(Vec<RemoteRepository>),

    /// The API refused the request because the rate limit is exhausted.
    RateLimited(FetcherRateLimit),
}

/// A snapshot of everything the projects page renders.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct PageView {
    /// Whether the side navigation is shown.
    pub nav_visible: bool,

    /// The repository cards, in the order returned by the API.
    pub cards: Vec<RepositoryCard>,
}

impl Display for PageView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Projects ({} repositories, navigation {})",
            self.cards.len(),
            if self.nav_visible { "shown" } else { "faded" }
        )?;
        for card in &self.cards {
            writeln!(f)?;
            writeln!(f, "{card}")?;
        }

        Ok(())
    }
}
