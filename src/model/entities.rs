use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Background style applied to every repository card.
pub const CARD_BACKGROUND_STYLE: &str = "bg-black/40";

/// Description shown when a repository has none.
pub const DEFAULT_DESCRIPTION: &str = "No description provided.";

/// Local path prefix of the repository detail pages.
pub const DETAIL_LINK_PREFIX: &str = "/Projects/Displays/";

/// A repository record as returned by the GitHub repository listing.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RemoteRepository {
    /// The name of the repository.
    pub name: String,

    /// The optional description of the repository.
    #[serde(default)]
    pub description: Option<String>,

    /// The URL of the repository on GitHub.
    pub html_url: String,
}

impl RemoteRepository {
    /// Creates a new `RemoteRepository` instance.
    pub fn new(name: &str, description: Option<&str>, html_url: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.map(str::to_string),
            html_url: html_url.to_string(),
        }
    }

    /// Get the repository description or the placeholder if absent or empty.
    pub fn description(&self) -> &str {
        self.description
            .as_deref()
            .filter(|description| !description.is_empty())
            .unwrap_or(DEFAULT_DESCRIPTION)
    }
}

/// A render-ready card describing a repository.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RepositoryCard {
    /// The background style of the card.
    pub background_style: String,

    /// The title of the card, i.e. the repository name.
    pub title: String,

    /// The repository description.
    pub description: String,

    /// The link to the repository on GitHub.
    pub source_link: String,

    /// The local link to the repository detail page.
    pub detail_link: String,
}

impl From<&RemoteRepository> for RepositoryCard {
    fn from(repository: &RemoteRepository) -> Self {
        Self {
            background_style: CARD_BACKGROUND_STYLE.to_string(),
            title: repository.name.to_owned(),
            description: repository.description().to_string(),
            source_link: repository.html_url.to_owned(),
            detail_link: format!("{DETAIL_LINK_PREFIX}{}", repository.name),
        }
    }
}

impl Display for RepositoryCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n  {}\n  details: {}\n  github: {}",
            self.title, self.description, self.detail_link, self.source_link
        )
    }
}

/// A fetcher API rate limit, as reported by the response headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetcherRateLimit {
    /// The maximum number of requests that can be made in a given time period.
    pub limit: Option<u32>,
    /// The remaining number of requests that can be made in the current time period.
    pub remaining: Option<u32>,
    /// The time at which the rate limit will reset.
    pub reset_at: Option<DateTime<Utc>>,
}

impl FetcherRateLimit {
    /// Creates a dummy `FetcherRateLimit` instance for testing purposes.
    #[cfg(test)]
    pub fn dummy() -> Self {
        Self {
            limit: Some(60),
            remaining: Some(0),
            reset_at: DateTime::from_timestamp(1735689600, 0),
        }
    }
}

impl Display for FetcherRateLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let show = |value: Option<u32>| value.map_or("?".to_string(), |v| v.to_string());
        write!(
            f,
            "RateLimit: remaining={}/{}, reset={}",
            show(self.remaining),
            show(self.limit),
            self.reset_at
                .map_or("unknown".to_string(), |reset_at| reset_at.to_rfc3339())
        )
    }
}
