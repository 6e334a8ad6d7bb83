use chrono::DateTime;
use log::debug;
use reqwest::{
    Client, ClientBuilder, StatusCode,
    header::{HeaderMap, HeaderValue},
};

use crate::{
    FetchOutcome, FetcherError, FetcherRateLimit, RemoteRepository, RepositoryFetcher, StdResult,
};

/// The REST production endpoint for GitHub.
pub const GITHUB_API_ENDPOINT: &str = "https://api.github.com";

/// The account whose repositories are listed by default.
pub const DEFAULT_GITHUB_ACCOUNT: &str = "connorknoetze";

/// The environment variable holding the GitHub access token by default.
pub const GITHUB_TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Fetches the repository listing of an account from the GitHub REST API.
pub struct RestFetcher {
    client: Client,
    endpoint: String,
    account: String,
    token_variable: String,
}

impl RestFetcher {
    /// Creates a new `RestFetcher` listing the repositories of `account` on `endpoint`.
    pub fn try_new(endpoint: &str, account: &str) -> StdResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Accept",
            HeaderValue::from_static("application/vnd.github+json"),
        );
        let client = ClientBuilder::new()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(FetcherError::Http)?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            account: account.to_string(),
            token_variable: GITHUB_TOKEN_ENV_VAR.to_string(),
        })
    }

    /// Reads the access token from `token_variable` instead of the default variable.
    pub fn with_token_variable(mut self, token_variable: &str) -> Self {
        self.token_variable = token_variable.to_string();
        self
    }

    fn repositories_url(&self) -> String {
        format!("{}/users/{}/repos", self.endpoint, self.account)
    }

    fn access_token(&self) -> Option<String> {
        std::env::var(&self.token_variable)
            .ok()
            .filter(|token| !token.is_empty())
    }
}

fn header_number(headers: &HeaderMap, name: &str) -> Option<u32> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}

impl From<&HeaderMap> for FetcherRateLimit {
    fn from(headers: &HeaderMap) -> Self {
        Self {
            limit: header_number(headers, "x-ratelimit-limit"),
            remaining: header_number(headers, "x-ratelimit-remaining"),
            reset_at: header_number(headers, "x-ratelimit-reset")
                .and_then(|reset| DateTime::from_timestamp(reset.into(), 0)),
        }
    }
}

#[async_trait::async_trait]
impl RepositoryFetcher for RestFetcher {
    async fn fetch(&self) -> StdResult<FetchOutcome> {
        let url = self.repositories_url();
        let mut request = self.client.get(&url);
        match self.access_token() {
            Some(token) => request = request.bearer_auth(token),
            None => debug!(
                "No access token in {}, sending an unauthenticated request",
                self.token_variable
            ),
        }
        debug!("Fetching repositories from {url}");

        let response = request.send().await.map_err(FetcherError::Http)?;
        let status = response.status();
        if status == StatusCode::FORBIDDEN {
            return Ok(FetchOutcome::RateLimited(response.headers().into()));
        }
        if !status.is_success() {
            return Err(FetcherError::Remote(status.as_u16()).into());
        }

        let repositories = response
            .json::<Vec<RemoteRepository>>()
            .await
            .map_err(FetcherError::Http)?;

        Ok(FetchOutcome::Fetched(repositories))
    }
}
