use reqwest::Client;
use serde_json::Value;

use crate::{config, error::ProxyError, spotify::TokenCache};

/// HTTP client for the Spotify Web API.
///
/// Every catalog route funnels through [`forward`](SpotifyClient::forward),
/// which attaches a bearer token from the injected [`TokenCache`] and hands
/// back whatever JSON the Web API answered with.
#[derive(Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    tokens: TokenCache,
}

impl SpotifyClient {
    /// Creates a client wired to the Web API base URL and credentials from
    /// the environment.
    pub fn from_env() -> Self {
        Self::new(config::spotify_api_url(), TokenCache::from_env())
    }

    /// Creates a client for the given Web API base URL, drawing tokens from
    /// `tokens`.
    pub fn new(api_url: impl Into<String>, tokens: TokenCache) -> Self {
        SpotifyClient {
            http: Client::new(),
            api_url: api_url.into(),
            tokens,
        }
    }

    /// Sends a GET to `path` under the Web API base URL and returns the
    /// decoded JSON body.
    ///
    /// The body is returned whatever status the Web API answered with; error
    /// payloads pass through to the caller unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::AuthExchange`] when no token can be obtained,
    /// and [`ProxyError::Upstream`] when the request fails in transit or the
    /// body is not JSON.
    pub async fn forward(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, ProxyError> {
        let token = self.tokens.acquire().await?;

        let response = self
            .http
            .get(format!("{}{}", self.api_url, path))
            .query(query)
            .bearer_auth(&token.access_token)
            .send()
            .await?;

        let json = response.json::<Value>().await?;

        Ok(json)
    }
}
