use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::{config, error::ProxyError};

/// Seconds subtracted from the lifetime Spotify reports, so a token handed
/// out near the end of its life does not expire mid-request.
const EXPIRY_MARGIN_SECS: i64 = 60;

/// A client-credentials bearer token together with its local expiry.
///
/// `expires_at` already has the safety margin folded in; `is_valid` is a
/// plain clock comparison.
#[derive(Debug, Clone)]
pub struct Token {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

impl Token {
    /// Whether the token can still be attached to an outbound request.
    pub fn is_valid(&self) -> bool {
        Utc::now() < self.expires_at
    }
}

/// Wire shape of a successful token response. Extra fields such as
/// `token_type` are ignored.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

/// Process-wide cache for the client-credentials token.
///
/// The cache starts empty and fills lazily on the first [`acquire`]. A cached
/// token is reused until its expiry (minus the safety margin) passes, after
/// which the next caller performs a fresh exchange against the account
/// service and overwrites the slot.
///
/// The lock is only held while reading or writing the slot, never across the
/// network exchange. Concurrent callers that both observe a stale slot will
/// therefore each run their own exchange and the last write wins; both end up
/// holding a usable token.
///
/// [`acquire`]: TokenCache::acquire
#[derive(Clone)]
pub struct TokenCache {
    http: Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    slot: Arc<RwLock<Option<Token>>>,
}

impl TokenCache {
    /// Creates a cache wired to the account service and credentials from the
    /// environment.
    pub fn from_env() -> Self {
        Self::new(
            config::spotify_token_url(),
            config::spotify_client_id(),
            config::spotify_client_secret(),
        )
    }

    /// Creates an empty cache for the given token endpoint and credentials.
    pub fn new(
        token_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        TokenCache {
            http: Client::new(),
            token_url: token_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            slot: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns a valid token, exchanging credentials only when the cached one
    /// is missing or expired. Callers cannot tell whether the token came from
    /// the cache or from a fresh exchange.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::AuthExchange`] when the account service rejects
    /// the credentials or answers with an unusable body, and
    /// [`ProxyError::Upstream`] when the exchange request itself fails.
    pub async fn acquire(&self) -> Result<Token, ProxyError> {
        {
            let slot = self.slot.read().await;
            if let Some(token) = slot.as_ref() {
                if token.is_valid() {
                    return Ok(token.clone());
                }
            }
        }

        // No lock is held during the exchange: concurrent callers that both
        // saw a stale slot each run their own exchange, last write wins.
        let token = self.exchange().await?;

        let mut slot = self.slot.write().await;
        *slot = Some(token.clone());

        Ok(token)
    }

    /// Drops the cached token. The next [`acquire`](TokenCache::acquire)
    /// performs a fresh exchange.
    pub async fn invalidate(&self) {
        let mut slot = self.slot.write().await;
        *slot = None;
    }

    /// Performs the client-credentials exchange against the account service.
    async fn exchange(&self) -> Result<Token, ProxyError> {
        let response = self
            .http
            .post(&self.token_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let json: Value = response.json().await?;

        // Error answers carry an `error` code and usually a human-readable
        // `error_description`; surface the description when present.
        if let Some(code) = json.get("error").and_then(Value::as_str) {
            let description = json
                .get("error_description")
                .and_then(Value::as_str)
                .unwrap_or(code);
            return Err(ProxyError::AuthExchange(description.to_string()));
        }

        let parsed: TokenResponse = serde_json::from_value(json)
            .map_err(|e| ProxyError::AuthExchange(format!("malformed token response: {}", e)))?;

        // `expires_in` is wire data; lifetimes the clock cannot represent
        // fail the exchange as malformed.
        let expires_at = parsed
            .expires_in
            .checked_sub(EXPIRY_MARGIN_SECS)
            .and_then(Duration::try_seconds)
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
            .ok_or_else(|| {
                ProxyError::AuthExchange(format!(
                    "malformed token response: expires_in {} out of range",
                    parsed.expires_in
                ))
            })?;

        Ok(Token {
            access_token: parsed.access_token,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_within_lifetime_is_valid() {
        let token = Token {
            access_token: "tok".to_string(),
            expires_at: Utc::now() + Duration::seconds(30),
        };

        assert!(token.is_valid());
    }

    #[test]
    fn token_past_expiry_is_invalid() {
        let token = Token {
            access_token: "tok".to_string(),
            expires_at: Utc::now() - Duration::seconds(1),
        };

        assert!(!token.is_valid());
    }
}
