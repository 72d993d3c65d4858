//! Configuration management for the catalog proxy.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and an optional `.env` file in the working
//! directory. Every value has a baked-in default so the proxy boots in a
//! development setup with no environment at all; the credential defaults are
//! deliberately unusable placeholders and must be overridden before the
//! process can talk to the real Spotify API.

use std::env;

/// Loads environment variables from a `.env` file in the working directory.
///
/// Missing files are fine: every configuration value below falls back to a
/// default, so the proxy can start with nothing but process environment.
///
/// # Example
///
/// ```
/// use tunegate::config;
///
/// config::load_env();
/// ```
pub fn load_env() {
    dotenv::dotenv().ok();
}

/// Returns the listen port for the inbound HTTP server.
///
/// Reads the `PORT` environment variable. Values that are missing or fail to
/// parse fall back to the default.
///
/// # Default
///
/// `3001`
pub fn port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001)
}

/// Returns the Spotify API client ID used for the client-credentials
/// exchange.
///
/// Reads the `SPOTIFY_CLIENT_ID` environment variable.
///
/// # Default
///
/// An insecure placeholder that Spotify will reject. Set the real client ID
/// of your registered application for anything beyond local smoke tests.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_CLIENT_ID").unwrap_or_else(|_| "insecure-dev-client-id".to_string())
}

/// Returns the Spotify API client secret used for the client-credentials
/// exchange.
///
/// Reads the `SPOTIFY_CLIENT_SECRET` environment variable.
///
/// # Security Note
///
/// The client secret must stay on this server. It is never sent to the
/// browser; keeping it here is the whole point of the proxy.
///
/// # Default
///
/// An insecure placeholder that Spotify will reject.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_CLIENT_SECRET").unwrap_or_else(|_| "insecure-dev-client-secret".to_string())
}

/// Returns the base URL of the Spotify Web API.
///
/// Reads the `SPOTIFY_API_URL` environment variable. Overriding it is only
/// useful for pointing the proxy at a test double.
///
/// # Default
///
/// `https://api.spotify.com/v1`
pub fn spotify_api_url() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the URL of the Spotify token endpoint for the client-credentials
/// exchange.
///
/// Reads the `SPOTIFY_TOKEN_URL` environment variable. Overriding it is only
/// useful for pointing the proxy at a test double.
///
/// # Default
///
/// `https://accounts.spotify.com/api/token`
pub fn spotify_token_url() -> String {
    env::var("SPOTIFY_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}
