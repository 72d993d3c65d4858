//! # Spotify Integration Module
//!
//! This module implements the outbound half of the proxy: obtaining
//! application tokens from the Spotify account service and forwarding catalog
//! requests to the Spotify Web API on behalf of the HTTP routes.
//!
//! ## Overview
//!
//! The proxy authenticates with the client-credentials grant, which trades
//! the application's client ID and secret for a short-lived bearer token. No
//! user is involved and no refresh token exists; when a token expires, a new
//! exchange is performed with the same credentials.
//!
//! ## Architecture
//!
//! ```text
//! HTTP Routes (api)
//!        ↓
//! SpotifyClient::forward
//!     ├── TokenCache::acquire ──→ accounts.spotify.com (when stale)
//!     └── GET api.spotify.com/v1/... with bearer token
//!        ↓
//! JSON body, passed through unchanged
//! ```
//!
//! ## Core Modules
//!
//! ### Authentication
//!
//! [`TokenCache`] holds the single client-credentials token for the process:
//! - **Lazy**: the first [`acquire`](TokenCache::acquire) performs the
//!   exchange; later calls reuse the cached token
//! - **Expiry aware**: a safety margin is subtracted from the reported
//!   lifetime, so tokens are refreshed shortly before Spotify would reject
//!   them
//! - **Injectable**: the account service URL and credentials are constructor
//!   arguments, with [`from_env`](TokenCache::from_env) wiring in the
//!   environment-backed defaults
//!
//! ### Forwarding
//!
//! [`SpotifyClient`] owns the HTTP client and the Web API base URL. Its
//! [`forward`](SpotifyClient::forward) method is the single path every
//! catalog route takes: acquire a token, send the GET, decode the JSON body,
//! return it regardless of the upstream status code.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use tunegate::spotify::{SpotifyClient, TokenCache};
//!
//! let client = SpotifyClient::new(
//!     "https://api.spotify.com/v1",
//!     TokenCache::from_env(),
//! );
//!
//! let body = client
//!     .forward("/search", &[("q", "tycho"), ("type", "artist"), ("limit", "1")])
//!     .await?;
//! ```
//!
//! ## Related Modules
//!
//! - [`crate::api`] - HTTP route handlers that call into this module
//! - [`crate::error`] - error type shared by the exchange and the forwarder

mod auth;
mod client;

pub use auth::{Token, TokenCache};
pub use client::SpotifyClient;
