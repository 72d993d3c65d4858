//! # API Module
//!
//! This module provides the HTTP endpoints of the proxy. Every catalog
//! endpoint is a thin translation layer: it validates and defaults its own
//! parameters, maps them onto a Spotify Web API path and query, and relays
//! the JSON answer without reshaping it.
//!
//! ## Overview
//!
//! The proxy exists so that browser clients never hold Spotify credentials.
//! Handlers here never talk to Spotify directly; they go through
//! [`crate::spotify::SpotifyClient`], which owns token acquisition and the
//! outbound HTTP call.
//!
//! ## Endpoints
//!
//! ### Catalog
//!
//! - [`search_artist`] - Finds the single best artist match for a search
//!   term. The only endpoint that rejects requests, answering 400 when the
//!   `query` parameter is missing or empty.
//! - [`artist_releases`] - Lists an artist's albums and singles for the US
//!   market.
//! - [`album_tracks`] - Lists the tracks of an album.
//! - [`search_playlists`] - Searches playlists for the US market with a
//!   caller-tunable result limit.
//! - [`playlist_tracks`] - Lists the tracks of a playlist with a
//!   caller-tunable limit.
//!
//! ### Monitoring
//!
//! - [`health`] - Liveness check returning status and a timestamp.
//!
//! ## Error Handling
//!
//! Handlers return `Result<Json<Value>, ProxyError>`; the error type carries
//! its own HTTP mapping. Upstream error payloads are not errors here: the
//! Web API's body is relayed with status 200 whatever status Spotify chose,
//! and only transport or decoding failures surface as 500.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use tunegate::api::{health, search_artist};
//!
//! let app = Router::new()
//!     .route("/health", get(health))
//!     .route("/api/search-artist", get(search_artist));
//! ```
//!
//! ## Related Modules
//!
//! - [`crate::spotify`] - token cache and request forwarding
//! - [`crate::server`] - router wiring and shared state
//! - [`crate::error`] - the error-to-response mapping

mod albums;
mod artists;
mod health;
mod playlists;

pub use albums::album_tracks;
pub use artists::{artist_releases, search_artist};
pub use health::health;
pub use playlists::{playlist_tracks, search_playlists};
