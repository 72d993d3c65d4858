use std::net::SocketAddr;

use axum::{Extension, Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

use crate::{api, config, error, spotify::SpotifyClient, success};

/// Shared state available to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub spotify: SpotifyClient,
}

/// Builds the router with all endpoints, the shared state and a permissive
/// CORS layer attached.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(api::health))
        .route("/api/search-artist", get(api::search_artist))
        .route("/api/artist-releases/{artist_id}", get(api::artist_releases))
        .route("/api/album-tracks/{album_id}", get(api::album_tracks))
        .route("/api/search-playlists", get(api::search_playlists))
        .route("/api/playlist-tracks/{playlist_id}", get(api::playlist_tracks))
        .layer(Extension(state))
        .layer(cors)
}

/// Binds to the configured port on all interfaces and serves requests until
/// the process is stopped.
pub async fn start_server(state: AppState) {
    let addr = SocketAddr::from(([0, 0, 0, 0], config::port()));

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    success!("Listening on http://{}", addr);

    axum::serve(listener, app(state)).await.unwrap();
}
