use tunegate::{
    config, info,
    server::{self, AppState},
    spotify::SpotifyClient,
};

#[tokio::main]
async fn main() {
    config::load_env();

    info!(
        "Starting {} v{} on port {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config::port()
    );

    let state = AppState {
        spotify: SpotifyClient::from_env(),
    };

    server::start_server(state).await;
}
