//! Spotify Catalog Proxy Library
//!
//! This library implements a small backend proxy in front of the Spotify Web
//! API. Browsers cannot be trusted with the OAuth client secret, so the proxy
//! performs the client-credentials exchange itself, caches the resulting
//! access token for its declared lifetime, and forwards catalog lookups
//! (artist search, releases, album tracks, playlists) with the bearer token
//! attached. Upstream JSON bodies are relayed verbatim.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the inbound proxy endpoints
//! - `config` - Configuration from environment variables with dev defaults
//! - `error` - The request-level error type and its HTTP mapping
//! - `server` - Router assembly and listener startup
//! - `spotify` - Outbound Spotify client: token cache and request forwarding
//!
//! # Example
//!
//! ```
//! use tunegate::{config, server, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     config::load_env();
//!     let state = server::AppState {
//!         spotify: SpotifyClient::from_env(),
//!     };
//!     server::start_server(state).await;
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod spotify;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a blue "o" indicator followed by the
/// provided message. Used for general status updates such as startup
/// configuration notes.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// info!("Forwarding catalog calls to {}", api_url);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of an operation, such as the listener coming up.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// success!("Server running on port {}", port);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the process with exit code 1. Reserved for unrecoverable
/// startup failures (unusable listen address, bind errors). Request-level
/// failures never go through this macro; they are answered with a JSON error
/// body instead.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Behavior
///
/// This macro causes the program to exit immediately after printing the
/// message. Code after it will not execute.
///
/// # Example
///
/// ```
/// error!("Failed to bind {}: {}", addr, e);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator for issues
/// that do not terminate the process, such as a forwarded request failing or
/// the token exchange being rejected upstream.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// warning!("Token exchange failed: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
