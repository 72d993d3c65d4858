use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::warning;

/// Errors a proxy request can produce, converted to JSON error responses at
/// the route boundary.
///
/// Every variant ends the request with `{"error": "<message>"}`; nothing here
/// is fatal to the process and nothing is retried.
#[derive(Debug)]
pub enum ProxyError {
    /// A required inbound query parameter was missing or empty.
    MissingQuery,
    /// The token endpoint answered with an OAuth error payload.
    AuthExchange(String),
    /// Transport failure or non-JSON body on an outbound call.
    Upstream(reqwest::Error),
}

impl std::fmt::Display for ProxyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingQuery => write!(f, "Query parameter is required"),
            Self::AuthExchange(description) => write!(f, "{}", description),
            Self::Upstream(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ProxyError {}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        ProxyError::Upstream(err)
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingQuery => StatusCode::BAD_REQUEST,
            Self::AuthExchange(_) | Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            warning!("Request failed: {}", self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream_error() -> reqwest::Error {
        // An unparseable URL is the only way to get a reqwest::Error without
        // touching the network.
        reqwest::Client::new().get("not a url").build().unwrap_err()
    }

    #[test]
    fn missing_query_maps_to_400() {
        let resp = ProxyError::MissingQuery.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn auth_exchange_maps_to_500() {
        let resp = ProxyError::AuthExchange("invalid_client".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn upstream_maps_to_500() {
        let resp = ProxyError::Upstream(upstream_error()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_query_display_matches_the_documented_body() {
        assert_eq!(
            ProxyError::MissingQuery.to_string(),
            "Query parameter is required"
        );
    }

    #[test]
    fn auth_exchange_display_is_the_upstream_description() {
        let err = ProxyError::AuthExchange("Invalid client secret".to_string());
        assert_eq!(err.to_string(), "Invalid client secret");
    }

    #[test]
    fn upstream_display_is_not_empty() {
        assert!(!ProxyError::Upstream(upstream_error()).to_string().is_empty());
    }
}
