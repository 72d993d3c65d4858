use std::collections::HashMap;

use axum::{
    Extension,
    extract::{Path, Query},
    response::Json,
};
use serde_json::Value;

use crate::{error::ProxyError, server::AppState};

pub async fn search_playlists(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<AppState>,
) -> Result<Json<Value>, ProxyError> {
    // Unlike artist search, a missing query is forwarded as an empty term.
    let query = params.get("query").map(String::as_str).unwrap_or("");
    let limit = result_limit(&params, 20);

    let body = state
        .spotify
        .forward(
            "/search",
            &[
                ("q", query),
                ("type", "playlist"),
                ("market", "US"),
                ("limit", &limit),
            ],
        )
        .await?;

    Ok(Json(body))
}

pub async fn playlist_tracks(
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<AppState>,
) -> Result<Json<Value>, ProxyError> {
    let limit = result_limit(&params, 100);

    let body = state
        .spotify
        .forward(&format!("/playlists/{}/tracks", id), &[("limit", &limit)])
        .await?;

    Ok(Json(body))
}

/// Reads the `limit` parameter, falling back to `default` when it is absent
/// or not a non-negative integer. Any value that parses is forwarded as
/// given, zero included.
fn result_limit(params: &HashMap<String, String>, default: u32) -> String {
    params
        .get("limit")
        .and_then(|l| l.parse::<u32>().ok())
        .unwrap_or(default)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn limit_uses_given_value() {
        assert_eq!(result_limit(&params(&[("limit", "5")]), 20), "5");
    }

    #[test]
    fn limit_defaults_when_absent() {
        assert_eq!(result_limit(&params(&[]), 20), "20");
    }

    #[test]
    fn limit_defaults_when_unparsable() {
        assert_eq!(result_limit(&params(&[("limit", "many")]), 100), "100");
        assert_eq!(result_limit(&params(&[("limit", "-3")]), 100), "100");
    }

    #[test]
    fn limit_zero_is_forwarded() {
        assert_eq!(result_limit(&params(&[("limit", "0")]), 100), "0");
    }
}
