use std::collections::HashMap;

use axum::{
    Extension,
    extract::{Path, Query},
    response::Json,
};
use serde_json::Value;

use crate::{error::ProxyError, server::AppState};

pub async fn search_artist(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<AppState>,
) -> Result<Json<Value>, ProxyError> {
    // An empty query counts as missing.
    let query = params
        .get("query")
        .filter(|q| !q.is_empty())
        .ok_or(ProxyError::MissingQuery)?;

    let body = state
        .spotify
        .forward(
            "/search",
            &[("q", query.as_str()), ("type", "artist"), ("limit", "1")],
        )
        .await?;

    Ok(Json(body))
}

pub async fn artist_releases(
    Path(id): Path<String>,
    Extension(state): Extension<AppState>,
) -> Result<Json<Value>, ProxyError> {
    let body = state
        .spotify
        .forward(
            &format!("/artists/{}/albums", id),
            &[
                ("include_groups", "album,single"),
                ("market", "US"),
                ("limit", "50"),
            ],
        )
        .await?;

    Ok(Json(body))
}
