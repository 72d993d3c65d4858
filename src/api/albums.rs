use axum::{Extension, extract::Path, response::Json};
use serde_json::Value;

use crate::{error::ProxyError, server::AppState};

pub async fn album_tracks(
    Path(id): Path<String>,
    Extension(state): Extension<AppState>,
) -> Result<Json<Value>, ProxyError> {
    let body = state
        .spotify
        .forward(&format!("/albums/{}/tracks", id), &[])
        .await?;

    Ok(Json(body))
}
