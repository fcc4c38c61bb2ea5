use axum::{debug_handler, Json};
use serde::Serialize;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use crate::AppResult;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    message: &'static str,
    timestamp: String,
}

#[debug_handler]
pub async fn health() -> AppResult<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "running",
        message: "GameZone server online",
        timestamp: OffsetDateTime::now_utc().format(&Rfc3339)?,
    }))
}
