use std::sync::Arc;
use axum::{
    extract::{Query, RawQuery},
    http::StatusCode,
    Extension, Json,
};
use scout_core::{FilterFingerprint, ParsedQuery, SearchFilters};
use crate::models::{InterpretParams, InterpretRequest, InterpretResponse};

#[derive(Debug, Default)]
pub struct AppState {
    /// Location applied when neither the phrase nor the request names one
    pub default_location: Option<String>,
}

pub type SharedState = Arc<AppState>;

fn respond(phrase: &str, default_location: Option<&str>) -> InterpretResponse {
    let mut parsed = ParsedQuery::parse(phrase);
    if let Some(location) = default_location {
        parsed.filters = parsed.filters.with_default_location(location);
    }
    let fingerprint = FilterFingerprint::of(&parsed.filters).to_hex();
    tracing::debug!(%fingerprint, "interpreted {:?}", phrase);
    InterpretResponse { parsed, fingerprint }
}

pub async fn interpret(
    Extension(state): Extension<SharedState>,
    Json(req): Json<InterpretRequest>,
) -> Json<InterpretResponse> {
    let default_location = req
        .default_location
        .as_deref()
        .or(state.default_location.as_deref());
    Json(respond(&req.query, default_location))
}

pub async fn interpret_query(
    Extension(state): Extension<SharedState>,
    Query(params): Query<InterpretParams>,
) -> Json<InterpretResponse> {
    let phrase = params.q.unwrap_or_default();
    Json(respond(&phrase, state.default_location.as_deref()))
}

pub async fn filters(
    RawQuery(raw): RawQuery,
) -> Result<Json<SearchFilters>, (StatusCode, String)> {
    let filters = SearchFilters::from_query_string(raw.as_deref().unwrap_or_default())
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    Ok(Json(filters))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}
