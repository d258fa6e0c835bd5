use super::{PageQuery, paginate};
use crate::server::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use hookwell_core::WebhookEntry;

const DEFAULT_PER_PAGE: i64 = 100;
const MAX_PER_PAGE: i64 = 1000;

/// `GET /api/webhooks?page&per_page`: newest-first JSON listing.
pub async fn list_entries(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Json<Vec<WebhookEntry>> {
    let (offset, per_page) = paginate(&query, DEFAULT_PER_PAGE, MAX_PER_PAGE);
    Json(state.store.list(offset, per_page))
}

/// `GET /api/webhooks/{id}`: single entry, 404 when unknown.
pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WebhookEntry>, StatusCode> {
    match state.store.get(&id) {
        Some(entry) => Ok(Json(entry)),
        None => Err(StatusCode::NOT_FOUND),
    }
}
