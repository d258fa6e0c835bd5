use super::{PageQuery, paginate};
use crate::server::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
};
use tera::Context;
use tracing::error;

const DEFAULT_PER_PAGE: i64 = 25;
const MAX_PER_PAGE: i64 = 200;

/// `GET /`: paginated HTML listing of recent webhooks.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, StatusCode> {
    let page = query.page.unwrap_or(1).max(1);
    let (offset, per_page) = paginate(&query, DEFAULT_PER_PAGE, MAX_PER_PAGE);

    let entries = state.store.list(offset, per_page);
    let total = state.store.len();

    let mut ctx = Context::new();
    ctx.insert("entries", &entries);
    ctx.insert("page", &page);
    ctx.insert("per_page", &(per_page as i64));
    ctx.insert("total", &total);
    ctx.insert("has_prev", &(page > 1));
    ctx.insert("has_next", &(offset + entries.len() < total));

    render(&state, "index.html", &ctx)
}

/// `GET /webhooks/{id}`: HTML detail view, 404 when unknown.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, StatusCode> {
    let Some(entry) = state.store.get(&id) else {
        return Err(StatusCode::NOT_FOUND);
    };

    let pretty_body = entry
        .body
        .to_pretty_json()
        .unwrap_or_else(|| entry.raw_body.clone());

    let mut ctx = Context::new();
    ctx.insert("entry", &entry);
    ctx.insert("pretty_body", &pretty_body);

    render(&state, "detail.html", &ctx)
}

fn render(state: &AppState, template: &str, ctx: &Context) -> Result<Html<String>, StatusCode> {
    match state.templates.render(template, ctx) {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            error!(template = template, error = %e, "Template render failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
