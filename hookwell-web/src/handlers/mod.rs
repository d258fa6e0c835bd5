pub mod api;
pub mod assets;
pub mod health;
pub mod ingest;
pub mod ui;
pub mod verify;

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use hookwell_core::HookwellError;
use serde::Deserialize;

/// JSON error responses with the status the error taxonomy assigns.
pub struct ApiError(pub HookwellError);

impl From<HookwellError> for ApiError {
    fn from(err: HookwellError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            self.0.to_json_body(),
        )
            .into_response()
    }
}

/// Pagination query parameters, shared by the UI and the JSON API.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Resolve a 1-based page request into `(offset, per_page)`.
///
/// `per_page` is clamped server-side to `[1, max_per_page]` regardless of
/// the caller-supplied value; pages below 1 are clamped to 1.
pub fn paginate(query: &PageQuery, default_per_page: i64, max_per_page: i64) -> (usize, usize) {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(default_per_page).clamp(1, max_per_page);
    let offset = ((page - 1) as usize).saturating_mul(per_page as usize);
    (offset, per_page as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<i64>, per_page: Option<i64>) -> PageQuery {
        PageQuery { page, per_page }
    }

    #[test]
    fn defaults_apply_when_unspecified() {
        assert_eq!(paginate(&query(None, None), 25, 200), (0, 25));
    }

    #[test]
    fn page_is_one_based() {
        assert_eq!(paginate(&query(Some(2), Some(10)), 25, 200), (10, 10));
    }

    #[test]
    fn page_below_one_is_clamped() {
        assert_eq!(paginate(&query(Some(0), Some(10)), 25, 200), (0, 10));
        assert_eq!(paginate(&query(Some(-5), Some(10)), 25, 200), (0, 10));
    }

    #[test]
    fn per_page_is_clamped_to_bounds() {
        assert_eq!(paginate(&query(None, Some(0)), 25, 200), (0, 1));
        assert_eq!(paginate(&query(None, Some(-3)), 25, 200), (0, 1));
        assert_eq!(paginate(&query(None, Some(9999)), 25, 200), (0, 200));
        assert_eq!(paginate(&query(None, Some(9999)), 100, 1000), (0, 1000));
    }
}
