use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::app::errors;
use crate::app::services::AppServices;

/// Every location in `(aisle, tier)` order; empty before setup.
pub async fn list_locations(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.layout.list_locations() {
        Ok(views) => (StatusCode::OK, Json(views)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
