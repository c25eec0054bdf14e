use std::sync::Arc;

use axum::{
    extract::Extension, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/occupancy", get(occupancy))
        .route("/transactions", get(transactions))
}

pub async fn occupancy(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.reporting.occupancy_report() {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

/// Full history, newest first.
pub async fn transactions(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.reporting.transaction_history() {
        Ok(history) => {
            let out: Vec<_> = history.iter().map(dto::transaction_to_json).collect();
            (StatusCode::OK, Json(out)).into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}
