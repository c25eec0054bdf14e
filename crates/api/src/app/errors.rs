use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use rackline_core::DomainError;
use rackline_infra::ServiceError;

pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::Domain(e) => domain_error_to_response(e),
        ServiceError::Store(e) => {
            tracing::error!(error = %e, "store failure");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", e.to_string())
        }
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let (status, code) = match &err {
        DomainError::InvalidDimension(_) => (StatusCode::BAD_REQUEST, "invalid_dimension"),
        DomainError::InvalidQuantity(_) => (StatusCode::BAD_REQUEST, "invalid_quantity"),
        DomainError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
        DomainError::DuplicateSku(_) => (StatusCode::CONFLICT, "duplicate_sku"),
        DomainError::ProductNotFound(_) => (StatusCode::NOT_FOUND, "product_not_found"),
        DomainError::NotConfigured => (StatusCode::NOT_FOUND, "not_configured"),
        DomainError::LocationNotFound { .. } => (StatusCode::NOT_FOUND, "location_not_found"),
        DomainError::LocationEmpty(_) => (StatusCode::UNPROCESSABLE_ENTITY, "location_empty"),
        DomainError::InsufficientQuantity { .. } => {
            (StatusCode::UNPROCESSABLE_ENTITY, "insufficient_quantity")
        }
        DomainError::NoAvailableLocation => {
            (StatusCode::UNPROCESSABLE_ENTITY, "no_available_location")
        }
        DomainError::ConcurrentConflict(_) => (StatusCode::CONFLICT, "conflict"),
    };
    json_error(status, code, err.to_string())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
