use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use rackline_infra::{PickRequest, ReceiveRequest};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn receive(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ReceiveRequest>,
) -> axum::response::Response {
    let product_id = match dto::parse_product_id(&body.product_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let request = ReceiveRequest {
        product_id,
        quantity: body.quantity,
    };

    match services.ledger.receive(request) {
        Ok(receipt) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": "Item received successfully",
                "location": {
                    "aisle": receipt.coordinate.aisle,
                    "tier": receipt.coordinate.tier,
                },
                "transaction_id": receipt.transaction_id.to_string(),
            })),
        )
            .into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn pick(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::PickRequest>,
) -> axum::response::Response {
    let request = PickRequest {
        aisle: body.aisle,
        tier: body.tier,
        quantity: body.quantity,
    };

    match services.ledger.pick(request) {
        Ok(receipt) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": "Items picked successfully",
                "remaining": receipt.remaining,
                "transaction_id": receipt.transaction_id.to_string(),
            })),
        )
            .into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
