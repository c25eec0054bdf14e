use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use rackline_layout::ConfigureWarehouse;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Replace the warehouse and its whole location grid.
pub async fn setup_warehouse(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::SetupWarehouseRequest>,
) -> axum::response::Response {
    let cmd = ConfigureWarehouse::new(body.name, body.aisles, body.tiers);

    match services.layout.configure(cmd) {
        Ok(warehouse_id) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": "Warehouse setup successfully",
                "warehouse_id": warehouse_id.to_string(),
            })),
        )
            .into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn get_warehouse(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.layout.current() {
        Ok(w) => (StatusCode::OK, Json(dto::warehouse_to_json(&w))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
