use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use rackline_catalog::RegisterProduct;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route("/:id", get(get_product))
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::RegisterProductRequest>,
) -> axum::response::Response {
    let cmd = RegisterProduct::new(body.name, body.sku, body.description.unwrap_or_default());

    match services.catalog.register(cmd) {
        Ok(product_id) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": "Product added successfully",
                "product_id": product_id.to_string(),
            })),
        )
            .into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let product_id = match dto::parse_product_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.catalog.lookup(product_id) {
        Ok(p) => (StatusCode::OK, Json(dto::product_to_json(&p))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.catalog.list() {
        Ok(products) => {
            let out: Vec<_> = products.iter().map(dto::product_to_json).collect();
            (StatusCode::OK, Json(out)).into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}
