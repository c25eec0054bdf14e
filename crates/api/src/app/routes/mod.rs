use axum::{routing::get, routing::post, Router};

pub mod locations;
pub mod products;
pub mod reports;
pub mod stock;
pub mod system;
pub mod warehouse;

/// Router for every endpoint under `/api`.
pub fn router() -> Router {
    Router::new()
        .route("/warehouse", post(warehouse::setup_warehouse).get(warehouse::get_warehouse))
        .nest("/products", products::router())
        .route("/locations", get(locations::list_locations))
        .route("/receive", post(stock::receive))
        .route("/pick", post(stock::pick))
        .nest("/reports", reports::router())
}
