use serde::Deserialize;
use serde_json::{json, Value};

use rackline_catalog::Product;
use rackline_core::ProductId;
use rackline_infra::TransactionView;
use rackline_layout::Warehouse;

use crate::app::errors;

/// Timestamp layout used in the transaction history.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct SetupWarehouseRequest {
    pub name: String,
    pub aisles: i64,
    pub tiers: i64,
}

#[derive(Debug, Deserialize)]
pub struct RegisterProductRequest {
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReceiveRequest {
    pub product_id: String,
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
pub struct PickRequest {
    pub aisle: i64,
    pub tier: i64,
    pub quantity: i64,
}

// -------------------------
// Parsing helpers
// -------------------------

pub fn parse_product_id(raw: &str) -> Result<ProductId, axum::response::Response> {
    raw.parse().map_err(|_| {
        errors::json_error(
            axum::http::StatusCode::BAD_REQUEST,
            "invalid_id",
            "invalid product id",
        )
    })
}

// -------------------------
// Response mapping
// -------------------------

pub fn warehouse_to_json(w: &Warehouse) -> Value {
    json!({
        "id": w.id_typed().to_string(),
        "name": w.name(),
        "aisles": w.aisle_count(),
        "tiers": w.tier_count(),
        "created_at": w.created_at().to_rfc3339(),
    })
}

pub fn product_to_json(p: &Product) -> Value {
    json!({
        "id": p.id_typed().to_string(),
        "name": p.name(),
        "sku": p.sku(),
        "description": p.description(),
        "created_at": p.created_at().to_rfc3339(),
    })
}

pub fn transaction_to_json(t: &TransactionView) -> Value {
    json!({
        "id": t.id.to_string(),
        "type": t.kind.as_str(),
        "product_id": t.product_id.to_string(),
        "product_name": t.product_name,
        "location": t.location,
        "quantity": t.quantity,
        "timestamp": t.timestamp.format(TIMESTAMP_FORMAT).to_string(),
    })
}
