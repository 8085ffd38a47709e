//! Cart API handlers.
//!
//! Every edit answers with the resulting cart. Out-of-range indices and
//! unknown add-on ids are no-ops, matching the ledger itself.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::StorefrontError;
use crate::session::Session;

use super::super::state::AppState;

/// Request body for POST /api/cart/items.
#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub product_id: String,
}

/// A quantity as typed by the user: a number or the raw input text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum QuantityInput {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// Request body for quantity updates.
#[derive(Debug, Deserialize)]
pub struct QuantityRequest {
    pub quantity: QuantityInput,
}

/// Request body for add-on updates. A quantity of 0 deselects.
#[derive(Debug, Deserialize)]
pub struct AddonRequest {
    pub quantity: i64,
}

/// Line position from the URL. Negative positions match no line.
fn line_index(raw: i64) -> Option<usize> {
    usize::try_from(raw).ok()
}

pub(super) fn cart_response(session: &Session) -> Response {
    Json(session.cart_view()).into_response()
}

/// GET /api/cart - Current lines, totals and discount panel.
pub async fn show(State(state): State<Arc<AppState>>) -> Response {
    let session = state.session.read().await;
    cart_response(&session)
}

/// POST /api/cart/items - Append a product as a new line.
pub async fn add_item(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddItemRequest>,
) -> Result<Response, (StatusCode, String)> {
    let mut session = state.session.write().await;
    session.add_product(&req.product_id).map_err(|e| match e {
        StorefrontError::UnknownProduct(_) => (StatusCode::NOT_FOUND, e.to_string()),
        other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    })?;
    Ok(cart_response(&session))
}

/// DELETE /api/cart/items/:index - Remove a line by position.
pub async fn remove_item(
    State(state): State<Arc<AppState>>,
    Path(index): Path<i64>,
) -> Response {
    let mut session = state.session.write().await;
    if let Some(index) = line_index(index) {
        session.cart_mut().remove_item(index);
    }
    cart_response(&session)
}

/// PUT /api/cart/items/:index/quantity - Set a line's quantity (clamped to >= 1).
pub async fn set_quantity(
    State(state): State<Arc<AppState>>,
    Path(index): Path<i64>,
    Json(req): Json<QuantityRequest>,
) -> Response {
    let mut session = state.session.write().await;
    let Some(index) = line_index(index) else {
        return cart_response(&session);
    };
    let cart = session.cart_mut();
    match req.quantity {
        QuantityInput::Integer(q) => cart.set_quantity(index, q),
        // Saturating cast; NaN becomes 0 and then clamps to 1.
        QuantityInput::Float(q) => cart.set_quantity(index, q.trunc() as i64),
        QuantityInput::Text(raw) => cart.set_quantity_input(index, &raw),
    }
    cart_response(&session)
}

/// PUT /api/cart/items/:index/addons/:addon_id - Select or deselect an add-on.
pub async fn set_addon(
    State(state): State<Arc<AppState>>,
    Path((index, addon_id)): Path<(i64, String)>,
    Json(req): Json<AddonRequest>,
) -> Response {
    let mut session = state.session.write().await;
    if let Some(index) = line_index(index) {
        session.cart_mut().toggle_addon(index, &addon_id, req.quantity);
    }
    cart_response(&session)
}

/// DELETE /api/cart/products/:product_id - Remove every line of a product.
pub async fn remove_product(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<String>,
) -> Response {
    let mut session = state.session.write().await;
    session.cart_mut().remove_product(&product_id);
    cart_response(&session)
}

/// DELETE /api/cart - Empty the cart.
pub async fn clear(State(state): State<Arc<AppState>>) -> Response {
    let mut session = state.session.write().await;
    session.cart_mut().clear();
    cart_response(&session)
}
