//! Discount panel handlers.

use axum::{Json, extract::State, response::Response};
use serde::Deserialize;
use std::sync::Arc;

use crate::pricing::DiscountKind;

use super::cart::cart_response;
use super::super::state::AppState;

/// A discount value as typed: a number or raw input text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ValueInput {
    Number(f64),
    Text(String),
}

/// Request body for PUT /api/discount. Ignored while the panel is hidden.
#[derive(Debug, Deserialize)]
pub struct DiscountUpdate {
    pub kind: Option<DiscountKind>,
    pub value: Option<ValueInput>,
}

/// POST /api/discount/toggle - Show or hide the panel; the value resets to 0.
pub async fn toggle(State(state): State<Arc<AppState>>) -> Response {
    let mut session = state.session.write().await;
    session.discount_panel_mut().toggle();
    cart_response(&session)
}

/// PUT /api/discount - Change kind and/or value.
pub async fn update(
    State(state): State<Arc<AppState>>,
    Json(update): Json<DiscountUpdate>,
) -> Response {
    let mut session = state.session.write().await;
    let panel = session.discount_panel_mut();
    if let Some(kind) = update.kind {
        panel.set_kind(kind);
    }
    match update.value {
        Some(ValueInput::Number(v)) => panel.set_value(v),
        Some(ValueInput::Text(raw)) => panel.set_value_input(&raw),
        None => {}
    }
    cart_response(&session)
}
