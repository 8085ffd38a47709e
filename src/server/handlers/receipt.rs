//! Receipt handler.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::receipt::{self, ReceiptStamp};

use super::super::state::AppState;

/// GET /api/receipt - The checkout receipt as plain text.
pub async fn show(State(state): State<Arc<AppState>>) -> Response {
    let session = state.session.read().await;
    let store = &state.config.store;
    let text = receipt::render(
        &session,
        &store.store_name,
        &ReceiptStamp::now(&session),
        store.receipt_width,
    );
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        text,
    )
        .into_response()
}
