//! # HTTP Server for the Storefront Session
//!
//! Exposes one in-memory session over a small JSON API so a browser front end
//! can drive browsing, the cart and the discount panel.
//!
//! ## Usage
//!
//! ```bash
//! storefront serve --listen 127.0.0.1:8080 --catalog cafe
//! ```

mod handlers;
mod state;

pub use state::AppState;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::StorefrontError;
use crate::session::Session;

/// Build the API router around shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Browse API
        .route("/api/categories", get(handlers::catalog::categories))
        .route("/api/products", get(handlers::catalog::products))
        .route("/api/view", put(handlers::catalog::update_view))
        // Cart API
        .route(
            "/api/cart",
            get(handlers::cart::show).delete(handlers::cart::clear),
        )
        .route("/api/cart/items", post(handlers::cart::add_item))
        .route("/api/cart/items/:index", delete(handlers::cart::remove_item))
        .route(
            "/api/cart/items/:index/quantity",
            put(handlers::cart::set_quantity),
        )
        .route(
            "/api/cart/items/:index/addons/:addon_id",
            put(handlers::cart::set_addon),
        )
        .route(
            "/api/cart/products/:product_id",
            delete(handlers::cart::remove_product),
        )
        // Discount API
        .route("/api/discount", put(handlers::discount::update))
        .route("/api/discount/toggle", post(handlers::discount::toggle))
        // Receipt
        .route("/api/receipt", get(handlers::receipt::show))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use storefront::config::{ServerConfig, StoreConfig};
/// use storefront::server::serve;
///
/// # async fn example() -> Result<(), storefront::StorefrontError> {
/// let config = ServerConfig {
///     listen_addr: "127.0.0.1:8080".to_string(),
///     store: StoreConfig::default(),
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), StorefrontError> {
    let catalog = config.store.catalog.load()?;
    let session = Session::new(catalog);
    let app_state = Arc::new(AppState::new(config.clone(), session));
    let app = router(app_state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            StorefrontError::Server(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    tracing::info!(
        listen = %config.listen_addr,
        store = %config.store.store_name,
        "storefront HTTP server listening"
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| StorefrontError::Server(format!("Server error: {}", e)))?;

    Ok(())
}
