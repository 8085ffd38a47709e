//! Browse API handlers: categories, visible products, view controls.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::catalog::Product;
use crate::filter::SortKey;
use crate::session::Session;

use super::super::state::AppState;

#[derive(Debug, Serialize)]
struct CategorySummary<'a> {
    id: &'a str,
    name: &'a str,
    product_count: usize,
}

#[derive(Debug, Serialize)]
struct CategoriesResponse<'a> {
    selected: &'a str,
    categories: Vec<CategorySummary<'a>>,
}

#[derive(Debug, Serialize)]
struct ProductCard {
    #[serde(flatten)]
    product: Product,
    in_cart: bool,
}

#[derive(Debug, Serialize)]
struct ProductsResponse<'a> {
    category: &'a str,
    search: &'a str,
    sort: SortKey,
    products: Vec<ProductCard>,
}

/// Request body for PUT /api/view. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct ViewUpdate {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: Option<SortKey>,
}

/// GET /api/categories - List categories and the current selection.
pub async fn categories(State(state): State<Arc<AppState>>) -> Response {
    let session = state.session.read().await;
    let body = CategoriesResponse {
        selected: session.selected_category(),
        categories: session
            .catalog()
            .categories()
            .iter()
            .map(|c| CategorySummary {
                id: &c.id,
                name: &c.name,
                product_count: c.products.len(),
            })
            .collect(),
    };
    Json(body).into_response()
}

/// GET /api/products - Products of the selected category after search/sort.
pub async fn products(State(state): State<Arc<AppState>>) -> Response {
    let session = state.session.read().await;
    products_response(&session)
}

/// PUT /api/view - Change category, search term and/or sort key.
pub async fn update_view(
    State(state): State<Arc<AppState>>,
    Json(update): Json<ViewUpdate>,
) -> Response {
    let mut session = state.session.write().await;
    if let Some(category) = &update.category {
        session.select_category(category);
    }
    if let Some(search) = &update.search {
        session.set_search(search);
    }
    if let Some(sort) = update.sort {
        session.set_sort(sort);
    }
    products_response(&session)
}

fn products_response(session: &Session) -> Response {
    let products = session
        .visible_products()
        .into_iter()
        .map(|product| ProductCard {
            in_cart: session.is_in_cart(&product.id),
            product,
        })
        .collect();
    Json(ProductsResponse {
        category: session.selected_category(),
        search: session.search_term(),
        sort: session.sort(),
        products,
    })
    .into_response()
}
