//! Supplier routes: POST and GET /suppliers.

use crate::handlers::{create_supplier, list_suppliers};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn supplier_routes(state: AppState) -> Router {
    Router::new()
        .route("/suppliers", get(list_suppliers).post(create_supplier))
        .with_state(state)
}
