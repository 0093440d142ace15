//! Supplier handlers: create, list.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::{CreateSupplierRequest, CreatedSupplier};
use crate::response::{created, ok};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn create_supplier(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateSupplierRequest>,
) -> Result<impl IntoResponse, AppError> {
    let supplier_id = state.suppliers_write.create(&request).await?;
    Ok(created(CreatedSupplier { supplier_id }, "Supplier created successfully"))
}

pub async fn list_suppliers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let suppliers = state.suppliers_read.list().await?;
    Ok(ok(suppliers, "Suppliers retrieved successfully"))
}
