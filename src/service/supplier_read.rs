//! Listing of supplier header rows.

use crate::error::AppError;
use crate::model::SupplierSummary;
use futures::TryStreamExt;
use sqlx::{FromRow, PgPool};
use std::time::Duration;

const LIST_SUPPLIERS: &str = "SELECT id, name, nick_name, status, created_at FROM suppliers ORDER BY id";

#[derive(Clone)]
pub struct SupplierReadService {
    pool: PgPool,
    deadline: Duration,
}

impl SupplierReadService {
    pub fn new(pool: PgPool, deadline: Duration) -> Self {
        Self { pool, deadline }
    }

    /// All suppliers ascending by id. Any query or decode failure discards the
    /// rows read so far.
    pub async fn list(&self) -> Result<Vec<SupplierSummary>, AppError> {
        tokio::time::timeout(self.deadline, self.fetch_all())
            .await
            .map_err(|_| AppError::Timeout)?
    }

    async fn fetch_all(&self) -> Result<Vec<SupplierSummary>, AppError> {
        tracing::debug!(sql = %LIST_SUPPLIERS, "query");
        let mut rows = sqlx::query(LIST_SUPPLIERS).fetch(&self.pool);
        let mut suppliers = Vec::new();
        while let Some(row) = rows.try_next().await.map_err(AppError::ListSuppliers)? {
            suppliers.push(SupplierSummary::from_row(&row).map_err(AppError::DecodeRow)?);
        }
        Ok(suppliers)
    }
}
