//! Shared application state for all routes.

use crate::service::{SupplierReadService, SupplierWriteService};
use sqlx::PgPool;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    /// Used directly only by the readiness check.
    pub pool: PgPool,
    pub suppliers_write: SupplierWriteService,
    pub suppliers_read: SupplierReadService,
}

impl AppState {
    pub fn new(pool: PgPool, request_timeout: Duration) -> Self {
        AppState {
            suppliers_write: SupplierWriteService::new(pool.clone(), request_timeout),
            suppliers_read: SupplierReadService::new(pool.clone(), request_timeout),
            pool,
        }
    }
}
