//! Supplier registry: REST service for creating and listing suppliers with
//! their addresses, contacts and groups, backed by PostgreSQL.

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;

pub use config::Settings;
pub use error::{AppError, StartupError};
pub use migration::{apply_migrations, MIGRATOR};
pub use model::{CreateSupplierRequest, CreatedSupplier, NewAddress, NewContact, NewGroup, SupplierId, SupplierSummary};
pub use routes::app;
pub use service::{SupplierReadService, SupplierWriteService};
pub use state::AppState;
