//! Typed errors and HTTP mapping.
//!
//! Every request-level failure carries a fixed client message. The underlying
//! database error is logged, never returned to the caller.

use crate::response::error_body;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Body could not be read or decoded into the request type.
    #[error("Invalid request body")]
    InvalidBody(String),
    #[error("Failed to start transaction")]
    BeginTransaction(#[source] sqlx::Error),
    #[error("Failed to create supplier")]
    CreateSupplier(#[source] sqlx::Error),
    #[error("Failed to save address")]
    SaveAddress(#[source] sqlx::Error),
    #[error("Failed to save contact")]
    SaveContact(#[source] sqlx::Error),
    #[error("Failed to save group")]
    SaveGroup(#[source] sqlx::Error),
    #[error("Failed to commit transaction")]
    Commit(#[source] sqlx::Error),
    #[error("Failed to retrieve suppliers")]
    ListSuppliers(#[source] sqlx::Error),
    #[error("Failed to process data")]
    DecodeRow(#[source] sqlx::Error),
    #[error("Request timed out")]
    Timeout,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn db_source(&self) -> Option<&sqlx::Error> {
        match self {
            AppError::BeginTransaction(e)
            | AppError::CreateSupplier(e)
            | AppError::SaveAddress(e)
            | AppError::SaveContact(e)
            | AppError::SaveGroup(e)
            | AppError::Commit(e)
            | AppError::ListSuppliers(e)
            | AppError::DecodeRow(e) => Some(e),
            AppError::InvalidBody(_) | AppError::Timeout => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match (&self, self.db_source()) {
            (AppError::InvalidBody(detail), _) => {
                tracing::warn!(detail = %detail, "rejected request body");
            }
            (_, Some(source)) => {
                tracing::error!(error = %source, "{}", self);
            }
            (_, None) => {
                tracing::error!("{}", self);
            }
        }
        (status, Json(error_body(self.to_string()))).into_response()
    }
}

/// Fatal errors raised while bringing the server up.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("invalid value for {name}: '{value}'")]
    InvalidSetting { name: &'static str, value: String },
    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("database is not reachable: {0}")]
    Ping(#[source] sqlx::Error),
    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
