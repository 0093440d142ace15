//! Decode the request body into a typed request at the boundary.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON body decoded into `T`. The `Content-Type` header is not inspected; any
/// read or decode failure is rejected as [`AppError::InvalidBody`].
#[derive(Clone, Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::InvalidBody(e.body_text()))?;
        let value = serde_json::from_slice(&bytes).map_err(|e| AppError::InvalidBody(e.to_string()))?;
        Ok(JsonBody(value))
    }
}
