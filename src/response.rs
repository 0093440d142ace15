//! Standard response envelope: `{ "data": ..., "message": ... }`.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub message: String,
}

pub fn success<T: Serialize>(
    status: StatusCode,
    data: T,
    message: &str,
) -> (StatusCode, Json<Envelope<T>>) {
    (
        status,
        Json(Envelope {
            data: Some(data),
            message: message.to_string(),
        }),
    )
}

pub fn created<T: Serialize>(data: T, message: &str) -> (StatusCode, Json<Envelope<T>>) {
    success(StatusCode::CREATED, data, message)
}

pub fn ok<T: Serialize>(data: T, message: &str) -> (StatusCode, Json<Envelope<T>>) {
    success(StatusCode::OK, data, message)
}

pub fn error_body(message: String) -> Envelope<()> {
    Envelope { data: None, message }
}
