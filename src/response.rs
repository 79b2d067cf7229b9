//! Uniform response envelope: `{status_code, description, data}`.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status_code: u16,
    pub description: String,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn new(status: StatusCode, data: Option<T>) -> Self {
        Envelope {
            status_code: status.as_u16(),
            description: describe(status).to_string(),
            data,
        }
    }
}

/// Human-readable category for a status code.
pub fn describe(status: StatusCode) -> &'static str {
    match status.as_u16() {
        code if code < 400 => "OK",
        401 => "Unauthorized",
        404 => "Not Found",
        code if code < 500 => "Bad Request",
        _ => "Internal Server Error",
    }
}

pub fn respond<T: Serialize>(status: StatusCode, data: T) -> (StatusCode, Json<Envelope<T>>) {
    (status, Json(Envelope::new(status, Some(data))))
}

pub fn success_created<T: Serialize>(data: T) -> (StatusCode, Json<Envelope<T>>) {
    respond(StatusCode::CREATED, data)
}

pub fn success_ok<T: Serialize>(data: T) -> (StatusCode, Json<Envelope<T>>) {
    respond(StatusCode::OK, data)
}
