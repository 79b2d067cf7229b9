//! JSON body extractor rejecting with an error envelope.

use crate::error::AppError;
use async_trait::async_trait;
use axum::extract::{rejection::JsonRejection, FromRequest, Json, Request};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;

/// Like [`axum::Json`], but rejections are envelopes. Oversized bodies are 413, everything else
/// (syntax, shape, content type) is a bad request.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(rejection_to_error(rejection)),
        }
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(rejection.body_text())
    } else {
        AppError::BadRequest(rejection.body_text())
    }
}
