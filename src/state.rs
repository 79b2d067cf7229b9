//! Shared application state for all routes.

use crate::error::AppError;
use crate::service::BookService;
use crate::store::BookStore;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub service: BookService,
    /// Applied to every downstream service call.
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(store: Arc<dyn BookStore>, request_timeout: Duration) -> Self {
        AppState {
            service: BookService::new(store),
            request_timeout,
        }
    }

    /// Run `fut` under the request timeout; expiry drops the future.
    pub async fn bounded<T, F>(&self, fut: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, AppError>>,
    {
        tokio::time::timeout(self.request_timeout, fut)
            .await
            .map_err(|_| AppError::Timeout(self.request_timeout))?
    }
}
