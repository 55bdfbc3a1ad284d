//! Access to the admin REST backend.
//!
//! The traits here are the seams the services depend on; [`ApiClient`] is the
//! HTTP implementation, and `mock` provides mockall doubles for tests.

use std::future::Future;
use std::pin::Pin;

use serde_json::Value;

use crate::domain::query::SearchQuery;
use crate::repository::errors::ApiResult;

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use http::ApiClient;

/// Owned, sendable future returned by backend calls.
///
/// Dropping it abandons the request.
pub type BackendFuture<T> = Pin<Box<dyn Future<Output = ApiResult<T>> + Send + 'static>>;

pub trait SearchBackend: Send + Sync {
    /// `GET <base>/<endpoint>?<query>` with the session cookie; yields the JSON body.
    fn find(&self, endpoint: &'static str, query: SearchQuery) -> BackendFuture<Value>;
}

pub trait SessionBackend: Send + Sync {
    /// Succeeds when the session cookie is accepted.
    fn verify_session(&self) -> BackendFuture<()>;
    fn login(&self, username: String, password: String) -> BackendFuture<()>;
    fn logout(&self) -> BackendFuture<()>;
}
