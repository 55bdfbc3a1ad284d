use log::debug;
use reqwest::{Client, Response};
use serde_json::Value;

use crate::domain::query::SearchQuery;
use crate::dto::auth::LoginPayload;
use crate::repository::errors::{ApiError, ApiResult};
use crate::repository::{BackendFuture, SearchBackend, SessionBackend};

/// HTTP client for the admin backend.
///
/// Cloning is cheap and clones share one cookie store, so a session obtained
/// through [`SessionBackend::login`] is sent with every later request.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Wraps an existing `reqwest` client; its cookie handling is used as is.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn ensure_success(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

impl SearchBackend for ApiClient {
    fn find(&self, endpoint: &'static str, query: SearchQuery) -> BackendFuture<Value> {
        let client = self.client.clone();
        let url = self.url(endpoint);
        Box::pin(async move {
            let url = format!("{url}?{}", query.to_query_string()?);
            debug!("sending: {url}");
            let response = ensure_success(client.get(&url).send().await?)?;
            let body = response.bytes().await?;
            Ok(serde_json::from_slice(&body)?)
        })
    }
}

impl SessionBackend for ApiClient {
    fn verify_session(&self) -> BackendFuture<()> {
        let request = self.client.get(self.url("verify_auth"));
        Box::pin(async move {
            ensure_success(request.send().await?)?;
            Ok(())
        })
    }

    fn login(&self, username: String, password: String) -> BackendFuture<()> {
        let request = self
            .client
            .post(self.url("login"))
            .json(&LoginPayload { username, password });
        Box::pin(async move {
            ensure_success(request.send().await?)?;
            Ok(())
        })
    }

    fn logout(&self) -> BackendFuture<()> {
        let request = self.client.post(self.url("logout"));
        Box::pin(async move {
            ensure_success(request.send().await?)?;
            Ok(())
        })
    }
}
