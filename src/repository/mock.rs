//! Mock backend implementations for isolating services in tests.

use std::sync::Mutex;

use mockall::mock;
use serde_json::Value;
use tokio::sync::oneshot;

use crate::domain::query::SearchQuery;
use crate::repository::errors::{ApiError, ApiResult};
use crate::repository::{BackendFuture, SearchBackend, SessionBackend};

mock! {
    pub Backend {}

    impl SearchBackend for Backend {
        fn find(&self, endpoint: &'static str, query: SearchQuery) -> BackendFuture<Value>;
    }

    impl SessionBackend for Backend {
        fn verify_session(&self) -> BackendFuture<()>;
        fn login(&self, username: String, password: String) -> BackendFuture<()>;
        fn logout(&self) -> BackendFuture<()>;
    }
}

/// An already-completed backend call, for `returning` closures.
pub fn respond<T: Send + 'static>(result: ApiResult<T>) -> BackendFuture<T> {
    Box::pin(std::future::ready(result))
}

/// Search backend whose requests complete only when the test says so.
///
/// Each `find` call is recorded in order together with the sender that
/// completes it. A request whose future was dropped can no longer be
/// completed, which is how tests observe cancellation.
#[derive(Default)]
pub struct ScriptedBackend {
    requests: Mutex<Vec<(&'static str, SearchQuery, oneshot::Sender<ApiResult<Value>>)>>,
}

impl ScriptedBackend {
    /// Completes the `index`-th outstanding request. Returns `false` if there
    /// is no such request or its caller had already given up on it.
    pub fn complete(&self, index: usize, body: ApiResult<Value>) -> bool {
        let sender = {
            let mut requests = self.requests.lock().unwrap_or_else(|e| e.into_inner());
            if index >= requests.len() {
                return false;
            }
            let (_, _, sender) = requests.remove(index);
            sender
        };
        sender.send(body).is_ok()
    }

    /// Queries of the outstanding requests, oldest first.
    pub fn sent(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|(_, query, _)| query.to_string())
            .collect()
    }

    pub fn endpoints(&self) -> Vec<&'static str> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|(endpoint, _, _)| *endpoint)
            .collect()
    }
}

impl SearchBackend for ScriptedBackend {
    fn find(&self, endpoint: &'static str, query: SearchQuery) -> BackendFuture<Value> {
        let (sender, receiver) = oneshot::channel();
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((endpoint, query, sender));
        Box::pin(async move {
            receiver
                .await
                .unwrap_or_else(|_| Err(ApiError::Transport("request abandoned".into())))
        })
    }
}

/// Sessions always succeed; only searches are scripted.
impl SessionBackend for ScriptedBackend {
    fn verify_session(&self) -> BackendFuture<()> {
        respond(Ok(()))
    }

    fn login(&self, _username: String, _password: String) -> BackendFuture<()> {
        respond(Ok(()))
    }

    fn logout(&self) -> BackendFuture<()> {
        respond(Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn completing_an_unknown_request_is_refused() {
        let backend = ScriptedBackend::default();
        assert!(!backend.complete(0, Ok(json!([]))));

        let _pending = backend.find("clientele/find", SearchQuery::build([("phone", "555")]));
        assert!(!backend.complete(3, Ok(json!([]))));
        assert_eq!(backend.sent(), vec!["phone=555"]);
    }
}
