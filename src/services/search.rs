//! Cancellable execution of search requests.

use std::marker::PhantomData;
use std::sync::Arc;

use log::{debug, error};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::query::SearchQuery;
use crate::dto::search::SearchEvent;
use crate::repository::errors::ApiError;
use crate::repository::{BackendFuture, SearchBackend};

/// The request currently allowed to update the result list.
struct InFlight {
    query: SearchQuery,
    response: BackendFuture<Value>,
}

/// Runs one search at a time against an endpoint and owns the displayed rows.
///
/// Starting a search drops the previous request before anything else, so a
/// superseded response can never reach the result list. Dropping the executor
/// abandons the outstanding request the same way.
pub struct SearchExecutor<R, B: ?Sized> {
    backend: Arc<B>,
    endpoint: &'static str,
    in_flight: Option<InFlight>,
    rows: Vec<R>,
    _row: PhantomData<fn() -> R>,
}

impl<R, B> SearchExecutor<R, B>
where
    R: DeserializeOwned,
    B: SearchBackend + ?Sized,
{
    pub fn new(backend: Arc<B>, endpoint: &'static str) -> Self {
        Self {
            backend,
            endpoint,
            in_flight: None,
            rows: Vec::new(),
            _row: PhantomData,
        }
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Query of the request in flight, if any.
    pub fn current_query(&self) -> Option<&SearchQuery> {
        self.in_flight.as_ref().map(|in_flight| &in_flight.query)
    }

    /// Begins a new search cycle for `query`.
    ///
    /// The previous request is cancelled and the rows cleared. A blank query
    /// stops there without contacting the backend.
    pub fn start(&mut self, query: SearchQuery) -> SearchEvent {
        self.cancel();
        self.rows.clear();

        if query.is_empty() {
            return SearchEvent::Cleared;
        }

        debug!("sending: {query}");
        let response = self.backend.find(self.endpoint, query.clone());
        self.in_flight = Some(InFlight {
            query: query.clone(),
            response,
        });
        SearchEvent::Started { query }
    }

    /// Abandons the request in flight. Returns whether there was one.
    pub fn cancel(&mut self) -> bool {
        match self.in_flight.take() {
            Some(in_flight) => {
                debug!("cancelled: {}", in_flight.query);
                true
            }
            None => false,
        }
    }

    /// Waits for the request in flight and applies its outcome.
    ///
    /// Never resolves while idle. Cancel safe: dropping the returned future
    /// leaves the request in flight, to be awaited again later.
    pub async fn settle(&mut self) -> SearchEvent {
        let Some(in_flight) = self.in_flight.as_mut() else {
            return std::future::pending().await;
        };
        let outcome = in_flight.response.as_mut().await;
        self.in_flight = None;

        let rows = outcome.and_then(|body| {
            serde_json::from_value::<Vec<R>>(body).map_err(ApiError::from)
        });
        match rows {
            Ok(rows) => {
                self.rows = rows;
                SearchEvent::Results {
                    count: self.rows.len(),
                }
            }
            Err(err) => {
                error!("Search on {} failed: {err}", self.endpoint);
                self.rows.clear();
                SearchEvent::Failed {
                    message: err.to_string(),
                }
            }
        }
    }
}
