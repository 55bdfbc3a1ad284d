//! A complete search page: filters, debounce and the request executor.

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;

use crate::debounce::Debouncer;
use crate::domain::filter::{FilterError, FilterSet, FilterValues};
use crate::domain::query::SearchQuery;
use crate::domain::search::SearchDomain;
use crate::domain::session::SessionState;
use crate::dto::search::SearchEvent;
use crate::forms::date::validate_field;
use crate::repository::SearchBackend;
use crate::services::search::SearchExecutor;
use crate::services::{ServiceError, ServiceResult};

/// Search widget for one [`SearchDomain`].
///
/// Edits go through [`toggle`](Self::toggle) and [`set`](Self::set); the
/// resulting searches are observed by awaiting [`next_event`](Self::next_event).
/// Dropping the widget cancels both the pending debounce and the request in
/// flight.
pub struct SearchWidget<D: SearchDomain, B: ?Sized> {
    filters: FilterSet,
    debouncer: Debouncer<FilterValues>,
    settled: UnboundedReceiver<FilterValues>,
    last_settled: FilterValues,
    executor: SearchExecutor<D::Row, B>,
    _domain: PhantomData<D>,
}

impl<D, B> SearchWidget<D, B>
where
    D: SearchDomain,
    B: SearchBackend + ?Sized,
{
    /// Builds the page for a signed-in session.
    pub fn new(backend: Arc<B>, session: SessionState, delay: Duration) -> ServiceResult<Self> {
        if !session.is_authenticated() {
            return Err(ServiceError::Unauthorized);
        }

        let filters = D::filters()?;
        let (debouncer, settled) = Debouncer::new(delay);
        Ok(Self {
            last_settled: filters.values(),
            filters,
            debouncer,
            settled,
            executor: SearchExecutor::new(backend, D::ENDPOINT),
            _domain: PhantomData,
        })
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn rows(&self) -> &[D::Row] {
        self.executor.rows()
    }

    pub fn is_fetching(&self) -> bool {
        self.executor.is_fetching()
    }

    /// Shows or hides a filter; hiding it clears its values.
    pub fn toggle(&mut self, name: &str) -> ServiceResult<bool> {
        let before = self.filters.values();
        let active = self.filters.toggle(name)?;
        self.schedule_if_changed(before);
        Ok(active)
    }

    /// Replaces the raw value of an active field.
    pub fn set(&mut self, key: &str, value: &str) -> ServiceResult<()> {
        let kind = self
            .filters
            .field(key)
            .map(|field| field.kind)
            .ok_or_else(|| FilterError::UnknownField(key.to_string()))?;
        validate_field(kind, value)?;

        let before = self.filters.values();
        self.filters.set_value(key, value)?;
        self.schedule_if_changed(before);
        Ok(())
    }

    /// Waits for the next observable step: a new search cycle once the
    /// filters settle, or the outcome of the request in flight.
    pub async fn next_event(&mut self) -> SearchEvent {
        loop {
            tokio::select! {
                Some(values) = self.settled.recv() => {
                    if values == self.last_settled {
                        continue;
                    }
                    self.last_settled = values;
                    let query = SearchQuery::build(
                        self.last_settled
                            .iter()
                            .map(|(key, value)| (key.as_str(), value.as_str())),
                    );
                    return self.executor.start(query);
                }
                event = self.executor.settle() => return event,
            }
        }
    }

    fn schedule_if_changed(&mut self, before: FilterValues) {
        let after = self.filters.values();
        if after != before {
            self.debouncer.push(after);
        }
    }
}
