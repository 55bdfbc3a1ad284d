//! What a search widget reports back to whoever renders it.

use crate::domain::query::SearchQuery;

/// One observable step of a search widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// Filters settled on blank values: results were cleared, nothing was sent.
    Cleared,
    /// Results were cleared and a request for `query` is in flight.
    Started { query: SearchQuery },
    /// The current request completed and its `count` rows are now displayed.
    Results { count: usize },
    /// The current request failed; the result list stays empty.
    Failed { message: String },
}
