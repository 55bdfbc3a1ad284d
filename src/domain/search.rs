//! Per-page search configuration.

use std::fmt::Display;

use serde::de::DeserializeOwned;

use crate::domain::filter::FilterSet;
use crate::domain::types::TypeConstraintError;

/// One "find" page: its backend endpoint, its filters and its row type.
pub trait SearchDomain {
    /// Row returned by the endpoint, rendered one per line.
    type Row: DeserializeOwned + Display + Send + 'static;

    /// Path below the API base URL, without leading slash.
    const ENDPOINT: &'static str;

    /// Heading shown above the filters.
    const TITLE: &'static str;

    /// Fresh filter state: every field inactive and empty.
    fn filters() -> Result<FilterSet, TypeConstraintError>;
}
