use crate::domain::client::FoundClient;
use crate::domain::filter::{FieldKind, FilterSet};
use crate::domain::search::SearchDomain;
use crate::domain::types::TypeConstraintError;

/// The "find client" page.
pub struct ClientSearch;

impl SearchDomain for ClientSearch {
    type Row = FoundClient;

    const ENDPOINT: &'static str = "clientele/find";
    const TITLE: &'static str = "FIND CLIENT";

    fn filters() -> Result<FilterSet, TypeConstraintError> {
        FilterSet::new()
            .with_toggle(
                "name",
                &[("first_name", FieldKind::Text), ("last_name", FieldKind::Text)],
            )?
            .with_text("email")?
            .with_text("phone")?
            .with_text("client_id")
    }
}
