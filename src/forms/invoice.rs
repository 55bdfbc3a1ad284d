use crate::domain::filter::{FieldKind, FilterSet};
use crate::domain::invoice::FoundInvoice;
use crate::domain::search::SearchDomain;
use crate::domain::types::TypeConstraintError;

/// First year offered by the invoice date filter.
pub const FIRST_INVOICE_YEAR: i32 = 2025;

/// The "find invoice" page.
///
/// Like the other pages it issues no request while every field is blank.
pub struct InvoiceSearch;

impl SearchDomain for InvoiceSearch {
    type Row = FoundInvoice;

    const ENDPOINT: &'static str = "invoicing/find";
    const TITLE: &'static str = "FIND INVOICE";

    fn filters() -> Result<FilterSet, TypeConstraintError> {
        FilterSet::new()
            .with_toggle(
                "name",
                &[
                    ("client_first_name", FieldKind::Text),
                    ("client_last_name", FieldKind::Text),
                ],
            )?
            .with_toggle(
                "date",
                &[
                    (
                        "year",
                        FieldKind::Year {
                            first: FIRST_INVOICE_YEAR,
                        },
                    ),
                    ("month", FieldKind::Month),
                ],
            )?
            .with_text("invoice_number")?
            .with_text("invoice_id")?
            .with_text("client_id")
    }
}
