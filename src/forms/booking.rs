use crate::domain::booking::FoundBooking;
use crate::domain::filter::{FieldKind, FilterSet};
use crate::domain::search::SearchDomain;
use crate::domain::types::TypeConstraintError;

/// First year offered by the booking date filter.
pub const FIRST_BOOKING_YEAR: i32 = 2026;

/// The "find booking request" page.
pub struct BookingSearch;

impl SearchDomain for BookingSearch {
    type Row = FoundBooking;

    const ENDPOINT: &'static str = "booking/find";
    const TITLE: &'static str = "FIND BOOKING";

    fn filters() -> Result<FilterSet, TypeConstraintError> {
        FilterSet::new()
            .with_toggle(
                "name",
                &[("first_name", FieldKind::Text), ("last_name", FieldKind::Text)],
            )?
            .with_text("email")?
            .with_text("phone")?
            .with_toggle(
                "date",
                &[
                    (
                        "year",
                        FieldKind::Year {
                            first: FIRST_BOOKING_YEAR,
                        },
                    ),
                    ("month", FieldKind::Month),
                ],
            )?
            .with_text("booking_number")?
            .with_text("booking_id")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declares_backend_parameters_in_order() {
        let keys: Vec<_> = BookingSearch::filters()
            .unwrap()
            .fields()
            .iter()
            .map(|f| f.key.to_string())
            .collect();
        assert_eq!(
            keys,
            vec![
                "first_name",
                "last_name",
                "email",
                "phone",
                "year",
                "month",
                "booking_number",
                "booking_id",
            ]
        );
    }
}
