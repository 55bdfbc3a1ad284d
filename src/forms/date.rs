//! Year and month selections used by the booking and invoice pages.

use chrono::{Datelike, Local};
use validator::{Validate, ValidationError};

use crate::domain::filter::FieldKind;
use crate::forms::FormError;

/// How many years past the current one the year selection offers.
pub const YEARS_AHEAD: i32 = 5;

#[derive(Debug, Validate)]
#[validate(schema(function = "validate_year_range"))]
pub struct DateFilterForm {
    pub year: Option<i32>,
    #[validate(range(min = 1, max = 12))]
    pub month: Option<u32>,
    pub first_year: i32,
    pub last_year: i32,
}

fn validate_year_range(form: &DateFilterForm) -> Result<(), ValidationError> {
    match form.year {
        Some(year) if year < form.first_year || year > form.last_year => {
            Err(ValidationError::new("year_out_of_range"))
        }
        _ => Ok(()),
    }
}

/// Checks raw input for a field of the given kind against today's calendar.
pub fn validate_field(kind: FieldKind, raw: &str) -> Result<(), FormError> {
    validate_field_at(kind, raw, Local::now().year())
}

/// Same as [`validate_field`] with an explicit current year.
///
/// Blank input is always accepted: it stands for "no selection".
pub fn validate_field_at(kind: FieldKind, raw: &str, current_year: i32) -> Result<(), FormError> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(());
    }

    let form = match kind {
        FieldKind::Text => return Ok(()),
        FieldKind::Year { first } => DateFilterForm {
            year: Some(
                value
                    .parse()
                    .map_err(|_| FormError::InvalidYear(value.to_string()))?,
            ),
            month: None,
            first_year: first,
            last_year: current_year + YEARS_AHEAD,
        },
        FieldKind::Month => DateFilterForm {
            year: None,
            month: Some(
                value
                    .parse()
                    .map_err(|_| FormError::InvalidMonth(value.to_string()))?,
            ),
            first_year: current_year,
            last_year: current_year,
        },
    };

    form.validate()?;
    Ok(())
}

/// Years offered by a year selection starting at `first`.
pub fn year_choices(first: i32, current_year: i32) -> Vec<i32> {
    (first..=current_year + YEARS_AHEAD).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_selection_is_always_valid() {
        assert!(validate_field_at(FieldKind::Month, "  ", 2026).is_ok());
        assert!(validate_field_at(FieldKind::Year { first: 2026 }, "", 2026).is_ok());
    }

    #[test]
    fn text_is_never_rejected() {
        assert!(validate_field_at(FieldKind::Text, "anything at all", 2026).is_ok());
    }

    #[test]
    fn month_must_be_between_one_and_twelve() {
        assert!(validate_field_at(FieldKind::Month, "12", 2026).is_ok());
        assert!(matches!(
            validate_field_at(FieldKind::Month, "13", 2026),
            Err(FormError::Validation(_))
        ));
        assert!(matches!(
            validate_field_at(FieldKind::Month, "0", 2026),
            Err(FormError::Validation(_))
        ));
        assert!(matches!(
            validate_field_at(FieldKind::Month, "June", 2026),
            Err(FormError::InvalidMonth(_))
        ));
    }

    #[test]
    fn year_must_fall_within_the_offered_range() {
        let kind = FieldKind::Year { first: 2025 };
        assert!(validate_field_at(kind, "2025", 2026).is_ok());
        assert!(validate_field_at(kind, " 2031 ", 2026).is_ok());
        assert!(matches!(
            validate_field_at(kind, "2032", 2026),
            Err(FormError::Validation(_))
        ));
        assert!(matches!(
            validate_field_at(kind, "2024", 2026),
            Err(FormError::Validation(_))
        ));
        assert!(matches!(
            validate_field_at(kind, "next", 2026),
            Err(FormError::InvalidYear(_))
        ));
    }

    #[test]
    fn year_choices_run_five_years_ahead() {
        assert_eq!(
            year_choices(2025, 2026),
            vec![2025, 2026, 2027, 2028, 2029, 2030, 2031]
        );
    }
}
