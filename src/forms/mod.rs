//! Filter layouts of the "find" pages and validation of the values typed into them.

use thiserror::Error;
use validator::ValidationErrors;

pub mod booking;
pub mod client;
pub mod date;
pub mod invoice;

#[derive(Debug, Error)]
/// Errors that can occur when validating filter input.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid year: {0}")]
    InvalidYear(String),

    #[error("invalid month: {0}")]
    InvalidMonth(String),
}
