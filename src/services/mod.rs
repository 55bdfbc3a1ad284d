//! Services driving the search pages on top of the backend traits.

use thiserror::Error;

use crate::domain::filter::FilterError;
use crate::repository::errors::ApiError;

pub mod search;
pub mod session;
pub mod widget;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Not signed in")]
    Unauthorized,

    #[error("{0}")]
    Filter(#[from] FilterError),

    #[error("Invalid input: {0}")]
    Form(String),

    #[error("Type constraint violation: {0}")]
    TypeConstraint(String),

    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
