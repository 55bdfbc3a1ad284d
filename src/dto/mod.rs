//! DTOs exchanged with the backend and handed to the front end.

pub mod auth;
pub mod search;
