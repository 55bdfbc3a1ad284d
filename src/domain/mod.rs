//! Domain model of the back-office search pages.

pub mod booking;
pub mod client;
pub mod filter;
pub mod invoice;
pub mod query;
pub mod search;
pub mod session;
pub mod types;
