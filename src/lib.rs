#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod forms;

#[cfg(feature = "client")]
pub mod cli;
#[cfg(feature = "client")]
pub mod console;
#[cfg(feature = "client")]
pub mod debounce;
#[cfg(feature = "client")]
mod error_conversions;
#[cfg(feature = "client")]
pub mod models;
#[cfg(feature = "client")]
pub mod repository;
#[cfg(feature = "client")]
pub mod services;

#[cfg(feature = "client")]
use std::sync::Arc;

#[cfg(feature = "client")]
use crate::cli::Page;
#[cfg(feature = "client")]
use crate::domain::session::SessionState;
#[cfg(feature = "client")]
use crate::forms::{booking::BookingSearch, client::ClientSearch, invoice::InvoiceSearch};
#[cfg(feature = "client")]
use crate::models::config::ClientConfig;
#[cfg(feature = "client")]
use crate::repository::ApiClient;
#[cfg(feature = "client")]
use crate::services::{ServiceError, ServiceResult, session};

/// Signs in (or checks the existing session) and runs the requested find page.
#[cfg(feature = "client")]
pub async fn run(config: ClientConfig, page: Page) -> ServiceResult<()> {
    let backend = Arc::new(ApiClient::new(&config.api_url)?);

    let mut state = SessionState::default();
    log::info!("Session: {state}");
    state = match config.password.as_deref() {
        Some(password) => session::login(backend.as_ref(), &config.username, password).await?,
        None => session::check_session(backend.as_ref()).await,
    };
    log::info!("Session: {state}");
    if !state.is_authenticated() {
        return Err(ServiceError::Unauthorized);
    }

    match page {
        Page::Booking => console::drive::<BookingSearch, _>(backend, state, &config).await,
        Page::Clients => console::drive::<ClientSearch, _>(backend, state, &config).await,
        Page::Invoices => console::drive::<InvoiceSearch, _>(backend, state, &config).await,
    }
}
