//! Session checks against the backend's cookie authentication.

use log::{info, warn};

use crate::domain::session::SessionState;
use crate::repository::SessionBackend;
use crate::services::ServiceResult;

/// Asks the backend whether the current cookie is a signed-in session.
///
/// Any failure, including a transport error, counts as signed out.
pub async fn check_session<B>(backend: &B) -> SessionState
where
    B: SessionBackend + ?Sized,
{
    match backend.verify_session().await {
        Ok(()) => {
            info!("Session verified");
            SessionState::Authenticated
        }
        Err(err) if err.is_unauthorized() => {
            info!("Session is not authorized");
            SessionState::Unauthenticated
        }
        Err(err) => {
            warn!("Failed to verify session: {err}");
            SessionState::Unauthenticated
        }
    }
}

/// Signs in and re-checks the session; a rejected password ends up unauthenticated.
pub async fn login<B>(backend: &B, username: &str, password: &str) -> ServiceResult<SessionState>
where
    B: SessionBackend + ?Sized,
{
    backend
        .login(username.to_string(), password.to_string())
        .await
        .map_err(|err| {
            log::error!("Login failed: {err}");
            err
        })?;
    Ok(check_session(backend).await)
}

pub async fn logout<B>(backend: &B) -> ServiceResult<SessionState>
where
    B: SessionBackend + ?Sized,
{
    backend.logout().await.map_err(|err| {
        log::error!("Logout failed: {err}");
        err
    })?;
    info!("Logged out");
    Ok(SessionState::Unauthenticated)
}
