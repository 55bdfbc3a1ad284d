//! Authentication state of the admin session.

use std::fmt::{Display, Formatter};

/// Where the cookie session stands, as far as the client knows.
///
/// Starts at [`SessionState::Checking`] until the backend has answered the
/// verification request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Checking,
    Authenticated,
    Unauthenticated,
}

impl SessionState {
    pub fn is_authenticated(self) -> bool {
        self == SessionState::Authenticated
    }
}

impl Display for SessionState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SessionState::Checking => "checking",
            SessionState::Authenticated => "authenticated",
            SessionState::Unauthenticated => "unauthenticated",
        };
        f.write_str(label)
    }
}
