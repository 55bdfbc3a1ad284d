use serde::Serialize;

/// Body of `POST /login`.
#[derive(Debug, Serialize)]
pub struct LoginPayload {
    pub username: String,
    pub password: String,
}
