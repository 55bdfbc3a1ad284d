use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::types::ClientId;

/// Summary row returned by `clientele/find`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FoundClient {
    pub client_id: ClientId,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl Display for FoundClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default(),
            self.client_id
        )
    }
}
