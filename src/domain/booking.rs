use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::types::BookingId;

/// Summary row returned by `booking/find`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FoundBooking {
    pub booking_id: BookingId,
    pub booking_number: i64,
}

impl Display for FoundBooking {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}, {}", self.booking_number, self.booking_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_number_then_id() {
        let row: FoundBooking =
            serde_json::from_str(r#"{"booking_id":"bk_9f2","booking_number":14}"#).unwrap();
        assert_eq!(row.to_string(), "#14, bk_9f2");
    }
}
