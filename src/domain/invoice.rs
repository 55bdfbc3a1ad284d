use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::types::InvoiceId;

/// Summary row returned by `invoicing/find`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FoundInvoice {
    pub invoice_id: InvoiceId,
    pub invoice_number: i64,
}

impl Display for FoundInvoice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}, {}", self.invoice_number, self.invoice_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_number_then_id() {
        let row: FoundInvoice =
            serde_json::from_str(r#"{"invoice_id":"inv_7c1","invoice_number":203}"#).unwrap();
        assert_eq!(row.to_string(), "#203, inv_7c1");
    }
}
