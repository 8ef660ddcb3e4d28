//! Customer contact details.

use serde::{Deserialize, Serialize};

/// Customer contact details collected on the estimator page.
///
/// All fields are free text. The estimator deliberately performs no
/// validation and no uniqueness checks - these values exist only to be
/// forwarded to the pricing webhook, and they are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub surname: String,
    pub address: String,
    pub postcode: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let customer = Customer::default();
        assert!(customer.name.is_empty());
        assert!(customer.surname.is_empty());
        assert!(customer.address.is_empty());
        assert!(customer.postcode.is_empty());
        assert!(customer.email.is_empty());
    }

    #[test]
    fn test_round_trip_preserves_field_values() {
        // Any text value written to a field must read back unchanged,
        // including values that look malformed (no validation layer).
        let customer = Customer {
            name: "Aoife".to_string(),
            surname: "O'Brien".to_string(),
            address: "12 Wattle St, Unit 3".to_string(),
            postcode: "not-a-postcode".to_string(),
            email: "definitely not an email".to_string(),
        };

        let json = serde_json::to_string(&customer).expect("serialize");
        let back: Customer = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, customer);
    }
}
