use crate::countries;
use crate::error::CheckoutError;
use serde::{Deserialize, Serialize};

/// Recipient details collected on the shipping stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    /// Phone country calling code, defaulted from country matching.
    pub dial_code: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    /// Free text, matched case-insensitively against the country table.
    pub country: String,
}

impl ShippingAddress {
    /// Records the country input and auto-populates the dialing code when
    /// the text matches the country table. An unmatched input keeps whatever
    /// dial code was already there.
    pub fn set_country(&mut self, input: &str) {
        self.country = input.to_string();
        if let Some(code) = countries::dial_code_for(input) {
            self.dial_code = code.to_string();
        }
    }

    /// Fail-fast validation in fixed field order: country, first name, last
    /// name, phone, email, address, city. The first empty field (after
    /// trimming) determines the single message returned.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        let required: [(&'static str, &str, &str); 7] = [
            ("country", &self.country, "Please select your country"),
            ("first_name", &self.first_name, "Please enter your first name"),
            ("last_name", &self.last_name, "Please enter your last name"),
            ("phone", &self.phone, "Please enter your phone number"),
            ("email", &self.email, "Please enter your email address"),
            ("address", &self.address, "Please enter your street address"),
            ("city", &self.city, "Please enter your city"),
        ];

        for (field, value, message) in required {
            if value.trim().is_empty() {
                return Err(CheckoutError::validation(field, message));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ShippingAddress {
        ShippingAddress {
            first_name: "Amira".to_string(),
            last_name: "Khan".to_string(),
            phone: "3001234567".to_string(),
            dial_code: "+92".to_string(),
            email: "amira@example.com".to_string(),
            address: "12 Canal Road".to_string(),
            city: "Lahore".to_string(),
            state: None,
            postal_code: Some("54000".to_string()),
            country: "Pakistan".to_string(),
        }
    }

    #[test]
    fn complete_address_validates() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn first_missing_field_wins() {
        let mut address = filled();
        address.country = "  ".to_string();
        address.first_name = String::new();
        let err = address.validate().unwrap_err();
        match err {
            CheckoutError::Validation { field, .. } => assert_eq!(field, "country"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn whitespace_only_values_fail() {
        let mut address = filled();
        address.city = "   ".to_string();
        let err = address.validate().unwrap_err();
        match err {
            CheckoutError::Validation { field, .. } => assert_eq!(field, "city"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let mut address = filled();
        address.state = None;
        address.postal_code = None;
        assert!(address.validate().is_ok());
    }

    #[test]
    fn country_input_populates_dial_code() {
        let mut address = ShippingAddress::default();
        address.set_country("uk");
        assert_eq!(address.dial_code, "+44");

        // unmatched input keeps the previous code
        address.set_country("nowhere land");
        assert_eq!(address.dial_code, "+44");
        assert_eq!(address.country, "nowhere land");
    }
}
