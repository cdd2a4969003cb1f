use crate::error::CheckoutError;
use serde::{Deserialize, Serialize};

/// Fixed set of payment method keys offered on the payment stage. Which of
/// them may actually proceed is a configuration concern
/// (`CheckoutConfig::payment_methods`), not a property of the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    EasyFinora,
    Paypal,
    ApplePay,
    GooglePay,
    CreditCard,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::EasyFinora,
        PaymentMethod::Paypal,
        PaymentMethod::ApplePay,
        PaymentMethod::GooglePay,
        PaymentMethod::CreditCard,
    ];

    /// Internal method key, as used in configuration.
    pub fn key(&self) -> &'static str {
        match self {
            PaymentMethod::EasyFinora => "easy_finora",
            PaymentMethod::Paypal => "paypal",
            PaymentMethod::ApplePay => "apple_pay",
            PaymentMethod::GooglePay => "google_pay",
            PaymentMethod::CreditCard => "credit_card",
        }
    }

    /// Tag in the backend's payment-method vocabulary.
    pub fn backend_tag(&self) -> &'static str {
        match self {
            PaymentMethod::EasyFinora => "EasyFinora",
            PaymentMethod::Paypal => "PayPal",
            PaymentMethod::ApplePay => "ApplePay",
            PaymentMethod::GooglePay => "GooglePay",
            PaymentMethod::CreditCard => "CreditCard",
        }
    }

    /// Whether the method takes card input and the verification sub-flow.
    pub fn requires_card(&self) -> bool {
        matches!(self, PaymentMethod::EasyFinora)
    }
}

/// Card input collected for card-based methods.
#[derive(Debug, Clone, Default)]
pub struct CardDetails {
    pub number: String,
    pub expiry: String,
    pub cvv: String,
}

impl CardDetails {
    /// Local format checks, run before any network call: 16-digit number,
    /// expiry present as MM/YY, cvv of at least 3 digits.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        let digits_only = self.number.chars().all(|c| c.is_ascii_digit());
        if self.number.len() != 16 || !digits_only {
            return Err(CheckoutError::validation(
                "card_number",
                "Card number must be exactly 16 digits",
            ));
        }
        if self.expiry.trim().len() < 5 {
            return Err(CheckoutError::validation(
                "expiry",
                "Enter a valid expiry date (MM/YY)",
            ));
        }
        if self.cvv.trim().len() < 3 || !self.cvv.trim().chars().all(|c| c.is_ascii_digit()) {
            return Err(CheckoutError::validation("cvv", "Enter a valid CVV"));
        }
        Ok(())
    }
}

/// Outcome of the Finora card pre-verification. Must be `Verified` before an
/// order using a card-based method can be submitted.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FinoraVerification {
    #[default]
    Unverified,
    Verified {
        available_balance: f64,
    },
    Failed {
        reason: String,
    },
}

impl FinoraVerification {
    pub fn is_verified(&self) -> bool {
        matches!(self, FinoraVerification::Verified { .. })
    }
}
