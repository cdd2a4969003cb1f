use common::config::CheckoutConfig;
use serde::Serialize;

/// Derived money breakdown, recomputed on every cart or stage change.
/// Values are rounded to cents for display and submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub subtotal: f64,
    pub shipping: f64,
    pub tax: f64,
    pub total: f64,
}

impl Totals {
    /// Totals as shown on the cart screen: shipping applies, tax does not.
    pub fn cart_view(subtotal: f64, config: &CheckoutConfig) -> Self {
        Self::build(subtotal, config, false)
    }

    /// Totals as shown at checkout: shipping and tax both apply.
    pub fn checkout(subtotal: f64, config: &CheckoutConfig) -> Self {
        Self::build(subtotal, config, true)
    }

    fn build(subtotal: f64, config: &CheckoutConfig, with_tax: bool) -> Self {
        let shipping = if subtotal > 0.0 {
            config.shipping_fee
        } else {
            0.0
        };
        let tax = if with_tax {
            round_cents(subtotal * config.tax_rate)
        } else {
            0.0
        };
        Totals {
            subtotal: round_cents(subtotal),
            shipping,
            tax,
            total: round_cents(subtotal + shipping + tax),
        }
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
