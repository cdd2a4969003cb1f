use crate::payment::{CardDetails, PaymentMethod};
use crate::shipping::ShippingAddress;
use crate::totals::Totals;
use cart::model::CartLine;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One backend-shaped order item. Ids the backend has not assigned yet are
/// sent as the explicit nil-UUID sentinel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRecord {
    pub id: Uuid,
    pub store_product_id: Uuid,
    pub product_title: String,
    pub unit_price: f64,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl From<&CartLine> for OrderItemRecord {
    fn from(line: &CartLine) -> Self {
        OrderItemRecord {
            id: line.cart_line_id.unwrap_or(Uuid::nil()),
            store_product_id: line.listing_id,
            product_title: line.title.clone(),
            unit_price: line.unit_price,
            quantity: line.quantity,
            size: line.size.clone(),
            color: line.color.clone(),
        }
    }
}

/// Write-once order-creation request. Assembled from the cart snapshot,
/// shipping form, payment selection, and computed totals; never kept around
/// beyond the single submission attempt.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    pub items: Vec<OrderItemRecord>,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    pub country: String,
    /// Backend vocabulary tag, translated from the internal method key.
    pub payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvv: Option<String>,
    pub subtotal: f64,
    pub shipping_fee: f64,
    pub tax: f64,
    pub total_amount: f64,
}

impl OrderSubmission {
    pub fn assemble(
        lines: &[CartLine],
        shipping: &ShippingAddress,
        method: PaymentMethod,
        card: Option<&CardDetails>,
        totals: &Totals,
    ) -> Self {
        // Card fields travel only for card-based methods
        let card = if method.requires_card() { card } else { None };
        OrderSubmission {
            items: lines.iter().map(OrderItemRecord::from).collect(),
            first_name: shipping.first_name.clone(),
            last_name: shipping.last_name.clone(),
            phone_number: format!("{}{}", shipping.dial_code, shipping.phone),
            email: shipping.email.clone(),
            address: shipping.address.clone(),
            city: shipping.city.clone(),
            state: shipping.state.clone(),
            postal_code: shipping.postal_code.clone(),
            country: shipping.country.clone(),
            payment_method: method.backend_tag().to_string(),
            card_number: card.map(|c| c.number.clone()),
            expiry_date: card.map(|c| c.expiry.clone()),
            cvv: card.map(|c| c.cvv.clone()),
            subtotal: totals.subtotal,
            shipping_fee: totals.shipping,
            tax: totals.tax,
            total_amount: totals.total,
        }
    }
}

/// Context carried into the confirmation screen after submission.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    pub order_number: String,
    pub total_amount: f64,
    /// True when the backend response was lost and the order was confirmed
    /// optimistically after the grace window.
    pub is_delayed: bool,
}

/// Locally generated identifier used when the backend never returned an
/// order number (delayed confirmations, or a success response without one).
pub fn fallback_order_number() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("WC-{}", id[..8].to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::CheckoutConfig;

    fn line(price: f64, quantity: u32) -> CartLine {
        CartLine {
            listing_id: Uuid::new_v4(),
            cart_line_id: None,
            title: "Sneakers".to_string(),
            image_url: String::new(),
            store_name: "Kicks".to_string(),
            unit_price: price,
            quantity,
            size: Some("42".to_string()),
            color: None,
            discount_percent: None,
        }
    }

    fn shipping() -> ShippingAddress {
        ShippingAddress {
            first_name: "Dana".to_string(),
            last_name: "Reyes".to_string(),
            phone: "5551234".to_string(),
            dial_code: "+1".to_string(),
            email: "dana@example.com".to_string(),
            address: "9 Elm St".to_string(),
            city: "Austin".to_string(),
            state: Some("TX".to_string()),
            postal_code: None,
            country: "United States".to_string(),
        }
    }

    #[test]
    fn unpersisted_lines_carry_nil_sentinel() {
        let totals = Totals::checkout(50.0, &CheckoutConfig::default());
        let submission = OrderSubmission::assemble(
            &[line(50.0, 1)],
            &shipping(),
            PaymentMethod::EasyFinora,
            Some(&CardDetails {
                number: "4111111111111111".to_string(),
                expiry: "11/26".to_string(),
                cvv: "999".to_string(),
            }),
            &totals,
        );
        assert_eq!(submission.items[0].id, Uuid::nil());
        assert_eq!(submission.payment_method, "EasyFinora");
        assert_eq!(submission.card_number.as_deref(), Some("4111111111111111"));
        assert_eq!(submission.phone_number, "+15551234");
    }

    #[test]
    fn card_fields_dropped_for_non_card_methods() {
        let totals = Totals::checkout(50.0, &CheckoutConfig::default());
        let submission = OrderSubmission::assemble(
            &[line(50.0, 1)],
            &shipping(),
            PaymentMethod::Paypal,
            Some(&CardDetails::default()),
            &totals,
        );
        assert!(submission.card_number.is_none());
        assert!(submission.cvv.is_none());
        assert_eq!(submission.payment_method, "PayPal");
    }

    #[test]
    fn serialized_shape_is_camel_case_without_empty_card_fields() {
        let totals = Totals::checkout(10.0, &CheckoutConfig::default());
        let submission = OrderSubmission::assemble(
            &[line(10.0, 1)],
            &shipping(),
            PaymentMethod::Paypal,
            None,
            &totals,
        );
        let json = serde_json::to_value(&submission).unwrap();
        assert!(json.get("totalAmount").is_some());
        assert!(json.get("cardNumber").is_none());
        assert!(json["items"][0].get("storeProductId").is_some());
    }

    #[test]
    fn fallback_order_numbers_are_prefixed_and_unique() {
        let a = fallback_order_number();
        let b = fallback_order_number();
        assert!(a.starts_with("WC-"));
        assert_eq!(a.len(), 11);
        assert_ne!(a, b);
    }
}
