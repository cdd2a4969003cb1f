use crate::order::OrderSubmission;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Order service failures, split so the submission recovery policy can tell
/// ambiguous transport losses apart from definitive rejections.
#[derive(Debug, Error)]
pub enum OrderServiceError {
    /// The request timed out at some hop; the backend may still have
    /// committed the work.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Generic network-layer failure before a well-formed response arrived.
    #[error("network failure: {0}")]
    Network(String),

    /// The server answered with an explicit rejection.
    #[error("server rejected request: {0}")]
    Rejected(String),

    /// The response arrived but could not be understood.
    #[error("unexpected response: {0}")]
    Malformed(String),
}

impl OrderServiceError {
    /// Whether this failure is the recoverable-ambiguous class: the request
    /// may have succeeded server-side with only the response lost.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            OrderServiceError::Timeout(_) | OrderServiceError::Network(_)
        )
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardValidationRequest {
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardValidationResponse {
    pub is_valid: bool,
    #[serde(default)]
    pub available_balance: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreationResult {
    pub order_number: String,
    pub total_amount: f64,
    pub creation_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreationError {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreationResponse {
    pub success: bool,
    #[serde(default)]
    pub result: Option<OrderCreationResult>,
    #[serde(default)]
    pub error: Option<OrderCreationError>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPageRequest {
    pub skip_count: u32,
    pub max_result_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorting: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub order_number: String,
    pub total_amount: f64,
    pub creation_time: DateTime<Utc>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPage {
    pub items: Vec<OrderRecord>,
    pub total_count: u64,
}

/// Remote order endpoints: card validation, order creation, order listing.
#[async_trait]
pub trait RemoteOrderService: Send + Sync {
    async fn validate_card(
        &self,
        request: &CardValidationRequest,
    ) -> Result<CardValidationResponse, OrderServiceError>;

    async fn create_order(
        &self,
        submission: &OrderSubmission,
    ) -> Result<OrderCreationResponse, OrderServiceError>;

    async fn get_all_orders(
        &self,
        request: &OrderPageRequest,
    ) -> Result<OrderPage, OrderServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_classification() {
        assert!(OrderServiceError::Timeout("gateway".into()).is_transient());
        assert!(OrderServiceError::Network("reset".into()).is_transient());
        assert!(!OrderServiceError::Rejected("out of stock".into()).is_transient());
        assert!(!OrderServiceError::Malformed("bad json".into()).is_transient());
    }

    #[test]
    fn creation_response_parses_with_missing_branches() {
        let success: OrderCreationResponse = serde_json::from_str(
            r#"{"success":true,"result":{"orderNumber":"ORD-9","totalAmount":26.59,"creationTime":"2026-08-01T10:00:00Z"}}"#,
        )
        .unwrap();
        assert!(success.success);
        assert_eq!(success.result.unwrap().order_number, "ORD-9");

        let failure: OrderCreationResponse =
            serde_json::from_str(r#"{"success":false,"error":{"message":"card declined"}}"#)
                .unwrap();
        assert!(!failure.success);
        assert_eq!(failure.error.unwrap().message, "card declined");
    }
}
