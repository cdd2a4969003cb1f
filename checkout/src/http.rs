use crate::order::OrderSubmission;
use crate::service::{
    CardValidationRequest, CardValidationResponse, OrderCreationResponse, OrderPage,
    OrderPageRequest, OrderServiceError, RemoteOrderService,
};
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;
use url::Url;

/// Gateway/proxy statuses treated as "the backend may have survived this".
const TRANSIENT_STATUSES: [StatusCode; 4] = [
    StatusCode::REQUEST_TIMEOUT,
    StatusCode::BAD_GATEWAY,
    StatusCode::SERVICE_UNAVAILABLE,
    StatusCode::GATEWAY_TIMEOUT,
];

/// Reqwest-backed implementation of the remote order endpoints.
pub struct HttpOrderService {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpOrderService {
    pub fn new(base_url: &str) -> Result<Self, OrderServiceError> {
        let base_url =
            Url::parse(base_url).map_err(|e| OrderServiceError::Malformed(e.to_string()))?;
        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, OrderServiceError> {
        self.base_url
            .join(path)
            .map_err(|e| OrderServiceError::Malformed(e.to_string()))
    }

    fn classify_transport(err: reqwest::Error) -> OrderServiceError {
        if err.is_timeout() {
            OrderServiceError::Timeout(err.to_string())
        } else {
            OrderServiceError::Network(err.to_string())
        }
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, OrderServiceError> {
        let status = response.status();
        if TRANSIENT_STATUSES.contains(&status) {
            return Err(OrderServiceError::Timeout(format!(
                "gateway returned {}",
                status
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OrderServiceError::Rejected(if body.is_empty() {
                format!("server returned {}", status)
            } else {
                body
            }));
        }
        Ok(response)
    }
}

#[async_trait]
impl RemoteOrderService for HttpOrderService {
    async fn validate_card(
        &self,
        request: &CardValidationRequest,
    ) -> Result<CardValidationResponse, OrderServiceError> {
        debug!("POST orders/validate-card amount={}", request.amount);
        let response = self
            .client
            .post(self.endpoint("api/orders/validate-card")?)
            .json(request)
            .send()
            .await
            .map_err(Self::classify_transport)?;
        let response = Self::check_status(response).await?;
        response
            .json::<CardValidationResponse>()
            .await
            .map_err(|e| OrderServiceError::Malformed(e.to_string()))
    }

    async fn create_order(
        &self,
        submission: &OrderSubmission,
    ) -> Result<OrderCreationResponse, OrderServiceError> {
        debug!(
            "POST orders/create items={} total={}",
            submission.items.len(),
            submission.total_amount
        );
        let response = self
            .client
            .post(self.endpoint("api/orders/create")?)
            .json(submission)
            .send()
            .await
            .map_err(Self::classify_transport)?;
        let response = Self::check_status(response).await?;
        response
            .json::<OrderCreationResponse>()
            .await
            .map_err(|e| OrderServiceError::Malformed(e.to_string()))
    }

    async fn get_all_orders(
        &self,
        request: &OrderPageRequest,
    ) -> Result<OrderPage, OrderServiceError> {
        debug!(
            "POST orders/list skip={} max={}",
            request.skip_count, request.max_result_count
        );
        let response = self
            .client
            .post(self.endpoint("api/orders/list")?)
            .json(request)
            .send()
            .await
            .map_err(Self::classify_transport)?;
        let response = Self::check_status(response).await?;
        response
            .json::<OrderPage>()
            .await
            .map_err(|e| OrderServiceError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_against_base() {
        let service = HttpOrderService::new("https://api.world-cart.example/").unwrap();
        let url = service.endpoint("api/orders/create").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.world-cart.example/api/orders/create"
        );
    }

    #[test]
    fn gateway_statuses_are_listed_as_transient() {
        assert!(TRANSIENT_STATUSES.contains(&StatusCode::GATEWAY_TIMEOUT));
        assert!(TRANSIENT_STATUSES.contains(&StatusCode::BAD_GATEWAY));
        assert!(!TRANSIENT_STATUSES.contains(&StatusCode::BAD_REQUEST));
    }
}
