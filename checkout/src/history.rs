use crate::service::{OrderPage, OrderPageRequest, OrderServiceError, RemoteOrderService};
use std::sync::Arc;

/// Paged listing over the backend's order history, newest first. Used by the
/// orders screen; errors surface to the caller rather than being swallowed.
pub struct OrderHistory {
    service: Arc<dyn RemoteOrderService>,
}

impl OrderHistory {
    pub fn new(service: Arc<dyn RemoteOrderService>) -> Self {
        Self { service }
    }

    pub async fn fetch_page(
        &self,
        skip_count: u32,
        max_result_count: u32,
    ) -> Result<OrderPage, OrderServiceError> {
        self.service
            .get_all_orders(&OrderPageRequest {
                skip_count,
                max_result_count,
                sorting: Some("creationTime desc".to_string()),
            })
            .await
    }
}
