use crate::error::CartError;
use crate::model::CartRow;
use crate::service::RemoteCartService;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddToCartPayload {
    store_product_id: Uuid,
    quantity: u32,
    user_id: Uuid,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateCartItemPayload {
    cart_item_id: Uuid,
    quantity: u32,
}

#[derive(Debug, Deserialize)]
struct CartItemsEnvelope {
    items: Vec<CartRow>,
}

/// Reqwest-backed implementation of the remote cart endpoints.
pub struct HttpCartService {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpCartService {
    pub fn new(base_url: &str) -> Result<Self, CartError> {
        let base_url = Url::parse(base_url).map_err(|e| CartError::Remote(e.to_string()))?;
        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, CartError> {
        self.base_url
            .join(path)
            .map_err(|e| CartError::Remote(e.to_string()))
    }
}

#[async_trait]
impl RemoteCartService for HttpCartService {
    async fn add_to_cart(
        &self,
        listing_id: Uuid,
        quantity: u32,
        user_id: Uuid,
    ) -> Result<CartRow, CartError> {
        debug!("POST cart/add listing={} qty={}", listing_id, quantity);
        let response = self
            .client
            .post(self.endpoint("api/cart/add")?)
            .json(&AddToCartPayload {
                store_product_id: listing_id,
                quantity,
                user_id,
            })
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<CartRow>().await?)
    }

    async fn get_cart_items(&self, user_id: Uuid) -> Result<Vec<CartRow>, CartError> {
        debug!("GET cart/items user={}", user_id);
        let mut url = self.endpoint("api/cart/items")?;
        url.query_pairs_mut()
            .append_pair("userId", &user_id.to_string());

        let response = self.client.get(url).send().await?.error_for_status()?;
        let envelope = response.json::<CartItemsEnvelope>().await?;
        Ok(envelope.items)
    }

    async fn update_cart_item(&self, cart_line_id: Uuid, quantity: u32) -> Result<(), CartError> {
        debug!("POST cart/update line={} qty={}", cart_line_id, quantity);
        self.client
            .post(self.endpoint("api/cart/update")?)
            .json(&UpdateCartItemPayload {
                cart_item_id: cart_line_id,
                quantity,
            })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn remove_from_cart(&self, cart_line_id: Uuid) -> Result<(), CartError> {
        debug!("DELETE cart/remove line={}", cart_line_id);
        self.client
            .delete(self.endpoint(&format!("api/cart/remove/{}", cart_line_id))?)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn clear_cart(&self) -> Result<(), CartError> {
        debug!("POST cart/clear");
        self.client
            .post(self.endpoint("api/cart/clear")?)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
