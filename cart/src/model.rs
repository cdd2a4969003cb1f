use crate::error::CartError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One distinct purchasable selection in the cart.
///
/// At most one line exists for a given `(listing_id, size, color)` triple;
/// adding the same triple again merges into the existing line's quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Store-specific product listing id; the join key with the backend.
    pub listing_id: Uuid,
    /// Backend-assigned id for this cart row; absent until the line has
    /// been persisted at least once.
    pub cart_line_id: Option<Uuid>,
    pub title: String,
    pub image_url: String,
    pub store_name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub size: Option<String>,
    pub color: Option<String>,
    pub discount_percent: Option<f64>,
}

impl CartLine {
    /// Whether this line holds the given identity triple.
    pub fn matches(&self, listing_id: Uuid, size: Option<&str>, color: Option<&str>) -> bool {
        self.listing_id == listing_id
            && self.size.as_deref() == size
            && self.color.as_deref() == color
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

/// Partial update applied to an existing cart line.
#[derive(Debug, Clone, Default)]
pub struct LineChanges {
    pub quantity: Option<u32>,
    pub size: Option<String>,
    pub color: Option<String>,
}

/// Backend cart row shape as returned by `get_cart_items`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartRow {
    pub id: Uuid,
    pub store_product_id: Uuid,
    pub product_title: String,
    #[serde(default)]
    pub product_image: String,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    pub quantity: u32,
    #[serde(default)]
    pub store_name: String,
    #[serde(default)]
    pub reseller_discount_percentage: Option<f64>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl From<CartRow> for CartLine {
    fn from(row: CartRow) -> Self {
        CartLine {
            listing_id: row.store_product_id,
            cart_line_id: Some(row.id),
            title: row.product_title,
            image_url: row.product_image,
            store_name: row.store_name,
            unit_price: row.price,
            quantity: row.quantity,
            size: row.size,
            color: row.color,
            discount_percent: row.reseller_discount_percentage,
        }
    }
}

/// Upstream product object as constructed by the various screens.
///
/// Depending on which screen built it, the listing identifier arrives in a
/// different field, so resolution tries them in a fixed order.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductListing {
    #[serde(default)]
    pub store_product_id: Option<Uuid>,
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub product_id: Option<Uuid>,
    #[serde(default)]
    pub store: Option<StoreRef>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub store_name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub discount_percent: Option<f64>,
}

/// Nested store reference carried by some product shapes.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StoreRef {
    #[serde(default)]
    pub store_product_id: Option<Uuid>,
}

impl ProductListing {
    /// Resolve a usable listing identifier, trying in order: the explicit
    /// listing id, the generic id, the product id, then the nested store
    /// reference. Resolution takes the first candidate that is present;
    /// if that value is the nil sentinel the whole add fails rather than
    /// falling through to a later field.
    pub fn resolve_listing_id(&self) -> Result<Uuid, CartError> {
        let candidates = [
            self.store_product_id,
            self.id,
            self.product_id,
            self.store.as_ref().and_then(|s| s.store_product_id),
        ];
        let resolved = candidates
            .into_iter()
            .flatten()
            .next()
            .ok_or(CartError::InvalidListing)?;
        if resolved.is_nil() {
            return Err(CartError::InvalidListing);
        }
        Ok(resolved)
    }
}
