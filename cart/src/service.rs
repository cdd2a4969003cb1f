use crate::error::CartError;
use crate::model::{CartLine, CartRow};
use async_trait::async_trait;
use uuid::Uuid;

/// Remote cart resource, keyed by the logged-in user.
#[async_trait]
pub trait RemoteCartService: Send + Sync {
    /// Creates or increments a server-side line.
    async fn add_to_cart(
        &self,
        listing_id: Uuid,
        quantity: u32,
        user_id: Uuid,
    ) -> Result<CartRow, CartError>;

    async fn get_cart_items(&self, user_id: Uuid) -> Result<Vec<CartRow>, CartError>;

    async fn update_cart_item(&self, cart_line_id: Uuid, quantity: u32) -> Result<(), CartError>;

    async fn remove_from_cart(&self, cart_line_id: Uuid) -> Result<(), CartError>;

    async fn clear_cart(&self) -> Result<(), CartError>;
}

/// Current logged-in user, or none for guests. The cart manager re-reads
/// this on identity-change notifications to decide between resync and clear.
pub trait Identity: Send + Sync {
    fn current_user_id(&self) -> Option<Uuid>;
}

/// UI-side hooks fired when a line is added (toast, celebration animation).
/// Purely fire-and-forget; the cart never depends on their outcome.
pub trait CartNotifier: Send + Sync {
    fn line_added(&self, line: &CartLine);
}

/// Notifier that does nothing; used where no UI shell is attached.
#[derive(Debug, Default)]
pub struct NullNotifier;

impl CartNotifier for NullNotifier {
    fn line_added(&self, _line: &CartLine) {}
}
