use crate::{
    error::CartError,
    model::{CartLine, LineChanges, ProductListing},
    service::{CartNotifier, Identity, RemoteCartService},
};
use std::sync::{Arc, Mutex, MutexGuard};
#[cfg(not(test))]
use tracing::{debug, info, warn};
use uuid::Uuid;
#[cfg(test)]
use {println as debug, println as info, println as warn};

#[derive(Debug, Default)]
struct CartState {
    lines: Vec<CartLine>,
    is_syncing: bool,
    last_user: Option<Uuid>,
}

/// Single source of truth for the current user's cart.
///
/// Mutations apply an optimistic local update first, then call the remote
/// service, then resync wholesale from the backend. The optimistic update is
/// a latency hide, not a source of truth; the resync after every mutating
/// call is what guarantees convergence. The state lock is never held across
/// an await, so each local mutation is indivisible relative to the executor.
pub struct CartManager {
    remote: Arc<dyn RemoteCartService>,
    identity: Arc<dyn Identity>,
    notifier: Arc<dyn CartNotifier>,
    state: Mutex<CartState>,
}

impl CartManager {
    pub fn new(
        remote: Arc<dyn RemoteCartService>,
        identity: Arc<dyn Identity>,
        notifier: Arc<dyn CartNotifier>,
    ) -> Self {
        info!("Initializing new CartManager");
        Self {
            remote,
            identity,
            notifier,
            state: Mutex::new(CartState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, CartState> {
        self.state.lock().expect("cart state lock poisoned")
    }

    /// Read-only snapshot of the current cart lines.
    pub fn snapshot(&self) -> Vec<CartLine> {
        self.state().lines.clone()
    }

    pub fn is_syncing(&self) -> bool {
        self.state().is_syncing
    }

    /// Sum of `unit_price * quantity` over all lines. No fees or tax.
    pub fn total(&self) -> f64 {
        self.state().lines.iter().map(CartLine::line_total).sum()
    }

    /// Number of distinct lines in the cart.
    pub fn line_count(&self) -> usize {
        self.state().lines.len()
    }

    /// Total number of units across all lines (the badge count).
    pub fn item_count(&self) -> u32 {
        self.state().lines.iter().map(|l| l.quantity).sum()
    }

    /// Re-reads the identity collaborator after a login/logout notification.
    /// Login triggers a fetch; logout clears locally with no network call.
    pub async fn on_identity_changed(&self) {
        let current = self.identity.current_user_id();
        let previous = self.state().last_user;
        if current == previous {
            return;
        }
        self.state().last_user = current;
        match current {
            Some(user) => {
                debug!("Identity changed to user {}, resyncing cart", user);
                self.resync().await;
            }
            None => {
                debug!("User logged out, clearing local cart");
                self.state().lines.clear();
            }
        }
    }

    /// Fetches the authoritative cart and replaces local state wholesale.
    ///
    /// Failures are logged and swallowed; the last known lines stand until
    /// the next successful resync (stale-but-available over empty).
    pub async fn resync(&self) {
        let Some(user_id) = self.identity.current_user_id() else {
            debug!("No logged-in user, skipping cart resync");
            return;
        };

        self.state().is_syncing = true;
        let result = self.remote.get_cart_items(user_id).await;
        let mut state = self.state();
        state.is_syncing = false;
        match result {
            Ok(rows) => {
                state.lines = rows.into_iter().map(CartLine::from).collect();
                debug!("Cart resynced: {} lines", state.lines.len());
            }
            Err(e) => {
                warn!("Cart resync failed, keeping stale lines: {}", e);
            }
        }
    }

    /// Adds a listing to the cart.
    ///
    /// The local merge-or-append happens synchronously before the remote
    /// call; the mandatory resync afterwards reconciles whatever the remote
    /// outcome was. Remote failures propagate to the caller (the whole point
    /// of this operation is the network call), without an explicit rollback:
    /// the resync already corrected the optimistic state.
    pub async fn add_line(
        &self,
        listing: &ProductListing,
        quantity: u32,
        size: Option<String>,
        color: Option<String>,
    ) -> Result<(), CartError> {
        let listing_id = listing.resolve_listing_id()?;

        let line = {
            let mut state = self.state();
            if let Some(existing) = state
                .lines
                .iter_mut()
                .find(|l| l.matches(listing_id, size.as_deref(), color.as_deref()))
            {
                existing.quantity += quantity;
                existing.clone()
            } else {
                let line = CartLine {
                    listing_id,
                    cart_line_id: None,
                    title: listing.title.clone(),
                    image_url: listing.image_url.clone(),
                    store_name: listing.store_name.clone(),
                    unit_price: listing.price,
                    quantity,
                    size: size.clone(),
                    color: color.clone(),
                    discount_percent: listing.discount_percent,
                };
                state.lines.push(line.clone());
                line
            }
        };
        self.notifier.line_added(&line);

        if let Some(user_id) = self.identity.current_user_id() {
            let outcome = self.remote.add_to_cart(listing_id, quantity, user_id).await;
            self.resync().await;
            if let Err(e) = outcome {
                warn!("Remote add-to-cart failed for {}: {}", listing_id, e);
                return Err(e);
            }
        }
        Ok(())
    }

    /// Removes the matching line. The remote delete runs first when the line
    /// has a backend id; local removal proceeds regardless of its outcome so
    /// a transient error cannot make a line unremovable.
    pub async fn remove_line(&self, listing_id: Uuid, size: Option<&str>, color: Option<&str>) {
        let cart_line_id = {
            let state = self.state();
            match state
                .lines
                .iter()
                .find(|l| l.matches(listing_id, size, color))
            {
                Some(line) => line.cart_line_id,
                None => {
                    debug!("remove_line: no local line for listing {}", listing_id);
                    return;
                }
            }
        };

        let user_id = self.identity.current_user_id();
        if let (Some(id), Some(_)) = (cart_line_id, user_id) {
            if let Err(e) = self.remote.remove_from_cart(id).await {
                warn!("Remote remove failed for cart line {}: {}", id, e);
            }
        }

        self.state()
            .lines
            .retain(|l| !l.matches(listing_id, size, color));

        if user_id.is_some() {
            self.resync().await;
        }
    }

    /// Applies `changes` to the matching line. A quantity change on a
    /// persisted line is pushed to the backend first; the local merge then
    /// happens unconditionally.
    pub async fn update_line(
        &self,
        listing_id: Uuid,
        size: Option<&str>,
        color: Option<&str>,
        changes: LineChanges,
    ) {
        let cart_line_id = {
            let state = self.state();
            match state
                .lines
                .iter()
                .find(|l| l.matches(listing_id, size, color))
            {
                Some(line) => line.cart_line_id,
                None => {
                    debug!("update_line: no local line for listing {}", listing_id);
                    return;
                }
            }
        };

        let user_id = self.identity.current_user_id();
        if let (Some(quantity), Some(id), Some(_)) = (changes.quantity, cart_line_id, user_id) {
            if let Err(e) = self.remote.update_cart_item(id, quantity).await {
                warn!("Remote update failed for cart line {}: {}", id, e);
            }
        }

        {
            let mut state = self.state();
            if let Some(line) = state
                .lines
                .iter_mut()
                .find(|l| l.matches(listing_id, size, color))
            {
                if let Some(quantity) = changes.quantity {
                    line.quantity = quantity;
                }
                if let Some(new_size) = changes.size {
                    line.size = Some(new_size);
                }
                if let Some(new_color) = changes.color {
                    line.color = Some(new_color);
                }
            }
        }

        if user_id.is_some() {
            self.resync().await;
        }
    }

    /// Empties the cart. The remote clear only runs for a logged-in user;
    /// local state is emptied regardless of the remote outcome.
    pub async fn clear(&self) {
        if self.identity.current_user_id().is_some() {
            if let Err(e) = self.remote.clear_cart().await {
                warn!("Remote cart clear failed: {}", e);
            }
        }
        self.state().lines.clear();
    }
}
