use crate::{
    error::CheckoutError,
    order::{fallback_order_number, OrderConfirmation, OrderSubmission},
    payment::{CardDetails, FinoraVerification, PaymentMethod},
    service::{CardValidationRequest, RemoteOrderService},
    shipping::ShippingAddress,
    totals::Totals,
};
use cart::manager::CartManager;
use common::config::CheckoutConfig;
use std::sync::Arc;
use std::time::Duration;
#[cfg(not(test))]
use tracing::{debug, info, warn};
#[cfg(test)]
use {println as debug, println as info, println as warn};

/// The three checkout stages, in order. Backward transitions are always
/// allowed and never clear already-entered data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Shipping,
    Payment,
    Review,
}

const GENERIC_VERIFY_FAILURE: &str = "Unable to verify your card right now. Please try again.";
const GENERIC_ORDER_FAILURE: &str = "Something went wrong placing your order. Please try again.";

/// Drives the user through Shipping -> Payment -> Review, gates progression
/// on per-stage validation, and submits the order with a recovery strategy
/// for ambiguous transport failures.
pub struct CheckoutWorkflow {
    cart: Arc<CartManager>,
    orders: Arc<dyn RemoteOrderService>,
    config: CheckoutConfig,
    stage: Stage,
    shipping: ShippingAddress,
    method: PaymentMethod,
    card: CardDetails,
    verification: FinoraVerification,
}

impl CheckoutWorkflow {
    pub fn new(
        cart: Arc<CartManager>,
        orders: Arc<dyn RemoteOrderService>,
        config: CheckoutConfig,
    ) -> Self {
        info!("Starting checkout workflow");
        Self {
            cart,
            orders,
            config,
            stage: Stage::Shipping,
            shipping: ShippingAddress::default(),
            method: PaymentMethod::EasyFinora,
            card: CardDetails::default(),
            verification: FinoraVerification::Unverified,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn shipping(&self) -> &ShippingAddress {
        &self.shipping
    }

    /// Mutable access for form edits; data persists across stage changes.
    pub fn shipping_mut(&mut self) -> &mut ShippingAddress {
        &mut self.shipping
    }

    pub fn selected_method(&self) -> PaymentMethod {
        self.method
    }

    pub fn verification(&self) -> &FinoraVerification {
        &self.verification
    }

    /// Checkout totals over the current cart snapshot (tax applies).
    pub fn totals(&self) -> Totals {
        Totals::checkout(self.cart.total(), &self.config)
    }

    /// Validates the shipping form and advances to the payment stage.
    pub fn submit_shipping(&mut self) -> Result<(), CheckoutError> {
        if self.stage != Stage::Shipping {
            return Err(CheckoutError::WrongStage);
        }
        self.shipping.validate()?;
        debug!("Shipping details accepted, moving to payment");
        self.stage = Stage::Payment;
        Ok(())
    }

    /// Returns to an earlier stage. Entered data is kept.
    pub fn go_back(&mut self, target: Stage) -> Result<(), CheckoutError> {
        if target >= self.stage {
            return Err(CheckoutError::WrongStage);
        }
        debug!("Going back to {:?}", target);
        self.stage = target;
        Ok(())
    }

    /// Selects the active payment method. Switching methods discards any
    /// verification result obtained for the previous one.
    pub fn select_method(&mut self, method: PaymentMethod) {
        if method != self.method {
            self.method = method;
            self.verification = FinoraVerification::Unverified;
        }
    }

    pub fn set_card(&mut self, number: &str, expiry: &str, cvv: &str) {
        self.card = CardDetails {
            number: number.to_string(),
            expiry: expiry.to_string(),
            cvv: cvv.to_string(),
        };
        self.verification = FinoraVerification::Unverified;
    }

    /// Runs the Finora card pre-verification against the current checkout
    /// total. Local format failures never reach the network; server and
    /// network failures both record a `Failed` result and keep the user on
    /// the payment stage. Returns the available balance when verified.
    pub async fn verify_card(&mut self) -> Result<f64, CheckoutError> {
        if !self.method.requires_card() {
            return Err(CheckoutError::MethodDisabled(self.method.key().to_string()));
        }
        self.card.validate()?;

        let request = CardValidationRequest {
            card_number: self.card.number.clone(),
            expiry_date: self.card.expiry.clone(),
            cvv: self.card.cvv.clone(),
            amount: self.totals().total,
        };

        match self.orders.validate_card(&request).await {
            Ok(response) if response.is_valid => {
                let balance = response.available_balance.unwrap_or(0.0);
                info!("Card verified, available balance {}", balance);
                self.verification = FinoraVerification::Verified {
                    available_balance: balance,
                };
                Ok(balance)
            }
            Ok(response) => {
                let reason = response
                    .message
                    .unwrap_or_else(|| GENERIC_VERIFY_FAILURE.to_string());
                debug!("Card rejected by server: {}", reason);
                self.verification = FinoraVerification::Failed {
                    reason: reason.clone(),
                };
                Err(CheckoutError::CardVerification(reason))
            }
            Err(e) => {
                warn!("Card verification call failed: {}", e);
                let reason = GENERIC_VERIFY_FAILURE.to_string();
                self.verification = FinoraVerification::Failed {
                    reason: reason.clone(),
                };
                Err(CheckoutError::CardVerification(reason))
            }
        }
    }

    /// Advances from payment to review. Blocked unless the selected method
    /// is enabled by configuration and, for card-based methods, the card has
    /// been verified.
    pub fn continue_to_review(&mut self) -> Result<(), CheckoutError> {
        if self.stage != Stage::Payment {
            return Err(CheckoutError::WrongStage);
        }
        if !self.config.method_enabled(self.method.key()) {
            return Err(CheckoutError::MethodDisabled(self.method.key().to_string()));
        }
        if self.method.requires_card() && !self.verification.is_verified() {
            return Err(CheckoutError::CardNotVerified);
        }
        debug!("Payment accepted, moving to review");
        self.stage = Stage::Review;
        Ok(())
    }

    /// Submits the order. Call only after the user has explicitly confirmed
    /// on the review screen; this fires the network request immediately.
    ///
    /// A timeout or network-layer failure is treated as a likely success
    /// with a lost response: after the configured grace window (letting a
    /// backend transaction that may already be committing finish) the cart
    /// is cleared and a confirmation is returned with `is_delayed: true` and
    /// a locally generated order number. Definitive rejections surface the
    /// server's message and leave the cart and stage untouched.
    pub async fn confirm_order(&mut self) -> Result<OrderConfirmation, CheckoutError> {
        if self.stage != Stage::Review {
            return Err(CheckoutError::WrongStage);
        }

        let lines = self.cart.snapshot();
        let totals = self.totals();
        let card = self.method.requires_card().then_some(&self.card);
        let submission =
            OrderSubmission::assemble(&lines, &self.shipping, self.method, card, &totals);

        match self.orders.create_order(&submission).await {
            Ok(response) if response.success => {
                let (order_number, total_amount) = match response.result {
                    Some(result) if !result.order_number.is_empty() => {
                        (result.order_number, result.total_amount)
                    }
                    _ => (fallback_order_number(), totals.total),
                };
                info!("Order {} placed", order_number);
                self.cart.clear().await;
                Ok(OrderConfirmation {
                    order_number,
                    total_amount,
                    is_delayed: false,
                })
            }
            Ok(response) => {
                let message = response
                    .error
                    .map(|e| e.message)
                    .unwrap_or_else(|| GENERIC_ORDER_FAILURE.to_string());
                warn!("Order creation rejected: {}", message);
                Err(CheckoutError::Rejected(message))
            }
            Err(e) if e.is_transient() => {
                // Likely a load-balancer timeout the backend itself survived;
                // optimistically confirm rather than failing a placed order.
                info!(
                    "Ambiguous order failure ({}), confirming after {}ms grace window",
                    e, self.config.submission_grace_period_ms
                );
                tokio::time::sleep(Duration::from_millis(self.config.submission_grace_period_ms))
                    .await;
                self.cart.clear().await;
                Ok(OrderConfirmation {
                    order_number: fallback_order_number(),
                    total_amount: totals.total,
                    is_delayed: true,
                })
            }
            Err(e) => {
                warn!("Order creation failed: {}", e);
                let message = match e {
                    crate::service::OrderServiceError::Rejected(message) => message,
                    _ => GENERIC_ORDER_FAILURE.to_string(),
                };
                Err(CheckoutError::Rejected(message))
            }
        }
    }
}
