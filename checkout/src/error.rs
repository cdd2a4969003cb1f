use thiserror::Error;

/// User-visible checkout failures. None of these crash the workflow; they
/// leave the user on the current stage with an actionable message.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// A required field is missing or malformed. Local and synchronous;
    /// produced fail-fast for the first offending field.
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// The selected payment method is not enabled for progression.
    #[error("payment method '{0}' is not available yet")]
    MethodDisabled(String),

    /// The server rejected the card or balance check. Retryable by the user.
    #[error("card verification failed: {0}")]
    CardVerification(String),

    /// Advancing past the payment stage requires a verified card.
    #[error("card must be verified before continuing")]
    CardNotVerified,

    /// Well-formed rejection from the backend (or a generic fallback when
    /// the response carried no message).
    #[error("order was rejected: {0}")]
    Rejected(String),

    /// The requested action is not valid at the current stage.
    #[error("action not available at the current checkout stage")]
    WrongStage,
}

impl CheckoutError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        CheckoutError::Validation {
            field,
            message: message.into(),
        }
    }
}
