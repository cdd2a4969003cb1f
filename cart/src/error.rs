use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartError {
    /// No usable product/listing identifier could be resolved, or it
    /// resolved to the nil sentinel UUID.
    #[error("no usable product listing identifier")]
    InvalidListing,

    /// The remote cart service call failed (network or server).
    #[error("cart service failure: {0}")]
    Remote(String),
}

impl From<reqwest::Error> for CartError {
    fn from(err: reqwest::Error) -> Self {
        CartError::Remote(err.to_string())
    }
}
