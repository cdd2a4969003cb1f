/// Shared Test Helpers for Cross-Crate Use
///
/// Centralized test utilities used by both the `cart` and `checkout` crates
/// to avoid code duplication.
use crate::config::{CheckoutConfig, CommonConfig, Config};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

// Global counter for truly unique test identifiers across parallel tests
static GLOBAL_TEST_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Generate globally unique test identifiers that won't conflict across parallel tests
///
/// # Arguments
/// * `prefix` - A string prefix to identify the test type (e.g., "ORDER", "LISTING")
///
/// # Returns
/// A unique string in the format: "{prefix}-{timestamp}-{counter}"
pub fn generate_unique_id(prefix: &str) -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis();
    let counter = GLOBAL_TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{}-{}-{}", prefix, timestamp, counter)
}

/// Configuration suitable for unit tests: local endpoints and a zero grace
/// window so ambiguous-failure recovery does not slow the suite down.
pub fn test_config() -> Config {
    Config {
        common: CommonConfig {
            project_name: "world-cart-test".to_string(),
            api_base_url: "http://localhost:8080".to_string(),
            log_level: "debug".to_string(),
        },
        checkout: CheckoutConfig {
            submission_grace_period_ms: 0,
            ..CheckoutConfig::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_ids_do_not_collide() {
        let a = generate_unique_id("T");
        let b = generate_unique_id("T");
        assert_ne!(a, b);
    }

    #[test]
    fn test_config_has_zero_grace_window() {
        let config = test_config();
        assert_eq!(config.checkout.submission_grace_period_ms, 0);
        assert!(config.checkout.method_enabled("easy_finora"));
    }
}
