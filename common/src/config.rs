use serde::Deserialize;
use std::collections::HashMap;
use std::{error::Error, fs};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CommonConfig {
    pub project_name: String,
    pub api_base_url: String,
    #[serde(default)]
    pub log_level: String,
}

/// Policy knobs for the checkout workflow. Every value the product team may
/// revisit (the ambiguous-failure grace window, the per-method progression
/// gates, the fee/tax rates) lives here rather than in code.
#[derive(Debug, Deserialize, Clone)]
pub struct CheckoutConfig {
    #[serde(default = "default_shipping_fee")]
    pub shipping_fee: f64,
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
    /// How long to wait after an ambiguous order-submission failure before
    /// optimistically confirming the order.
    #[serde(default = "default_grace_period_ms")]
    pub submission_grace_period_ms: u64,
    /// Which payment methods may proceed past the payment stage.
    #[serde(default = "default_payment_methods")]
    pub payment_methods: HashMap<String, bool>,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            shipping_fee: default_shipping_fee(),
            tax_rate: default_tax_rate(),
            submission_grace_period_ms: default_grace_period_ms(),
            payment_methods: default_payment_methods(),
        }
    }
}

impl CheckoutConfig {
    pub fn method_enabled(&self, method_key: &str) -> bool {
        self.payment_methods.get(method_key).copied().unwrap_or(false)
    }
}

fn default_shipping_fee() -> f64 {
    4.99
}

fn default_tax_rate() -> f64 {
    0.08
}

fn default_grace_period_ms() -> u64 {
    2000
}

fn default_payment_methods() -> HashMap<String, bool> {
    let mut methods = HashMap::new();
    methods.insert("easy_finora".to_string(), true);
    methods.insert("paypal".to_string(), false);
    methods.insert("apple_pay".to_string(), false);
    methods.insert("google_pay".to_string(), false);
    methods.insert("credit_card".to_string(), false);
    methods
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    pub common: CommonConfig,
    #[serde(default)]
    pub checkout: CheckoutConfig,
}

impl Config {
    pub fn load(config_path: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let contents = fs::read_to_string(config_path)?;
        let config = serde_yml::from_str(&contents)?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkout_defaults_gate_everything_but_finora() {
        let config = CheckoutConfig::default();
        assert!(config.method_enabled("easy_finora"));
        assert!(!config.method_enabled("paypal"));
        assert!(!config.method_enabled("credit_card"));
        assert!(!config.method_enabled("cash_on_delivery"));
        assert_eq!(config.shipping_fee, 4.99);
        assert_eq!(config.tax_rate, 0.08);
        assert_eq!(config.submission_grace_period_ms, 2000);
    }

    #[test]
    fn loads_partial_yaml_with_defaults() {
        let yaml = r#"
common:
  project_name: world-cart
  api_base_url: "http://localhost:8080"
checkout:
  submission_grace_period_ms: 0
"#;
        let config: Config = serde_yml::from_str(yaml).unwrap();
        assert_eq!(config.common.project_name, "world-cart");
        assert_eq!(config.checkout.submission_grace_period_ms, 0);
        assert_eq!(config.checkout.shipping_fee, 4.99);
    }
}
