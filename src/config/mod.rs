use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::Pricing;

/// Application configuration, loaded from the environment
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    #[serde(default = "default_delivery_fee")]
    pub delivery_fee: Decimal,
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default)]
    pub json_logging: bool,
}

impl AppConfig {
    /// Load configuration from `LAUNDRY_`-prefixed environment variables,
    /// e.g. `LAUNDRY_PRICING__TAX_RATE=0.16`
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("LAUNDRY").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            delivery_fee: default_delivery_fee(),
            tax_rate: default_tax_rate(),
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            json_logging: false,
        }
    }
}

impl From<PricingConfig> for Pricing {
    fn from(config: PricingConfig) -> Self {
        Self {
            delivery_fee: config.delivery_fee,
            tax_rate: config.tax_rate,
        }
    }
}

fn default_delivery_fee() -> Decimal {
    Decimal::new(300, 0)
}

fn default_tax_rate() -> Decimal {
    Decimal::new(16, 2)
}

fn default_service_name() -> String {
    "laundry-cart".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_match_observed_constants() {
        let pricing = PricingConfig::default();
        assert_eq!(pricing.delivery_fee, dec!(300));
        assert_eq!(pricing.tax_rate, dec!(0.16));
    }

    #[test]
    fn test_pricing_conversion() {
        let pricing: Pricing = PricingConfig::default().into();
        assert_eq!(pricing, Pricing::default());
    }

    #[test]
    fn test_from_env_with_no_vars_uses_defaults() {
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.pricing.delivery_fee, dec!(300));
        assert_eq!(config.telemetry.service_name, "laundry-cart");
        assert!(!config.telemetry.json_logging);
    }
}
