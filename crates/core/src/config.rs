//! Configuration types

use serde::{Deserialize, Serialize};

use crate::errors::PricingConfigError;

pub const DEFAULT_LOCATION: &str = "Delhi";
pub const DEFAULT_CURRENCY: &str = "INR";
pub const DEFAULT_UNIT: &str = "kg";
pub const DEFAULT_PRICE: f64 = 30.0;

/// Supported market locations, in display order
pub const KNOWN_LOCATIONS: [&str; 6] = [
    "Delhi",
    "Mumbai",
    "Bangalore",
    "Chennai",
    "Kolkata",
    "Hyderabad",
];

/// Fallback policy applied by the resolver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub default_location: String,
    pub currency: String,
    pub fallback_price: f64,
    pub fallback_unit: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_location: DEFAULT_LOCATION.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            fallback_price: DEFAULT_PRICE,
            fallback_unit: DEFAULT_UNIT.to_string(),
        }
    }
}

impl PricingConfig {
    /// Substitute the default location for a missing or empty one
    pub fn effective_location<'a>(&'a self, location: Option<&'a str>) -> &'a str {
        match location {
            Some(loc) if !loc.is_empty() => loc,
            _ => &self.default_location,
        }
    }

    /// Reject settings that would break the fallback rules: an empty
    /// default location, or a negative or NaN fallback price.
    pub fn validate(&self) -> Result<(), PricingConfigError> {
        if self.default_location.is_empty() {
            return Err(PricingConfigError::EmptyDefaultLocation);
        }
        if self.fallback_price < 0.0 || self.fallback_price.is_nan() {
            return Err(PricingConfigError::InvalidFallbackPrice(self.fallback_price));
        }
        Ok(())
    }

    /// The default location must be one of the advertised locations
    pub fn validate_locations(&self, locations: &[String]) -> Result<(), PricingConfigError> {
        if locations.iter().any(|loc| *loc == self.default_location) {
            Ok(())
        } else {
            Err(PricingConfigError::UnknownDefaultLocation {
                location: self.default_location.clone(),
            })
        }
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 9000,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Complete service configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub pricing: PricingConfig,
}

impl AppConfig {
    /// Layered load: optional `config/default` and `config/local` files,
    /// then `VEGPRICE__*` environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let source = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("VEGPRICE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Self::from_source(source)
    }

    /// Deserialize and validate an already-built source
    pub fn from_source(source: config::Config) -> Result<Self, config::ConfigError> {
        let config: Self = source.try_deserialize()?;
        config
            .pricing
            .validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_defaults() {
        let config = PricingConfig::default();
        assert_eq!(config.default_location, "Delhi");
        assert_eq!(config.currency, "INR");
        assert_eq!(config.fallback_price, 30.0);
        assert_eq!(config.fallback_unit, "kg");
    }

    #[test]
    fn test_effective_location() {
        let config = PricingConfig::default();
        assert_eq!(config.effective_location(None), "Delhi");
        assert_eq!(config.effective_location(Some("")), "Delhi");
        assert_eq!(config.effective_location(Some("Mumbai")), "Mumbai");
        // No trimming or case folding
        assert_eq!(config.effective_location(Some(" delhi")), " delhi");
    }

    #[test]
    fn test_server_address() {
        let config = ServerConfig::default();
        assert_eq!(config.address(), "0.0.0.0:9000");
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let config: AppConfig = config::Config::builder()
            .set_override("server.port", 8081)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.pricing, PricingConfig::default());
    }

    #[test]
    fn test_validate_defaults() {
        assert!(PricingConfig::default().validate().is_ok());
        assert!(AppConfig::default().pricing.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_default_location() {
        let config = PricingConfig {
            default_location: String::new(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(PricingConfigError::EmptyDefaultLocation));
    }

    #[test]
    fn test_validate_rejects_bad_fallback_price() {
        let negative = PricingConfig {
            fallback_price: -5.0,
            ..Default::default()
        };
        assert_eq!(
            negative.validate(),
            Err(PricingConfigError::InvalidFallbackPrice(-5.0))
        );

        let nan = PricingConfig {
            fallback_price: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            nan.validate(),
            Err(PricingConfigError::InvalidFallbackPrice(p)) if p.is_nan()
        ));

        let free = PricingConfig {
            fallback_price: 0.0,
            ..Default::default()
        };
        assert!(free.validate().is_ok());
    }

    #[test]
    fn test_validate_locations() {
        let config = PricingConfig::default();
        let known: Vec<String> = KNOWN_LOCATIONS.iter().map(|l| l.to_string()).collect();
        assert!(config.validate_locations(&known).is_ok());

        let err = config
            .validate_locations(&["Pune".to_string()])
            .unwrap_err();
        assert_eq!(
            err,
            PricingConfigError::UnknownDefaultLocation {
                location: "Delhi".to_string()
            }
        );
    }

    #[test]
    fn test_load_rejects_invalid_pricing() {
        let source = config::Config::builder()
            .set_override("pricing.fallback_price", -5.0)
            .unwrap()
            .build()
            .unwrap();
        let err = AppConfig::from_source(source).unwrap_err();
        assert!(err.to_string().contains("Invalid fallback price"));

        let source = config::Config::builder()
            .set_override("pricing.default_location", "")
            .unwrap()
            .build()
            .unwrap();
        let err = AppConfig::from_source(source).unwrap_err();
        assert!(err.to_string().contains("Default location must not be empty"));
    }

    #[test]
    fn test_load_accepts_valid_overrides() {
        let source = config::Config::builder()
            .set_override("pricing.default_location", "Mumbai")
            .unwrap()
            .set_override("pricing.fallback_price", 12.5)
            .unwrap()
            .build()
            .unwrap();
        let config = AppConfig::from_source(source).unwrap();

        assert_eq!(config.pricing.default_location, "Mumbai");
        assert_eq!(config.pricing.fallback_price, 12.5);
    }
}
