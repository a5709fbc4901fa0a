//! Deployment configuration: parsing and address validation.
//!
//! Parsing is two-staged. Raw JSON is first mapped onto a shape with string
//! addresses, then every address field is checked against the 20-byte hex
//! format before it becomes a typed [`Address`]. The field path of the first
//! offending value is carried in the error, so a bad config names its own
//! problem. Values are never normalized; any hex casing is accepted as
//! written.

use std::{collections::BTreeMap, fmt, str::FromStr};

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Token symbols a deployment config may reference.
///
/// Unknown symbols in the config fail at parse time; there is no dynamic
/// lookup that can come back empty at use time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TokenSymbol {
    #[serde(rename = "usdmo")]
    Usdmo,
}

impl TokenSymbol {
    /// Ticker as printed in logs and deployment tags.
    pub const fn ticker(self) -> &'static str {
        match self {
            Self::Usdmo => "USDmo",
        }
    }

    /// Lowercased key under which the config files store this token.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Usdmo => "usdmo",
        }
    }
}

impl fmt::Display for TokenSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ticker())
    }
}

impl FromStr for TokenSymbol {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "usdmo" => Ok(Self::Usdmo),
            _ => Err(ConfigError::UnknownToken(s.to_owned())),
        }
    }
}

/// Naming parameters for one savings instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsParams {
    /// Display name of the deployed instance
    pub name: String,
    /// Ticker symbol of the deployed instance
    pub symbol: String,
}

/// Raw config shape straight out of serde, addresses still unchecked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    access_manager: String,
    tokens: BTreeMap<TokenSymbol, String>,
    savings: BTreeMap<TokenSymbol, SavingsParams>,
}

/// Validated deployment configuration.
///
/// Construction goes through [`DeployConfig::from_value`], so every address
/// held here has passed format validation and every token has savings
/// parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployConfig {
    /// AccessManager contract governing the deployed instances
    pub access_manager: Address,
    /// Token contract address per symbol
    pub tokens: BTreeMap<TokenSymbol, Address>,
    /// Savings instance parameters per symbol
    pub savings: BTreeMap<TokenSymbol, SavingsParams>,
}

/// One deployable savings instance, resolved out of a [`DeployConfig`].
#[derive(Debug, Clone, Copy)]
pub struct SavingsInstance<'a> {
    /// Underlying token contract
    pub token: Address,
    /// Naming parameters for the instance
    pub params: &'a SavingsParams,
}

impl DeployConfig {
    /// Parse and validate an already-decoded JSON value.
    ///
    /// Identical input always yields an identical config or an identical
    /// error.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_value(value)?;

        let access_manager = check_address("accessManager", &raw.access_manager)?;

        let mut tokens = BTreeMap::new();
        for (symbol, address) in &raw.tokens {
            let field = format!("tokens.{}", symbol.key());
            tokens.insert(*symbol, check_address(&field, address)?);
        }

        for symbol in tokens.keys() {
            if !raw.savings.contains_key(symbol) {
                return Err(ConfigError::MissingSavings(*symbol));
            }
        }

        Ok(Self {
            access_manager,
            tokens,
            savings: raw.savings,
        })
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Token address and savings parameters for one deploy target.
    pub fn instance(&self, symbol: TokenSymbol) -> Result<SavingsInstance<'_>, ConfigError> {
        let token = self
            .tokens
            .get(&symbol)
            .copied()
            .ok_or(ConfigError::MissingToken(symbol))?;
        let params = self
            .savings
            .get(&symbol)
            .ok_or(ConfigError::MissingSavings(symbol))?;

        Ok(SavingsInstance { token, params })
    }
}

/// Validate one configured address field.
///
/// Requires the `0x` prefix and exactly 40 hex digits.
fn check_address(field: &str, value: &str) -> Result<Address, ConfigError> {
    match value.strip_prefix("0x") {
        Some(hex) if hex.len() == 40 => value
            .parse()
            .map_err(|_| invalid_address(field, value)),
        _ => Err(invalid_address(field, value)),
    }
}

fn invalid_address(field: &str, value: &str) -> ConfigError {
    ConfigError::InvalidAddress {
        field: field.to_owned(),
        value: value.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_value() -> serde_json::Value {
        json!({
            "accessManager": format!("0x{}", "11".repeat(20)),
            "tokens": {
                "usdmo": format!("0x{}", "22".repeat(20)),
            },
            "savings": {
                "usdmo": {
                    "name": "USD Mo Savings",
                    "symbol": "sUSDmo",
                },
            },
        })
    }

    #[test]
    fn test_valid_config_passes_through_unchanged() {
        let config = DeployConfig::from_value(sample_value()).unwrap();

        assert_eq!(config.access_manager, Address::repeat_byte(0x11));
        assert_eq!(config.tokens[&TokenSymbol::Usdmo], Address::repeat_byte(0x22));
        assert_eq!(config.savings[&TokenSymbol::Usdmo].name, "USD Mo Savings");
        assert_eq!(config.savings[&TokenSymbol::Usdmo].symbol, "sUSDmo");
    }

    #[test]
    fn test_round_trip() {
        let config = DeployConfig::from_value(sample_value()).unwrap();
        let reparsed =
            DeployConfig::from_value(serde_json::to_value(&config).unwrap()).unwrap();

        assert_eq!(config, reparsed);
    }

    #[test]
    fn test_short_access_manager_is_rejected() {
        let mut value = sample_value();
        value["accessManager"] = json!("0x123");

        match DeployConfig::from_value(value).unwrap_err() {
            ConfigError::InvalidAddress { field, value } => {
                assert_eq!(field, "accessManager");
                assert_eq!(value, "0x123");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_garbage_token_address_names_the_field() {
        let mut value = sample_value();
        value["tokens"]["usdmo"] = json!("not-an-address");

        match DeployConfig::from_value(value).unwrap_err() {
            ConfigError::InvalidAddress { field, .. } => assert_eq!(field, "tokens.usdmo"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unprefixed_address_is_rejected() {
        let mut value = sample_value();
        value["accessManager"] = json!("11".repeat(20));

        assert!(matches!(
            DeployConfig::from_value(value).unwrap_err(),
            ConfigError::InvalidAddress { .. }
        ));
    }

    #[test]
    fn test_missing_tokens_field_is_a_parse_error() {
        let mut value = sample_value();
        value.as_object_mut().unwrap().remove("tokens");

        assert!(matches!(
            DeployConfig::from_value(value).unwrap_err(),
            ConfigError::Parse(_)
        ));
    }

    #[test]
    fn test_mistyped_address_field_is_a_parse_error() {
        let mut value = sample_value();
        value["accessManager"] = json!(42);

        assert!(matches!(
            DeployConfig::from_value(value).unwrap_err(),
            ConfigError::Parse(_)
        ));
    }

    #[test]
    fn test_unknown_token_symbol_is_a_parse_error() {
        let mut value = sample_value();
        value["tokens"]["weth"] = json!(format!("0x{}", "33".repeat(20)));

        assert!(matches!(
            DeployConfig::from_value(value).unwrap_err(),
            ConfigError::Parse(_)
        ));
    }

    #[test]
    fn test_token_without_savings_params_is_rejected() {
        let mut value = sample_value();
        value["savings"].as_object_mut().unwrap().remove("usdmo");

        assert!(matches!(
            DeployConfig::from_value(value).unwrap_err(),
            ConfigError::MissingSavings(TokenSymbol::Usdmo)
        ));
    }

    #[test]
    fn test_instance_lookup() {
        let config = DeployConfig::from_value(sample_value()).unwrap();
        let instance = config.instance(TokenSymbol::Usdmo).unwrap();

        assert_eq!(instance.token, Address::repeat_byte(0x22));
        assert_eq!(instance.params.symbol, "sUSDmo");
    }

    #[test]
    fn test_token_symbol_parses_any_casing() {
        assert_eq!("USDmo".parse::<TokenSymbol>().unwrap(), TokenSymbol::Usdmo);
        assert_eq!("usdmo".parse::<TokenSymbol>().unwrap(), TokenSymbol::Usdmo);
        assert!("weth".parse::<TokenSymbol>().is_err());
    }
}
