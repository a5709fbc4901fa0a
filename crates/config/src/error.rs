//! Errors raised while resolving networks and validating deployment config.
//!
//! Every variant is fatal to a deployment run: nothing here is retried, and
//! all of them fire before any transaction is constructed.

use thiserror::Error;

use crate::deploy::TokenSymbol;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The requested network is not in the supported set.
    #[error("{0} network RPC not configured")]
    UnsupportedNetwork(String),

    /// The requested RPC route name is not recognized.
    #[error("unknown RPC route {0:?}, expected \"proxied\" or \"direct\"")]
    UnknownRoute(String),

    /// The config JSON is missing required fields or has the wrong shape.
    #[error("malformed deploy config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A configured address field is not a well-formed 20-byte hex address.
    #[error("invalid {field} address: {value:?}")]
    InvalidAddress { field: String, value: String },

    /// A token symbol outside the supported set was requested.
    #[error("{0:?} is not a supported token symbol")]
    UnknownToken(String),

    /// The config lists no address for the requested token.
    #[error("no address configured for token {0}")]
    MissingToken(TokenSymbol),

    /// A configured token has no matching savings parameters.
    #[error("no savings parameters configured for token {0}")]
    MissingSavings(TokenSymbol),

    /// The signing key is absent from the process environment.
    #[error("PRIVATE_KEY is not set")]
    MissingPrivateKey,
}
