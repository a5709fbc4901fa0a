//! Chain client construction.
//!
//! Thin wrappers over alloy's provider builder: a read-only provider for
//! queries and a [`Wallet`] that couples the signing key with the providers
//! built from it. Transaction filling (nonce, gas, fees) is alloy's job.

use alloy_network::EthereumWallet;
use alloy_primitives::Address;
use alloy_provider::{Provider, ProviderBuilder};
use alloy_signer_local::PrivateKeySigner;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Error parsing or validating URLs
    #[error("Invalid RPC URL: {0}")]
    InvalidUrl(String),

    /// Error with private key
    #[error("Invalid private key: {0}")]
    InvalidKey(String),
}

/// Create a read-only provider for an RPC endpoint.
pub fn connect(rpc_url: &str) -> Result<impl Provider + Clone, ClientError> {
    let url = rpc_url
        .parse()
        .map_err(|e| ClientError::InvalidUrl(format!("{e}")))?;

    Ok(ProviderBuilder::new().connect_http(url))
}

/// Local signing identity of a deployment run.
///
/// Constructed once at process start from the key handed in by the caller;
/// nothing below this layer reads the environment.
#[derive(Debug, Clone)]
pub struct Wallet {
    signer: PrivateKeySigner,
}

impl Wallet {
    /// Parse a hex private key, with or without the `0x` prefix.
    pub fn from_hex_key(private_key: &str) -> Result<Self, ClientError> {
        let signer = private_key
            .parse()
            .map_err(|e| ClientError::InvalidKey(format!("{e}")))?;

        Ok(Self { signer })
    }

    /// Address transactions will be sent from.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Create a signing provider for an RPC endpoint.
    pub fn connect(&self, rpc_url: &str) -> Result<impl Provider + Clone, ClientError> {
        let url = rpc_url
            .parse()
            .map_err(|e| ClientError::InvalidUrl(format!("{e}")))?;
        let wallet = EthereumWallet::from(self.signer.clone());

        Ok(ProviderBuilder::new().wallet(wallet).connect_http(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    // First default anvil/hardhat dev account.
    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_invalid_url() {
        assert!(matches!(
            connect("not a url"),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_invalid_key() {
        assert!(matches!(
            Wallet::from_hex_key("0xnope"),
            Err(ClientError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_wallet_address_derivation() {
        let wallet = Wallet::from_hex_key(DEV_KEY).unwrap();
        assert_eq!(
            wallet.address(),
            address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );
    }
}
