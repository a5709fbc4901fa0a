//! Supported networks and their RPC endpoints.
//!
//! Endpoints get reassigned as infrastructure migrates, so adding or moving a
//! network is a single match arm here and nowhere else. Unknown names are an
//! error, never a fallback.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Target network for a deployment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Network {
    #[serde(rename = "edennetTestnet")]
    EdennetTestnet,
}

/// Which of a network's RPC endpoint definitions to use.
///
/// Some networks are reachable both through a hosted RPC proxy and directly
/// at a sequencer node. Callers pick one; there is no implicit preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcRoute {
    /// Hosted RPC proxy in front of the network.
    Proxied,
    /// Direct sequencer node endpoint.
    Direct,
}

/// The known endpoint definitions for one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    pub proxied: &'static str,
    pub direct: &'static str,
}

impl Network {
    /// Every supported network.
    pub const ALL: &'static [Self] = &[Self::EdennetTestnet];

    /// Network name as the surrounding tooling spells it.
    pub const fn name(self) -> &'static str {
        match self {
            Self::EdennetTestnet => "edennetTestnet",
        }
    }

    /// Lowercased name, used to derive config and deployment record paths.
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::EdennetTestnet => "edennettestnet",
        }
    }

    /// Both known endpoint definitions for this network.
    pub const fn endpoints(self) -> Endpoints {
        match self {
            Self::EdennetTestnet => Endpoints {
                proxied: "https://eden-rpc-proxy.up.railway.app/rpc",
                direct: "http://rpc-evreth-sequencer-edennet-1-testnet.binary.builders:8080",
            },
        }
    }

    /// RPC endpoint for this network over the given route.
    pub const fn rpc_url(self, route: RpcRoute) -> &'static str {
        let endpoints = self.endpoints();
        match route {
            RpcRoute::Proxied => endpoints.proxied,
            RpcRoute::Direct => endpoints.direct,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "edennettestnet" => Ok(Self::EdennetTestnet),
            _ => Err(ConfigError::UnsupportedNetwork(s.to_owned())),
        }
    }
}

impl fmt::Display for RpcRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Proxied => f.write_str("proxied"),
            Self::Direct => f.write_str("direct"),
        }
    }
}

impl FromStr for RpcRoute {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "proxied" => Ok(Self::Proxied),
            "direct" => Ok(Self::Direct),
            _ => Err(ConfigError::UnknownRoute(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_networks_have_endpoints() {
        for network in Network::ALL {
            for route in [RpcRoute::Proxied, RpcRoute::Direct] {
                let url = network.rpc_url(route);
                assert!(!url.is_empty());
                assert!(url.starts_with("http"), "not a URL: {url}");
            }
        }
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let network: Network = "edennetTestnet".parse().unwrap();
        assert_eq!(
            network.rpc_url(RpcRoute::Proxied),
            network.rpc_url(RpcRoute::Proxied)
        );
        assert_eq!(
            network.rpc_url(RpcRoute::Direct),
            network.rpc_url(RpcRoute::Direct)
        );
    }

    #[test]
    fn test_routes_resolve_to_distinct_endpoints() {
        let endpoints = Network::EdennetTestnet.endpoints();
        assert_ne!(endpoints.proxied, endpoints.direct);
    }

    #[test]
    fn test_network_name_is_case_insensitive() {
        assert_eq!(
            "EDENNETTESTNET".parse::<Network>().unwrap(),
            Network::EdennetTestnet
        );
    }

    #[test]
    fn test_unknown_network_is_an_error() {
        let err = "nonexistentNet".parse::<Network>().unwrap_err();
        match err {
            ConfigError::UnsupportedNetwork(name) => assert_eq!(name, "nonexistentNet"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_dir_name_is_lowercase() {
        for network in Network::ALL {
            assert_eq!(network.dir_name(), network.name().to_ascii_lowercase());
        }
    }

    #[test]
    fn test_route_parsing() {
        assert_eq!("proxied".parse::<RpcRoute>().unwrap(), RpcRoute::Proxied);
        assert_eq!("Direct".parse::<RpcRoute>().unwrap(), RpcRoute::Direct);
        assert!("fastest".parse::<RpcRoute>().is_err());
    }
}
