//! Configuration for savings deployments.
//!
//! This crate provides:
//! - Supported network definitions and RPC endpoint resolution
//! - Deployment config parsing and address validation
//!
//! Everything here is pure: file and network I/O belong to the caller.

pub mod deploy;
pub mod error;
pub mod network;

pub use deploy::{DeployConfig, SavingsInstance, SavingsParams, TokenSymbol};
pub use error::ConfigError;
pub use network::{Endpoints, Network, RpcRoute};
