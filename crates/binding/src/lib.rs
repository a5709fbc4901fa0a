//! Contract bindings for the deployment flow.
//!
//! This crate consolidates the Solidity interfaces the deployer touches:
//! - ERC-20 token surface for allowance approvals
//! - Savings initializer, for building proxy constructor calldata
//! - ERC-1967 proxy constants and constructor-argument encoding
//!
//! All bindings are generated using alloy's `sol!` macro.

pub mod proxy;
pub mod savings;
pub mod token;
