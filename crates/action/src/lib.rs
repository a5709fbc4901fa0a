pub mod approve;
pub mod deploy;

use std::future::Future;

use alloy_primitives::{TxHash, U256};

/// Trait for executable onchain actions.
pub trait Action: Send + Sync {
    /// Whether the action's inputs pass their preconditions.
    ///
    /// Pure check, safe to call before any provider is connected.
    fn is_ready(&self) -> bool;

    /// Whether the action already happened and can be skipped.
    fn is_completed(&self) -> impl Future<Output = eyre::Result<bool>> + Send;

    /// Execute the action.
    ///
    /// Returns once the confirming transaction has landed.
    fn execute(&self) -> impl Future<Output = eyre::Result<Outcome>> + Send;

    /// Get a human-readable description of this action.
    fn description(&self) -> String;
}

/// Confirmed result of an executed action.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Transaction hash
    pub tx_hash: TxHash,
    /// Block number where the transaction was included
    pub block_number: Option<u64>,
    /// Gas used
    pub gas_used: Option<U256>,
}
