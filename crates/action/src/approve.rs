//! Token allowance approval action.
//!
//! Grants a spender an allowance on an ERC-20 token. The call is simulated
//! first; only a clean simulation is signed and submitted, and the receipt is
//! waited on and checked before the action reports success.

use alloy_primitives::{utils::format_ether, Address, U256};
use alloy_provider::Provider;
use binding::token::IERC20;
use tracing::info;

use crate::{Action, Outcome};

/// Inputs for an allowance approval.
#[derive(Debug, Clone)]
pub struct ApproveConfig {
    /// Token contract to approve on
    pub token: Address,
    /// Account granting the allowance
    pub owner: Address,
    /// Spender being granted the allowance
    pub spender: Address,
    /// Allowance amount, in the token's smallest unit
    pub amount: U256,
}

/// Action granting `spender` an allowance of `amount` on `token`.
pub struct ApproveAction<P> {
    provider: P,
    config: ApproveConfig,
}

impl<P> ApproveAction<P>
where
    P: Provider + Clone,
{
    pub const fn new(provider: P, config: ApproveConfig) -> Self {
        Self { provider, config }
    }

    fn validate_config(&self) -> eyre::Result<()> {
        if self.config.token == Address::ZERO {
            eyre::bail!("Token address is zero");
        }

        if self.config.spender == Address::ZERO {
            eyre::bail!("Spender address is zero");
        }

        if self.config.amount == U256::ZERO {
            eyre::bail!("Approval amount is zero");
        }

        Ok(())
    }
}

impl<P> Action for ApproveAction<P>
where
    P: Provider + Clone + Send + Sync,
{
    fn is_ready(&self) -> bool {
        self.config.token != Address::ZERO
            && self.config.spender != Address::ZERO
            && self.config.amount > U256::ZERO
    }

    async fn is_completed(&self) -> eyre::Result<bool> {
        let contract = IERC20::new(self.config.token, &self.provider);
        let allowance = contract
            .allowance(self.config.owner, self.config.spender)
            .call()
            .await?;

        Ok(allowance >= self.config.amount)
    }

    async fn execute(&self) -> eyre::Result<Outcome> {
        self.validate_config()?;

        let contract = IERC20::new(self.config.token, &self.provider);

        // Simulate; a revert surfaces here before anything is signed.
        contract
            .approve(self.config.spender, self.config.amount)
            .call()
            .await?;

        let pending = contract
            .approve(self.config.spender, self.config.amount)
            .send()
            .await?;
        let tx_hash = *pending.tx_hash();
        info!(%tx_hash, "Approval submitted");

        let receipt = pending.get_receipt().await?;
        if !receipt.status() {
            eyre::bail!("Approval transaction reverted");
        }

        Ok(Outcome {
            tx_hash,
            block_number: receipt.block_number,
            gas_used: Some(U256::from(receipt.gas_used)),
        })
    }

    fn description(&self) -> String {
        format!(
            "Approve {} of token {} for {}",
            format_ether(self.config.amount),
            self.config.token,
            self.config.spender
        )
    }
}
