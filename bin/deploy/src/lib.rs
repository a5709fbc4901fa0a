//! Deployment run orchestration.
//!
//! The binary resolves and validates everything up front (network, config,
//! signing key), then drives two actions in order: the token allowance
//! approval and the proxied savings deployment. Any failure before the first
//! transaction leaves the chain untouched.

use std::{
    fs,
    path::{Path, PathBuf},
};

use action::{
    approve::{ApproveAction, ApproveConfig},
    deploy::{DeployProxyAction, SavingsDeploy},
    Action,
};
use alloy_primitives::{utils::format_ether, Address, U256};
use alloy_provider::Provider;
use config::{DeployConfig, Network};
use deployment::{ArtifactStore, DeploymentStore};
use eyre::{eyre, Result, WrapErr};
use tracing::info;

/// Allowance to grant before deploying.
#[derive(Debug, Clone, Copy)]
pub struct Approval {
    /// Spender being granted the allowance
    pub spender: Address,
    /// Allowance amount in the token's smallest unit
    pub amount: U256,
}

/// Config file location for a network: `<base>/<network dir>/config.json`.
pub fn config_path(config_dir: &Path, network: Network) -> PathBuf {
    config_dir.join(network.dir_name()).join("config.json")
}

/// Read and validate the deployment config for a network.
pub fn load_deploy_config(config_dir: &Path, network: Network) -> Result<DeployConfig> {
    let path = config_path(config_dir, network);
    let contents = fs::read_to_string(&path)
        .wrap_err_with(|| format!("reading deploy config at {}", path.display()))?;

    Ok(DeployConfig::from_json(&contents)?)
}

/// Drive the allowance approval and the proxy deployment for one instance.
///
/// Returns the address of the deployed (or previously recorded) instance.
pub async fn run_deployment<P>(
    provider: P,
    owner: Address,
    network: Network,
    deploy: SavingsDeploy,
    approval: Option<Approval>,
    artifacts: &ArtifactStore,
    store: &DeploymentStore,
) -> Result<Address>
where
    P: Provider + Clone + Send + Sync,
{
    if let Some(approval) = approval {
        let action = ApproveAction::new(
            provider.clone(),
            ApproveConfig {
                token: deploy.token,
                owner,
                spender: approval.spender,
                amount: approval.amount,
            },
        );

        if action.is_completed().await? {
            info!(
                spender = %approval.spender,
                "Allowance already covers {}, skipping approval",
                format_ether(approval.amount)
            );
        } else {
            info!("{}", action.description());
            let outcome = action.execute().await?;
            info!(tx = %outcome.tx_hash, "Approval confirmed");
        }
    }

    let tag = deploy.tag();
    let action = DeployProxyAction::new(provider, artifacts, store, deploy);
    action.execute().await?;

    let address = action
        .recorded_address()?
        .ok_or_else(|| eyre!("deployment finished without a record for {tag}"))?;
    info!("Deployed {tag}, network: {network}, address: {address}");

    Ok(address)
}
