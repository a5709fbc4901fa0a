//! ERC-1967 proxy deployment.
//!
//! Two creation transactions per instance: the implementation from its
//! artifact, then the proxy with `(implementation, initializer calldata)`
//! constructor arguments. After both land, the EIP-1967 implementation slot
//! is read back to confirm the proxy points where it should before the
//! deployment is recorded.

use alloy_network::TransactionBuilder;
use alloy_primitives::{Address, Bytes, TxHash};
use alloy_provider::Provider;
use alloy_rpc_types_eth::{TransactionReceipt, TransactionRequest};
use binding::proxy;
use eyre::{eyre, Result, WrapErr};
use tracing::info;

use crate::{
    artifact::ArtifactStore,
    store::{Deployment, DeploymentStore},
};

/// Artifact name of the proxy every instance is deployed behind.
pub const PROXY_ARTIFACT: &str = "ERC1967Proxy";

/// What to deploy: an implementation artifact plus its initializer call.
#[derive(Debug, Clone)]
pub struct ProxySpec {
    /// Tag the deployment is recorded under
    pub tag: String,
    /// Implementation artifact name
    pub artifact: String,
    /// ABI-encoded initializer call, run through the proxy constructor
    pub init_data: Bytes,
    /// Human-readable initializer arguments, kept in the record
    pub init_args: Vec<String>,
}

/// Outcome of a proxy deployment.
#[derive(Debug, Clone)]
pub struct Deployed {
    pub deployment: Deployment,
    /// True when the tag was already recorded and nothing was sent
    pub reused: bool,
}

/// Deploys implementation + proxy pairs and records them.
pub struct ProxyDeployer<'a, P> {
    provider: P,
    artifacts: &'a ArtifactStore,
    store: &'a DeploymentStore,
}

impl<'a, P> ProxyDeployer<'a, P>
where
    P: Provider + Clone,
{
    pub const fn new(
        provider: P,
        artifacts: &'a ArtifactStore,
        store: &'a DeploymentStore,
    ) -> Self {
        Self {
            provider,
            artifacts,
            store,
        }
    }

    /// Deploy the spec, or return the existing record for its tag.
    pub async fn deploy(&self, spec: &ProxySpec) -> Result<Deployed> {
        if let Some(existing) = self.store.get(&spec.tag)? {
            info!(tag = %spec.tag, address = %existing.address, "Already deployed, skipping");
            return Ok(Deployed {
                deployment: existing,
                reused: true,
            });
        }

        let implementation = self.deploy_implementation(&spec.artifact).await?;
        let (address, transaction) = self.deploy_proxy(implementation, &spec.init_data).await?;
        self.verify_implementation(address, implementation).await?;

        let deployment = Deployment {
            address,
            implementation,
            transaction,
            artifact: spec.artifact.clone(),
            init_args: spec.init_args.clone(),
        };
        self.store.save(&spec.tag, &deployment)?;

        Ok(Deployed {
            deployment,
            reused: false,
        })
    }

    async fn deploy_implementation(&self, artifact_name: &str) -> Result<Address> {
        let artifact = self.artifacts.load(artifact_name)?;

        info!(artifact = artifact_name, "Deploying implementation");
        let receipt = self
            .send_deploy(artifact.bytecode.to_vec())
            .await
            .wrap_err_with(|| format!("deploying implementation {artifact_name}"))?;

        contract_address(&receipt)
    }

    async fn deploy_proxy(
        &self,
        implementation: Address,
        init_data: &Bytes,
    ) -> Result<(Address, TxHash)> {
        let artifact = self.artifacts.load(PROXY_ARTIFACT)?;

        let mut code = artifact.bytecode.to_vec();
        code.extend_from_slice(&proxy::encode_constructor_args(implementation, init_data));

        info!(%implementation, "Deploying proxy");
        let receipt = self.send_deploy(code).await.wrap_err("deploying proxy")?;

        Ok((contract_address(&receipt)?, receipt.transaction_hash))
    }

    async fn send_deploy(&self, code: Vec<u8>) -> Result<TransactionReceipt> {
        let tx = TransactionRequest::default().with_deploy_code(code);

        let receipt = self
            .provider
            .send_transaction(tx)
            .await?
            .get_receipt()
            .await?;
        eyre::ensure!(receipt.status(), "deployment transaction reverted");

        Ok(receipt)
    }

    /// Read the EIP-1967 slot back and confirm it holds the implementation.
    async fn verify_implementation(
        &self,
        proxy_address: Address,
        implementation: Address,
    ) -> Result<()> {
        let word = self
            .provider
            .get_storage_at(proxy_address, proxy::IMPLEMENTATION_SLOT.into())
            .await?;
        let stored = proxy::implementation_from_slot(word.into());

        eyre::ensure!(
            stored == implementation,
            "proxy at {proxy_address} points at {stored}, expected {implementation}"
        );

        Ok(())
    }
}

fn contract_address(receipt: &TransactionReceipt) -> Result<Address> {
    receipt
        .contract_address
        .ok_or_else(|| eyre!("deployment receipt carries no contract address"))
}
