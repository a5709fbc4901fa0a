//! Savings instance deployment action.
//!
//! Wraps the proxy deployer: builds the initializer calldata for one savings
//! instance and hands it over, tagged so a recorded deployment is never
//! repeated.

use alloy_primitives::{Address, Bytes, U256};
use alloy_provider::Provider;
use binding::savings;
use config::{SavingsInstance, TokenSymbol};
use deployment::{ArtifactStore, DeploymentStore, ProxyDeployer, ProxySpec};
use tracing::info;

use crate::{Action, Outcome};

/// Contract name deployed for every savings instance.
pub const CONTRACT_NAME: &str = "Savings";

/// Implementation artifact for savings instances.
pub const SAVINGS_ARTIFACT: &str = "SavingsNameable";

/// Inputs for deploying one savings instance behind a proxy.
#[derive(Debug, Clone)]
pub struct SavingsDeploy {
    /// Token the instance wraps
    pub symbol: TokenSymbol,
    /// AccessManager handed to the initializer
    pub access_manager: Address,
    /// Token contract address
    pub token: Address,
    /// Instance display name
    pub name: String,
    /// Instance ticker
    pub ticker: String,
    /// Scaling divider handed to the initializer
    pub divider: U256,
}

impl SavingsDeploy {
    /// Assemble the inputs from a validated config instance.
    pub fn from_instance(
        symbol: TokenSymbol,
        access_manager: Address,
        instance: SavingsInstance<'_>,
        divider: U256,
    ) -> Self {
        Self {
            symbol,
            access_manager,
            token: instance.token,
            name: instance.params.name.clone(),
            ticker: instance.params.symbol.clone(),
            divider,
        }
    }

    /// Tag the deployment is recorded under.
    pub fn tag(&self) -> String {
        format!("{CONTRACT_NAME}_{}", self.symbol.ticker())
    }

    fn init_data(&self) -> Bytes {
        savings::initialize_calldata(
            self.access_manager,
            self.token,
            &self.name,
            &self.ticker,
            self.divider,
        )
    }

    fn init_args(&self) -> Vec<String> {
        vec![
            self.access_manager.to_string(),
            self.token.to_string(),
            self.name.clone(),
            self.ticker.clone(),
            self.divider.to_string(),
        ]
    }
}

/// Action deploying a savings instance behind an ERC-1967 proxy.
pub struct DeployProxyAction<'a, P> {
    provider: P,
    artifacts: &'a ArtifactStore,
    store: &'a DeploymentStore,
    deploy: SavingsDeploy,
}

impl<'a, P> DeployProxyAction<'a, P>
where
    P: Provider + Clone,
{
    pub const fn new(
        provider: P,
        artifacts: &'a ArtifactStore,
        store: &'a DeploymentStore,
        deploy: SavingsDeploy,
    ) -> Self {
        Self {
            provider,
            artifacts,
            store,
            deploy,
        }
    }

    /// Address of the recorded deployment, if any.
    pub fn recorded_address(&self) -> eyre::Result<Option<Address>> {
        Ok(self.store.get(&self.deploy.tag())?.map(|d| d.address))
    }
}

impl<P> Action for DeployProxyAction<'_, P>
where
    P: Provider + Clone + Send + Sync,
{
    fn is_ready(&self) -> bool {
        self.deploy.access_manager != Address::ZERO
            && self.deploy.token != Address::ZERO
            && !self.deploy.name.is_empty()
            && !self.deploy.ticker.is_empty()
            && self.deploy.divider > U256::ZERO
    }

    async fn is_completed(&self) -> eyre::Result<bool> {
        Ok(self.recorded_address()?.is_some())
    }

    async fn execute(&self) -> eyre::Result<Outcome> {
        if !self.is_ready() {
            eyre::bail!("Savings deployment inputs incomplete");
        }

        let spec = ProxySpec {
            tag: self.deploy.tag(),
            artifact: SAVINGS_ARTIFACT.to_owned(),
            init_data: self.deploy.init_data(),
            init_args: self.deploy.init_args(),
        };

        let deployer = ProxyDeployer::new(self.provider.clone(), self.artifacts, self.store);
        let deployed = deployer.deploy(&spec).await?;

        info!(
            tag = %spec.tag,
            address = %deployed.deployment.address,
            reused = deployed.reused,
            "Savings instance ready"
        );

        Ok(Outcome {
            tx_hash: deployed.deployment.transaction,
            block_number: None,
            gas_used: None,
        })
    }

    fn description(&self) -> String {
        format!(
            "Deploy {} for token {} behind a proxy",
            self.deploy.tag(),
            self.deploy.token
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockProvider;
    use alloy_sol_types::SolCall;
    use binding::savings::ISavings;
    use config::Network;

    fn mock_deploy() -> SavingsDeploy {
        SavingsDeploy {
            symbol: TokenSymbol::Usdmo,
            access_manager: Address::from([1u8; 20]),
            token: Address::from([2u8; 20]),
            name: "USD Mo Savings".to_owned(),
            ticker: "sUSDmo".to_owned(),
            divider: U256::from(1),
        }
    }

    fn mock_action(deploy: SavingsDeploy) -> (ArtifactStore, DeploymentStore, SavingsDeploy) {
        let base = std::env::temp_dir().join("deploy-action-tests");
        (
            ArtifactStore::new(base.join("artifacts")),
            DeploymentStore::new(base.join("deployments"), Network::EdennetTestnet),
            deploy,
        )
    }

    #[test]
    fn test_tag_names_contract_and_ticker() {
        assert_eq!(mock_deploy().tag(), "Savings_USDmo");
    }

    #[test]
    fn test_init_data_is_an_initialize_call() {
        let data = mock_deploy().init_data();
        assert_eq!(&data[..4], &ISavings::initializeCall::SELECTOR[..]);
    }

    #[test]
    fn test_init_args_cover_every_initializer_input() {
        let args = mock_deploy().init_args();
        assert_eq!(args.len(), 5);
        assert!(args.contains(&"USD Mo Savings".to_owned()));
        assert!(args.contains(&"1".to_owned()));
    }

    #[test]
    fn test_is_ready_with_valid_inputs() {
        let (artifacts, store, deploy) = mock_action(mock_deploy());
        let action = DeployProxyAction {
            provider: MockProvider,
            artifacts: &artifacts,
            store: &store,
            deploy,
        };

        assert!(action.is_ready());
    }

    #[test]
    fn test_is_ready_with_zero_access_manager() {
        let mut deploy = mock_deploy();
        deploy.access_manager = Address::ZERO;
        let (artifacts, store, deploy) = mock_action(deploy);
        let action = DeployProxyAction {
            provider: MockProvider,
            artifacts: &artifacts,
            store: &store,
            deploy,
        };

        assert!(!action.is_ready());
    }

    #[test]
    fn test_is_ready_with_zero_divider() {
        let mut deploy = mock_deploy();
        deploy.divider = U256::ZERO;
        let (artifacts, store, deploy) = mock_action(deploy);
        let action = DeployProxyAction {
            provider: MockProvider,
            artifacts: &artifacts,
            store: &store,
            deploy,
        };

        assert!(!action.is_ready());
    }

    #[test]
    fn test_description_names_the_tag() {
        let (artifacts, store, deploy) = mock_action(mock_deploy());
        let action = DeployProxyAction {
            provider: MockProvider,
            artifacts: &artifacts,
            store: &store,
            deploy,
        };

        assert!(action.description().contains("Savings_USDmo"));
    }
}
