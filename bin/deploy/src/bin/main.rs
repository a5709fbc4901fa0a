//! CLI for deploying savings instances behind upgradeable proxies.

use std::path::PathBuf;

use action::deploy::SavingsDeploy;
use alloy_primitives::{utils::format_ether, Address, U256};
use clap::Parser;
use client::Wallet;
use config::{ConfigError, Network, RpcRoute, TokenSymbol};
use deploy::{config_path, load_deploy_config, run_deployment, Approval};
use deployment::{ArtifactStore, DeploymentStore};
use tracing::info;

#[derive(Parser)]
#[command(name = "deploy")]
#[command(about = "Deploy savings instances behind upgradeable proxies")]
struct Cli {
    /// Target network
    #[arg(short, long)]
    network: Network,

    /// Token to deploy a savings instance for
    #[arg(long, default_value = "usdmo")]
    token: TokenSymbol,

    /// RPC route to reach the network over (proxied or direct)
    #[arg(long, default_value = "proxied")]
    rpc_route: RpcRoute,

    /// Directory holding per-network config files
    #[arg(long, default_value = "deploy/config")]
    config_dir: PathBuf,

    /// Directory holding compiled contract artifacts
    #[arg(long, default_value = "artifacts")]
    artifacts_dir: PathBuf,

    /// Directory deployment records are written to
    #[arg(long, default_value = "deployments")]
    deployments_dir: PathBuf,

    /// Spender granted a token allowance before the deployment
    #[arg(long)]
    spender: Option<Address>,

    /// Allowance amount in the token's smallest unit
    #[arg(long, default_value = "1000000000000000000")]
    approve_amount: U256,

    /// Divider handed to the savings initializer
    #[arg(long, default_value = "1")]
    initial_divider: U256,

    /// Private key for signing transactions (hex string, with or without 0x prefix)
    #[arg(short = 'k', long, env = "PRIVATE_KEY", hide_env_values = true)]
    private_key: Option<String>,

    /// Dry-run mode: resolve and validate everything, send nothing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let rpc_url = cli.network.rpc_url(cli.rpc_route);

    info!("Loading config: {}", config_path(&cli.config_dir, cli.network).display());
    let config = load_deploy_config(&cli.config_dir, cli.network)?;
    let instance = config.instance(cli.token)?;
    let deploy = SavingsDeploy::from_instance(
        cli.token,
        config.access_manager,
        instance,
        cli.initial_divider,
    );

    // The key must be present before anything touches the network.
    let private_key = cli.private_key.ok_or(ConfigError::MissingPrivateKey)?;
    let wallet = Wallet::from_hex_key(&private_key)?;

    info!("Network: {} ({} route)", cli.network, cli.rpc_route);
    info!("Endpoint: {rpc_url}");
    info!("Deployer: {}", wallet.address());
    info!("Deploying: {}", deploy.tag());

    let approval = cli.spender.map(|spender| Approval {
        spender,
        amount: cli.approve_amount,
    });

    if cli.dry_run {
        info!("Mode: DRY-RUN (no transactions will be sent)");
        if let Some(approval) = &approval {
            info!(
                "Would approve {} of token {} for {}",
                format_ether(approval.amount),
                deploy.token,
                approval.spender
            );
        }
        info!("Would deploy {} behind an ERC1967 proxy", deploy.tag());
        return Ok(());
    }

    let provider = wallet.connect(rpc_url)?;
    let artifacts = ArtifactStore::new(&cli.artifacts_dir);
    let store = DeploymentStore::new(&cli.deployments_dir, cli.network);

    run_deployment(
        provider,
        wallet.address(),
        cli.network,
        deploy,
        approval,
        &artifacts,
        &store,
    )
    .await?;

    Ok(())
}
