//! Proxy deployment for savings instances.
//!
//! This crate owns the deployment mechanics the rest of the workspace only
//! hands validated arguments to:
//! - compiled artifact loading
//! - tagged deployment records, which make re-runs skip finished work
//! - ERC-1967 proxy deployment with an initializer call

pub mod artifact;
pub mod proxy;
pub mod store;

pub use artifact::{Artifact, ArtifactStore};
pub use proxy::{Deployed, ProxyDeployer, ProxySpec, PROXY_ARTIFACT};
pub use store::{Deployment, DeploymentStore};
