//! Saved deployment records.
//!
//! Each deployment is recorded under a tag (`Savings_USDmo`) in a JSON file
//! scoped to the network it ran against. A tag that is already recorded is
//! never redeployed, which makes re-running a half-finished run safe.

use std::{fs, path::PathBuf};

use alloy_primitives::{Address, TxHash};
use config::Network;
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

/// Record of one proxy deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    /// Proxy address callers interact with
    pub address: Address,
    /// Implementation behind the proxy
    pub implementation: Address,
    /// Transaction that created the proxy
    pub transaction: TxHash,
    /// Artifact the implementation was built from
    pub artifact: String,
    /// Initializer arguments, kept for the record
    pub init_args: Vec<String>,
}

/// Tagged deployment records for one network.
///
/// Records live under `<base>/<network dir>/<tag>.json`.
#[derive(Debug, Clone)]
pub struct DeploymentStore {
    dir: PathBuf,
}

impl DeploymentStore {
    pub fn new(base: impl Into<PathBuf>, network: Network) -> Self {
        Self {
            dir: base.into().join(network.dir_name()),
        }
    }

    fn path(&self, tag: &str) -> PathBuf {
        self.dir.join(format!("{tag}.json"))
    }

    /// Look up a record by tag. `None` when nothing was deployed under it.
    pub fn get(&self, tag: &str) -> Result<Option<Deployment>> {
        let path = self.path(tag);
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)?;
        let deployment = serde_json::from_str(&contents)
            .wrap_err_with(|| format!("corrupt deployment record at {}", path.display()))?;

        Ok(Some(deployment))
    }

    /// Persist a record under its tag.
    pub fn save(&self, tag: &str, deployment: &Deployment) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let contents = serde_json::to_string_pretty(deployment)?;
        fs::write(self.path(tag), contents)?;

        Ok(())
    }
}
