//! Compiled contract artifacts.
//!
//! Artifacts are the build pipeline's JSON output, one file per contract,
//! holding at least the ABI and the creation bytecode. The ABI is kept
//! opaque; only the bytecode is consumed here.

use std::{fs, path::PathBuf};

use alloy_primitives::Bytes;
use eyre::{Result, WrapErr};
use serde::Deserialize;

/// One compiled contract artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct Artifact {
    /// Contract ABI
    pub abi: serde_json::Value,
    /// Creation bytecode
    pub bytecode: Bytes,
}

/// Directory of compiled artifacts, `<dir>/<Name>.json` per contract.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path the artifact for `name` is expected at.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    /// Load a contract artifact by name.
    pub fn load(&self, name: &str) -> Result<Artifact> {
        let path = self.path(name);
        let contents = fs::read_to_string(&path)
            .wrap_err_with(|| format!("no artifact for {name} at {}", path.display()))?;
        let artifact: Artifact = serde_json::from_str(&contents)
            .wrap_err_with(|| format!("malformed artifact for {name}"))?;

        eyre::ensure!(
            !artifact.bytecode.is_empty(),
            "artifact for {name} has empty bytecode"
        );

        Ok(artifact)
    }
}
