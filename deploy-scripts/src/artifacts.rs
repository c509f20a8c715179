//! Resolution of contract compilation artifacts.
//!
//! Artifacts are emitted by the contract build step, which is external to
//! this crate. An artifact file carries everything needed to construct a
//! contract's deployment transaction: its ABI and creation bytecode.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use ethers::{abi::Contract, contract::ContractFactory, providers::Middleware, types::Bytes};
use serde::Deserialize;

use crate::{constants::ARTIFACT_EXTENSION, errors::ScriptError};

/// A contract compilation artifact
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    /// The name of the contract
    pub contract_name: String,
    /// The contract's ABI
    pub abi: Contract,
    /// The contract's creation bytecode
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Builds a deployable contract factory from the artifact
    pub fn factory<M: Middleware>(&self, client: Arc<M>) -> ContractFactory<M> {
        ContractFactory::new(self.abi.clone(), self.bytecode.clone(), client)
    }
}

/// Finds the artifact file for the named contract under the artifacts
/// directory, searching subdirectories recursively
pub fn find_artifact(artifacts_dir: &Path, contract_name: &str) -> Result<PathBuf, ScriptError> {
    let file_name = format!("{contract_name}.{ARTIFACT_EXTENSION}");
    find_file(artifacts_dir, &file_name)?.ok_or_else(|| {
        ScriptError::ArtifactNotFound(format!(
            "no artifact for `{}` under {}",
            contract_name,
            artifacts_dir.display(),
        ))
    })
}

/// Loads and decodes the artifact for the named contract
pub fn load_artifact(
    artifacts_dir: &Path,
    contract_name: &str,
) -> Result<ContractArtifact, ScriptError> {
    let artifact_path = find_artifact(artifacts_dir, contract_name)?;
    let artifact_json = fs::read_to_string(artifact_path)
        .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    serde_json::from_str(&artifact_json).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))
}

/// Searches `dir` recursively for a file with the given name
fn find_file(dir: &Path, file_name: &str) -> Result<Option<PathBuf>, ScriptError> {
    let entries =
        fs::read_dir(dir).map_err(|e| ScriptError::ArtifactNotFound(e.to_string()))?;

    for entry in entries {
        let path = entry
            .map_err(|e| ScriptError::ArtifactNotFound(e.to_string()))?
            .path();

        if path.is_dir() {
            if let Some(found) = find_file(&path, file_name)? {
                return Ok(Some(found));
            }
        } else if path.file_name().is_some_and(|name| name == file_name) {
            return Ok(Some(path));
        }
    }

    Ok(None)
}
