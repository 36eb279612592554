//! Parsing of compiled contract artifacts.
//!
//! All of the contracts driven by these scripts are compiled externally by the
//! Solidity toolchain; their ABIs and creation bytecode are read from Hardhat
//! artifact JSON files (`<ContractName>.json`) in the artifacts directory.

use std::{fs, path::Path};

use ethers::{abi::Abi, types::Bytes};
use serde::Deserialize;

use crate::errors::ScriptError;

/// A compiled contract artifact, as emitted by the Solidity build
#[derive(Deserialize)]
pub struct ContractArtifact {
    /// The contract ABI
    pub abi: Abi,
    /// The creation bytecode, hex-encoded
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Read the artifact for the named contract from the artifacts directory
    pub fn read(artifacts_dir: &Path, contract_name: &str) -> Result<Self, ScriptError> {
        let path = artifacts_dir.join(format!("{contract_name}.json"));
        let contents = fs::read_to_string(&path)
            .map_err(|e| ScriptError::ArtifactParsing(format!("{}: {}", path.display(), e)))?;

        Self::from_json(&contents)
    }

    /// Parse an artifact from its JSON representation
    pub fn from_json(contents: &str) -> Result<Self, ScriptError> {
        serde_json::from_str(contents).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::ContractArtifact;

    /// A minimal artifact in the shape the Solidity build emits
    const DUMMY_ARTIFACT: &str = r#"{
        "contractName": "BTRST",
        "abi": [
            {
                "type": "function",
                "name": "totalSupply",
                "inputs": [],
                "outputs": [{ "name": "", "type": "uint256" }],
                "stateMutability": "view"
            }
        ],
        "bytecode": "0x6080604052"
    }"#;

    #[test]
    fn parses_hardhat_artifact_json() {
        let artifact = ContractArtifact::from_json(DUMMY_ARTIFACT).unwrap();

        assert!(artifact.abi.function("totalSupply").is_ok());
        assert_eq!(artifact.bytecode.to_vec(), vec![0x60, 0x80, 0x60, 0x40, 0x52]);
    }

    #[test]
    fn rejects_artifact_without_bytecode() {
        let res = ContractArtifact::from_json(r#"{ "abi": [] }"#);
        assert!(res.is_err());
    }
}
