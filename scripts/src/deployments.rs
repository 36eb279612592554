//! Reading & writing of the per-network deployments file.
//!
//! The deployments file records the address of every deployed contract under
//! the `deployments` key. Later runs read it back to resolve dependencies
//! (e.g. the token address when deploying the membership NFT) instead of
//! redeploying.

use std::{fs, fs::File, io::Read, path::PathBuf, str::FromStr};

use ethers::abi::Address;
use json::JsonValue;

use crate::{constants::DEPLOYMENTS_KEY, errors::ScriptError};

/// Parse the deployments file into a JSON value
fn get_json_from_file(file_path: &str) -> Result<JsonValue, ScriptError> {
    let mut file_contents = String::new();
    File::open(file_path)
        .map_err(|e| ScriptError::ReadDeployments(e.to_string()))?
        .read_to_string(&mut file_contents)
        .map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;

    json::parse(&file_contents).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Parse the address of the given contract from the deployments file,
/// erroring if it has not been deployed
pub fn parse_addr_from_deployments_file(
    file_path: &str,
    contract_key: &str,
) -> Result<Address, ScriptError> {
    deployed_address(file_path, contract_key)?.ok_or_else(|| {
        ScriptError::ReadDeployments(format!(
            "no `{contract_key}` address recorded in {file_path}"
        ))
    })
}

/// Look up the address of the given contract in the deployments file,
/// returning `None` if the file or the key does not exist
pub fn deployed_address(
    file_path: &str,
    contract_key: &str,
) -> Result<Option<Address>, ScriptError> {
    if !PathBuf::from(file_path).exists() {
        return Ok(None);
    }

    let parsed_json = get_json_from_file(file_path)?;
    match parsed_json[DEPLOYMENTS_KEY][contract_key].as_str() {
        Some(addr) => Address::from_str(addr)
            .map(Some)
            .map_err(|e| ScriptError::ReadDeployments(e.to_string())),
        None => Ok(None),
    }
}

/// Record the address of a deployed contract in the deployments file
pub fn write_deployed_address(
    file_path: &str,
    contract_key: &str,
    address: Address,
) -> Result<(), ScriptError> {
    // If the file doesn't exist, create it
    if !PathBuf::from(file_path).exists() {
        fs::write(file_path, "{}").map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
    }
    let mut parsed_json = get_json_from_file(file_path)?;

    parsed_json[DEPLOYMENTS_KEY][contract_key] = JsonValue::String(format!("{address:#x}"));

    fs::write(file_path, json::stringify_pretty(parsed_json, 4))
        .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use ethers::abi::Address;

    use super::{deployed_address, parse_addr_from_deployments_file, write_deployed_address};
    use crate::constants::{BTRST_CONTRACT_KEY, MEMBERSHIP_NFT_PROXY_CONTRACT_KEY};

    #[test]
    fn roundtrips_deployed_addresses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        let path = path.to_str().unwrap();

        let token = Address::random();
        let proxy = Address::random();

        write_deployed_address(path, BTRST_CONTRACT_KEY, token).unwrap();
        write_deployed_address(path, MEMBERSHIP_NFT_PROXY_CONTRACT_KEY, proxy).unwrap();

        assert_eq!(
            parse_addr_from_deployments_file(path, BTRST_CONTRACT_KEY).unwrap(),
            token
        );
        assert_eq!(
            parse_addr_from_deployments_file(path, MEMBERSHIP_NFT_PROXY_CONTRACT_KEY).unwrap(),
            proxy
        );
    }

    #[test]
    fn missing_file_and_key_resolve_to_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        let path = path.to_str().unwrap();

        assert!(deployed_address(path, BTRST_CONTRACT_KEY).unwrap().is_none());

        write_deployed_address(path, BTRST_CONTRACT_KEY, Address::random()).unwrap();
        assert!(deployed_address(path, MEMBERSHIP_NFT_PROXY_CONTRACT_KEY)
            .unwrap()
            .is_none());

        assert!(parse_addr_from_deployments_file(path, MEMBERSHIP_NFT_PROXY_CONTRACT_KEY).is_err());
    }
}
