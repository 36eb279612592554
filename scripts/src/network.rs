//! Per-network deployment profiles.
//!
//! A profile declares where to deploy (RPC URL), who signs (deployer key),
//! and the named accounts that differ between networks: the relayer, the
//! multisig owning the proxy admin, and a pre-existing BTRST token address.
//! Profiles are read from a JSON file keyed by network name; `${VAR}`
//! placeholders in any string field are substituted from the environment so
//! that key material and RPC project ids stay out of the config file.

use std::{collections::HashMap, env, fs, path::Path};

use serde::Deserialize;

use crate::{
    constants::{DEFAULT_DEVNET_HOSTPORT, DEFAULT_DEVNET_PKEY},
    errors::ScriptError,
};

/// The name of the built-in local devnet profile
pub const LOCAL_NETWORK: &str = "local";

/// A single network's deployment profile
#[derive(Clone, Debug, Deserialize)]
pub struct NetworkProfile {
    /// The network RPC URL
    pub rpc_url: String,
    /// The deployer private key; normally left to the
    /// `DEPLOYER_PRIVATE_KEY` environment variable via `${...}` substitution
    #[serde(default)]
    pub priv_key: Option<String>,
    /// The relayer address authorized to mint membership NFTs
    #[serde(default)]
    pub relayer: Option<String>,
    /// The multisig address owning the proxy admin
    #[serde(default)]
    pub multisig: Option<String>,
    /// The address of an already-deployed BTRST token, if any
    #[serde(default)]
    pub btrst_token: Option<String>,
    /// The metadata base URI for the membership NFT
    #[serde(default)]
    pub base_uri: Option<String>,
    /// The block-explorer API key, for external contract verification tooling
    #[serde(default)]
    pub etherscan_api_key: Option<String>,
}

impl NetworkProfile {
    /// The built-in local devnet profile
    fn local() -> Self {
        NetworkProfile {
            rpc_url: DEFAULT_DEVNET_HOSTPORT.to_string(),
            priv_key: Some(DEFAULT_DEVNET_PKEY.to_string()),
            relayer: None,
            multisig: None,
            btrst_token: None,
            base_uri: None,
            etherscan_api_key: None,
        }
    }

    /// Substitute `${VAR}` placeholders in all string fields from the environment
    fn substitute_env(mut self) -> Result<Self, ScriptError> {
        self.rpc_url = substitute_env_vars(&self.rpc_url)?;
        for field in [
            &mut self.priv_key,
            &mut self.relayer,
            &mut self.multisig,
            &mut self.btrst_token,
            &mut self.base_uri,
            &mut self.etherscan_api_key,
        ] {
            if let Some(value) = field.take() {
                *field = Some(substitute_env_vars(&value)?);
            }
        }

        Ok(self)
    }
}

/// Load the profile for the given network.
///
/// The `local` profile has a built-in default and may be used without a
/// config file; every other network must appear in the config.
pub fn load_profile(
    config_path: Option<&Path>,
    network: &str,
) -> Result<NetworkProfile, ScriptError> {
    let mut profiles: HashMap<String, NetworkProfile> = match config_path {
        Some(path) => {
            let contents = fs::read_to_string(path).map_err(|e| {
                ScriptError::NetworkConfig(format!("{}: {}", path.display(), e))
            })?;
            serde_json::from_str(&contents)
                .map_err(|e| ScriptError::NetworkConfig(e.to_string()))?
        }
        None => HashMap::new(),
    };

    let profile = match profiles.remove(network) {
        Some(profile) => profile,
        None if network == LOCAL_NETWORK => NetworkProfile::local(),
        None => {
            return Err(ScriptError::NetworkConfig(format!(
                "network `{network}` not found in config"
            )))
        }
    };

    profile.substitute_env()
}

/// Replace every `${VAR}` occurrence in the input with the value of the
/// `VAR` environment variable, erroring on unset variables
fn substitute_env_vars(input: &str) -> Result<String, ScriptError> {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let end = after_open.find('}').ok_or_else(|| {
            ScriptError::NetworkConfig(format!("unclosed `${{` in `{input}`"))
        })?;

        let var = &after_open[..end];
        let value = env::var(var).map_err(|_| {
            ScriptError::NetworkConfig(format!("environment variable `{var}` is not set"))
        })?;
        result.push_str(&value);

        rest = &after_open[end + 1..];
    }
    result.push_str(rest);

    Ok(result)
}
