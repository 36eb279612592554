//! Utilities for the contract management scripts.

use std::{str::FromStr, sync::Arc};

use alloy_primitives::Address as AlloyAddress;
use alloy_sol_types::SolCall;
use ethers::{
    abi::Address,
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
};

use crate::{errors::ScriptError, solidity::initializeCall};

/// An HTTP provider signing with a locally held key
pub type LocalWalletHttpClient = SignerMiddleware<Provider<Http>, LocalWallet>;

/// Sets up the client with which to deploy & interact with the contracts,
/// signing with the given private key against the given RPC endpoint.
pub async fn setup_client(
    priv_key: &str,
    rpc_url: &str,
) -> Result<Arc<LocalWalletHttpClient>, ScriptError> {
    let provider = Provider::<Http>::try_from(rpc_url)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let wallet = LocalWallet::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let chain_id = provider
        .get_chainid()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?
        .as_u64();
    let client = Arc::new(SignerMiddleware::new(
        provider,
        wallet.clone().with_chain_id(chain_id),
    ));

    Ok(client)
}

/// Parse an Ethereum address from its hex representation
pub fn parse_address(addr: &str) -> Result<Address, ScriptError> {
    Address::from_str(addr).map_err(|e| ScriptError::CalldataConstruction(e.to_string()))
}

/// Prepare calldata for the membership NFT contract's `initialize` method
pub fn membership_initialize_calldata(
    relayer: Address,
    token_address: Address,
    base_uri: &str,
) -> Result<Vec<u8>, ScriptError> {
    let relayer = AlloyAddress::from_slice(relayer.as_bytes());
    let token_address = AlloyAddress::from_slice(token_address.as_bytes());

    Ok(initializeCall {
        relayer,
        token_address,
        base_uri: base_uri.to_string(),
    }
    .abi_encode())
}

#[cfg(test)]
mod tests {
    use ethers::{abi::Address, utils::id};

    use super::{membership_initialize_calldata, parse_address};

    #[test]
    fn initialize_calldata_carries_the_right_selector() {
        let calldata = membership_initialize_calldata(
            Address::random(),
            Address::random(),
            "https://app9.bthexocean.com/nft/metadata/",
        )
        .unwrap();

        let selector = id("initialize(address,address,string)");
        assert_eq!(&calldata[..4], selector.as_slice());
    }

    #[test]
    fn addresses_parse_from_hex() {
        let addr = parse_address("0x52908400098527886E0F7030069857D2E4169EE7").unwrap();
        assert_eq!(
            format!("{addr:#x}"),
            "0x52908400098527886e0f7030069857d2e4169ee7"
        );

        assert!(parse_address("not-an-address").is_err());
    }
}
