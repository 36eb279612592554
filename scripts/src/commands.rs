//! Implementations of the various deploy & administration scripts

use std::{str::FromStr, sync::Arc};

use ethers::{
    abi::Address,
    contract::ContractFactory,
    providers::Middleware,
    types::{Bytes, H256},
    utils::hex::FromHex,
};
use tracing::{info, warn};

use crate::{
    artifacts::ContractArtifact,
    cli::{
        DeployAllArgs, DeployMembershipNftArgs, DeployTokenArgs, ScriptContext, SetBaseUriArgs,
        SetRelayerArgs, UpgradeArgs,
    },
    constants::{
        BTRST_ARTIFACT_NAME, BTRST_CONTRACT_KEY, DEFAULT_BASE_URI, MEMBERSHIP_NFT_ARTIFACT_NAME,
        MEMBERSHIP_NFT_IMPL_CONTRACT_KEY, MEMBERSHIP_NFT_PROXY_ADMIN_CONTRACT_KEY,
        MEMBERSHIP_NFT_PROXY_CONTRACT_KEY, NUM_BYTES_ADDRESS, NUM_BYTES_STORAGE_SLOT,
        NUM_DEPLOY_CONFIRMATIONS, PROXY_ADMIN_STORAGE_SLOT, PROXY_ARTIFACT_NAME,
    },
    deployments::{deployed_address, parse_addr_from_deployments_file, write_deployed_address},
    errors::ScriptError,
    solidity::{MembershipNftAdminContract, ProxyAdminContract},
    utils::{membership_initialize_calldata, parse_address, LocalWalletHttpClient},
};

/// Deploy a contract from its compiled artifact, returning its address
async fn deploy_from_artifact<T: ethers::abi::Tokenize>(
    client: Arc<LocalWalletHttpClient>,
    ctx: &ScriptContext,
    contract_name: &str,
    constructor_args: T,
) -> Result<Address, ScriptError> {
    let artifact = ContractArtifact::read(&ctx.artifacts_dir, contract_name)?;
    let factory = ContractFactory::new(artifact.abi, artifact.bytecode, client);

    let contract = factory
        .deploy(constructor_args)
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
        .confirmations(NUM_DEPLOY_CONFIRMATIONS)
        .send()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    Ok(contract.address())
}

/// Deploy the BTRST ERC-20 contract, recording its address
/// in the deployments file
pub(crate) async fn deploy_token(
    args: DeployTokenArgs,
    client: Arc<LocalWalletHttpClient>,
    ctx: &ScriptContext,
) -> Result<Address, ScriptError> {
    let foundation = match args.foundation {
        Some(addr) => parse_address(&addr)?,
        None => client.address(),
    };

    info!("deploying BTRST with foundation address {foundation:#x}");
    let token_address =
        deploy_from_artifact(client, ctx, BTRST_ARTIFACT_NAME, foundation).await?;

    write_deployed_address(&ctx.deployments_path, BTRST_CONTRACT_KEY, token_address)?;
    info!("BTRST deployed at {token_address:#x}");

    Ok(token_address)
}

/// Deploy the membership NFT implementation and its upgradeable proxy,
/// verifying afterwards that the proxy constructor actually executed the
/// initializer (rather than assuming the deploy tooling did so)
pub(crate) async fn deploy_membership_nft(
    args: DeployMembershipNftArgs,
    client: Arc<LocalWalletHttpClient>,
    ctx: &ScriptContext,
) -> Result<(), ScriptError> {
    let relayer = args
        .relayer
        .as_deref()
        .or(ctx.profile.relayer.as_deref())
        .ok_or_else(|| {
            ScriptError::NetworkConfig("no relayer address configured".to_string())
        })
        .and_then(parse_address)?;

    let multisig = match args.multisig.as_deref().or(ctx.profile.multisig.as_deref()) {
        Some(addr) => parse_address(addr)?,
        None => {
            warn!("no multisig configured, proxy admin will be owned by the deployer");
            client.address()
        }
    };

    let token_address = match args.token.as_deref().or(ctx.profile.btrst_token.as_deref()) {
        Some(addr) => parse_address(addr)?,
        None => deployed_address(&ctx.deployments_path, BTRST_CONTRACT_KEY)?.ok_or_else(|| {
            ScriptError::NetworkConfig(
                "no BTRST address known; run `deploy-token` first or pass --token".to_string(),
            )
        })?,
    };

    let base_uri = args
        .base_uri
        .as_deref()
        .or(ctx.profile.base_uri.as_deref())
        .unwrap_or(DEFAULT_BASE_URI);

    info!(
        "deploying membership NFT with relayer {relayer:#x}, token {token_address:#x}, base URI {base_uri}"
    );

    // Implementation contract
    let impl_address =
        deploy_from_artifact(client.clone(), ctx, MEMBERSHIP_NFT_ARTIFACT_NAME, ()).await?;
    write_deployed_address(
        &ctx.deployments_path,
        MEMBERSHIP_NFT_IMPL_CONTRACT_KEY,
        impl_address,
    )?;
    info!("membership NFT implementation deployed at {impl_address:#x}");

    // Proxy contract, initializing the implementation in its constructor
    let init_calldata = Bytes::from(membership_initialize_calldata(
        relayer,
        token_address,
        base_uri,
    )?);
    let proxy_address = deploy_from_artifact(
        client.clone(),
        ctx,
        PROXY_ARTIFACT_NAME,
        (impl_address, multisig, init_calldata),
    )
    .await?;
    write_deployed_address(
        &ctx.deployments_path,
        MEMBERSHIP_NFT_PROXY_CONTRACT_KEY,
        proxy_address,
    )?;

    // Get proxy admin contract address
    // This is the recommended way to get the proxy admin address:
    // https://github.com/OpenZeppelin/openzeppelin-contracts/blob/v5.0.0/contracts/proxy/ERC1967/ERC1967Utils.sol#L104-L106
    let proxy_admin_address = Address::from_slice(
        &client
            .get_storage_at(
                proxy_address,
                // Can `unwrap` here since we know the storage slot constitutes a valid H256
                H256::from_str(PROXY_ADMIN_STORAGE_SLOT).unwrap(),
                None, /* block */
            )
            .await
            .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?
            [NUM_BYTES_STORAGE_SLOT - NUM_BYTES_ADDRESS..NUM_BYTES_STORAGE_SLOT],
    );
    write_deployed_address(
        &ctx.deployments_path,
        MEMBERSHIP_NFT_PROXY_ADMIN_CONTRACT_KEY,
        proxy_admin_address,
    )?;

    info!("membership NFT proxy deployed at {proxy_address:#x}");
    info!("membership NFT proxy admin deployed at {proxy_admin_address:#x}");

    // Read the relayer back through the proxy. A zero relayer means the
    // initializer never ran, which leaves the proxy unusable and claimable.
    let nft = MembershipNftAdminContract::new(proxy_address, client);
    let relayer_onchain = nft
        .relayer()
        .call()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    if relayer_onchain != relayer {
        return Err(ScriptError::ContractInteraction(format!(
            "proxy initializer was not executed: on-chain relayer is {relayer_onchain:#x}, expected {relayer:#x}"
        )));
    }

    Ok(())
}

/// Deploy the token (when no address is already known) followed by the
/// membership NFT proxy
pub(crate) async fn deploy_all(
    args: DeployAllArgs,
    client: Arc<LocalWalletHttpClient>,
    ctx: &ScriptContext,
) -> Result<(), ScriptError> {
    let token_known = args.token.is_some()
        || ctx.profile.btrst_token.is_some()
        || deployed_address(&ctx.deployments_path, BTRST_CONTRACT_KEY)?.is_some();

    if !token_known {
        deploy_token(
            DeployTokenArgs {
                foundation: args.foundation,
            },
            client.clone(),
            ctx,
        )
        .await?;
    }

    deploy_membership_nft(
        DeployMembershipNftArgs {
            relayer: args.relayer,
            multisig: args.multisig,
            token: args.token,
            base_uri: args.base_uri,
        },
        client,
        ctx,
    )
    .await
}

/// Upgrade the membership NFT implementation through the proxy admin
pub(crate) async fn upgrade(
    args: UpgradeArgs,
    client: Arc<LocalWalletHttpClient>,
    ctx: &ScriptContext,
) -> Result<(), ScriptError> {
    let proxy_admin_address = match args.proxy_admin {
        Some(addr) => parse_address(&addr)?,
        None => parse_addr_from_deployments_file(
            &ctx.deployments_path,
            MEMBERSHIP_NFT_PROXY_ADMIN_CONTRACT_KEY,
        )?,
    };
    let proxy_address = match args.proxy {
        Some(addr) => parse_address(&addr)?,
        None => parse_addr_from_deployments_file(
            &ctx.deployments_path,
            MEMBERSHIP_NFT_PROXY_CONTRACT_KEY,
        )?,
    };

    let implementation_address = match args.implementation {
        Some(addr) => parse_address(&addr)?,
        None => {
            let addr =
                deploy_from_artifact(client.clone(), ctx, MEMBERSHIP_NFT_ARTIFACT_NAME, ())
                    .await?;
            write_deployed_address(
                &ctx.deployments_path,
                MEMBERSHIP_NFT_IMPL_CONTRACT_KEY,
                addr,
            )?;
            info!("new membership NFT implementation deployed at {addr:#x}");
            addr
        }
    };

    let data = if let Some(calldata) = args.calldata {
        Bytes::from_hex(calldata).map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?
    } else {
        Bytes::new()
    };

    let proxy_admin = ProxyAdminContract::new(proxy_admin_address, client);
    proxy_admin
        .upgrade_and_call(proxy_address, implementation_address, data)
        .send()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    info!("membership NFT proxy upgraded to {implementation_address:#x}");

    Ok(())
}

/// Set the metadata base URI on the deployed membership NFT
pub(crate) async fn set_base_uri(
    args: SetBaseUriArgs,
    client: Arc<LocalWalletHttpClient>,
    ctx: &ScriptContext,
) -> Result<(), ScriptError> {
    let nft = membership_nft_from_deployments(client, ctx)?;
    nft.set_base_uri(args.base_uri.clone())
        .send()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    info!("membership NFT base URI set to {}", args.base_uri);

    Ok(())
}

/// Set the relayer address on the deployed membership NFT
pub(crate) async fn set_relayer(
    args: SetRelayerArgs,
    client: Arc<LocalWalletHttpClient>,
    ctx: &ScriptContext,
) -> Result<(), ScriptError> {
    let relayer = parse_address(&args.relayer)?;

    let nft = membership_nft_from_deployments(client, ctx)?;
    nft.set_relayer(relayer)
        .send()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    info!("membership NFT relayer set to {relayer:#x}");

    Ok(())
}

/// Instantiate the admin surface of the membership NFT at the proxy address
/// recorded in the deployments file
fn membership_nft_from_deployments(
    client: Arc<LocalWalletHttpClient>,
    ctx: &ScriptContext,
) -> Result<MembershipNftAdminContract<LocalWalletHttpClient>, ScriptError> {
    let proxy_address = parse_addr_from_deployments_file(
        &ctx.deployments_path,
        MEMBERSHIP_NFT_PROXY_CONTRACT_KEY,
    )?;

    Ok(MembershipNftAdminContract::new(proxy_address, client))
}
