//! Definitions of CLI arguments and commands for the deploy scripts

use std::{path::PathBuf, sync::Arc};

use clap::{Args, Parser, Subcommand};

use crate::{
    commands::{
        deploy_all, deploy_membership_nft, deploy_token, set_base_uri, set_relayer, upgrade,
    },
    errors::ScriptError,
    network::NetworkProfile,
    utils::LocalWalletHttpClient,
};

/// Deploy & manage the BTRST token and membership NFT contracts
#[derive(Parser)]
pub struct Cli {
    /// Name of the network profile to run against
    #[arg(short, long, default_value = "local")]
    pub network: String,

    /// Path to the JSON file of network profiles
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Private key of the deployer (overrides the network profile)
    // TODO: Better key management
    #[arg(short, long, env = "DEPLOYER_PRIVATE_KEY")]
    pub priv_key: Option<String>,

    /// Network RPC URL (overrides the network profile)
    #[arg(short, long)]
    pub rpc_url: Option<String>,

    /// Directory containing the compiled contract artifacts
    #[arg(short, long, default_value = "artifacts")]
    pub artifacts_dir: PathBuf,

    /// Path to the deployments file for the target network
    #[arg(short, long, default_value = "deployments.json")]
    pub deployments_path: String,

    /// The script to run
    #[command(subcommand)]
    pub command: Command,
}

/// Resolved per-run context shared by every command
pub struct ScriptContext {
    /// Directory containing the compiled contract artifacts
    pub artifacts_dir: PathBuf,
    /// Path to the deployments file for the target network
    pub deployments_path: String,
    /// The resolved network profile
    pub profile: NetworkProfile,
}

/// The scripts that can be run
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the BTRST ERC-20 contract
    DeployToken(DeployTokenArgs),
    /// Deploy the membership NFT behind an upgradeable proxy
    DeployMembershipNft(DeployMembershipNftArgs),
    /// Deploy the token (when not already deployed) followed by the membership NFT
    DeployAll(DeployAllArgs),
    /// Upgrade the membership NFT implementation
    Upgrade(UpgradeArgs),
    /// Set the metadata base URI on the deployed membership NFT
    SetBaseUri(SetBaseUriArgs),
    /// Set the relayer address on the deployed membership NFT
    SetRelayer(SetRelayerArgs),
}

impl Command {
    /// Run the command against the given client
    pub async fn run(
        self,
        client: Arc<LocalWalletHttpClient>,
        ctx: &ScriptContext,
    ) -> Result<(), ScriptError> {
        match self {
            Command::DeployToken(args) => deploy_token(args, client, ctx).await.map(|_| ()),
            Command::DeployMembershipNft(args) => deploy_membership_nft(args, client, ctx).await,
            Command::DeployAll(args) => deploy_all(args, client, ctx).await,
            Command::Upgrade(args) => upgrade(args, client, ctx).await,
            Command::SetBaseUri(args) => set_base_uri(args, client, ctx).await,
            Command::SetRelayer(args) => set_relayer(args, client, ctx).await,
        }
    }
}

/// Deploy the BTRST ERC-20 contract
#[derive(Args)]
pub struct DeployTokenArgs {
    /// Address receiving the initial token supply, defaults to the deployer
    #[arg(short, long)]
    pub foundation: Option<String>,
}

/// Deploy the membership NFT implementation and a
/// [`TransparentUpgradeableProxy`](https://docs.openzeppelin.com/contracts/5.x/api/proxy#transparent_proxy)
/// over it, which itself deploys a `ProxyAdmin` contract.
///
/// Calls made directly to the proxy are forwarded to the implementation;
/// upgrades can only be made through the `ProxyAdmin`, owned by the multisig.
/// The proxy constructor invokes `initialize(relayer, tokenAddress, baseURI)`
/// on the implementation.
#[derive(Args)]
pub struct DeployMembershipNftArgs {
    /// Relayer address authorized to mint, in hex
    /// (overrides the network profile)
    #[arg(long)]
    pub relayer: Option<String>,

    /// Multisig address owning the proxy admin, in hex
    /// (overrides the network profile; defaults to the deployer)
    #[arg(long)]
    pub multisig: Option<String>,

    /// BTRST token address in hex (overrides the network profile
    /// and the deployments file)
    #[arg(long)]
    pub token: Option<String>,

    /// Metadata base URI for the membership NFT
    #[arg(long)]
    pub base_uri: Option<String>,
}

/// Deploy the whole stack in dependency order
#[derive(Args)]
pub struct DeployAllArgs {
    /// Address receiving the initial token supply, defaults to the deployer
    #[arg(short, long)]
    pub foundation: Option<String>,

    /// Relayer address authorized to mint, in hex
    #[arg(long)]
    pub relayer: Option<String>,

    /// Multisig address owning the proxy admin, in hex
    #[arg(long)]
    pub multisig: Option<String>,

    /// BTRST token address in hex, when the token is already deployed
    #[arg(long)]
    pub token: Option<String>,

    /// Metadata base URI for the membership NFT
    #[arg(long)]
    pub base_uri: Option<String>,
}

/// Upgrade the membership NFT implementation through the proxy admin
#[derive(Args)]
pub struct UpgradeArgs {
    /// Address of the proxy admin contract, defaults to the deployments file
    #[arg(long)]
    pub proxy_admin: Option<String>,

    /// Address of the proxy contract, defaults to the deployments file
    #[arg(long)]
    pub proxy: Option<String>,

    /// Address of the new implementation contract; when omitted a fresh
    /// implementation is deployed from the artifacts directory
    #[arg(short, long)]
    pub implementation: Option<String>,

    /// Optional calldata, in hex form, with which to
    /// call the implementation contract when upgrading
    #[arg(long)]
    pub calldata: Option<String>,
}

/// Set the metadata base URI on the deployed membership NFT
#[derive(Args)]
pub struct SetBaseUriArgs {
    /// The new base URI
    #[arg(short, long)]
    pub base_uri: String,
}

/// Set the relayer address on the deployed membership NFT
#[derive(Args)]
pub struct SetRelayerArgs {
    /// The new relayer address, in hex
    #[arg(short, long)]
    pub relayer: String,
}
