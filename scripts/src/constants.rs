//! Constants used in the contract management scripts

/// The artifact name of the BTRST ERC-20 contract
pub const BTRST_ARTIFACT_NAME: &str = "BTRST";

/// The artifact name of the membership NFT implementation contract
pub const MEMBERSHIP_NFT_ARTIFACT_NAME: &str = "BraintrustMembershipNFT";

/// The artifact name of the upgradeable proxy contract
///
/// Compiled from https://github.com/OpenZeppelin/openzeppelin-contracts/blob/v5.0.0/contracts/proxy/transparent/TransparentUpgradeableProxy.sol
pub const PROXY_ARTIFACT_NAME: &str = "TransparentUpgradeableProxy";

/// The number of confirmations to wait for each deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: usize = 0;

/// The storage slot containing the proxy admin contract address in the upgradeable proxy.
///
/// This is specified in EIP1967: https://eips.ethereum.org/EIPS/eip-1967#admin-address
pub const PROXY_ADMIN_STORAGE_SLOT: &str =
    "0xb53127684a568b3173ae13b9f8a6016e243e63b6e8ee1178d6a717850b5d6103";

/// The number of bytes stored in a single storage slot
pub const NUM_BYTES_STORAGE_SLOT: usize = 32;

/// The number of bytes in an Ethereum address
pub const NUM_BYTES_ADDRESS: usize = 20;

/// The deployments key in the `deployments.json` file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The BTRST contract key in the `deployments.json` file
pub const BTRST_CONTRACT_KEY: &str = "btrst_contract";

/// The membership NFT implementation contract key in the `deployments.json` file
pub const MEMBERSHIP_NFT_IMPL_CONTRACT_KEY: &str = "membership_nft_contract";

/// The membership NFT proxy contract key in the `deployments.json` file
pub const MEMBERSHIP_NFT_PROXY_CONTRACT_KEY: &str = "membership_nft_proxy_contract";

/// The membership NFT proxy admin contract key in the `deployments.json` file
pub const MEMBERSHIP_NFT_PROXY_ADMIN_CONTRACT_KEY: &str = "membership_nft_proxy_admin_contract";

/// The default hostport that a local devnet node runs on
pub const DEFAULT_DEVNET_HOSTPORT: &str = "http://localhost:8545";

/// The default private key that local devnets are seeded with
pub const DEFAULT_DEVNET_PKEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// The metadata base URI used when a network profile does not override it
pub const DEFAULT_BASE_URI: &str = "https://app9.bthexocean.com/nft/metadata/";
