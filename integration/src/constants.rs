//! Constants used in the integration tests

/// The default hostport that the local devnet node runs on
pub(crate) const DEFAULT_DEVNET_HOSTPORT: &str = "http://localhost:8545";

/// The default private key that the devnet is seeded with; its account
/// deploys the contracts and holds the initial BTRST supply
pub(crate) const DEFAULT_DEVNET_PKEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// The second devnet private key, used as the relayer account
pub(crate) const DEFAULT_RELAYER_PKEY: &str =
    "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

/// The amount of gas money, in wei, sent to each throwaway test wallet
pub(crate) const FUNDING_AMOUNT_WEI: u64 = 1_000_000_000_000_000_000;

/// The amount of BTRST base units moved around in deposit & lock scenarios
pub(crate) const TRANSFER_AMOUNT: u64 = 1000;
