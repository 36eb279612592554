//! Definition of the CLI arguments for integration tests

use clap::Parser;

use crate::constants::{DEFAULT_DEVNET_HOSTPORT, DEFAULT_DEVNET_PKEY, DEFAULT_RELAYER_PKEY};

/// CLI tool for running integration tests against a running devnet node.
///
/// Assumes that the contracts have already been deployed to the devnet with
/// the deploy scripts, using the same owner & relayer keys given here.
#[derive(Parser)]
pub(crate) struct Cli {
    /// Name of a single test to run; the full suite runs when omitted
    #[arg(short, long)]
    pub(crate) test: Option<String>,

    /// Path to file containing contract deployment info
    #[arg(short, long, default_value = "deployments.json")]
    pub(crate) deployments_file: String,

    /// Private key of the contract owner & BTRST foundation account,
    /// defaults to the first devnet key
    #[arg(short, long, env = "DEPLOYER_PRIVATE_KEY", default_value = DEFAULT_DEVNET_PKEY)]
    pub(crate) priv_key: String,

    /// Private key of the relayer account, defaults to the second devnet key
    #[arg(long, default_value = DEFAULT_RELAYER_PKEY)]
    pub(crate) relayer_priv_key: String,

    /// Devnet RPC URL
    #[arg(short, long, default_value = DEFAULT_DEVNET_HOSTPORT)]
    pub(crate) rpc_url: String,
}
