//! Integration tests for the BTRST token and membership NFT contracts.
//!
//! These assume that a devnet is already running locally and that the
//! contracts have been deployed to it with the deploy scripts.

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use eyre::Result;
use scripts::{
    constants::{BTRST_CONTRACT_KEY, MEMBERSHIP_NFT_PROXY_CONTRACT_KEY},
    deployments::parse_addr_from_deployments_file,
    utils::setup_client,
};
use test_inventory::{IntegrationTest, TestArgs};

mod abis;
mod cli;
mod constants;
mod test_inventory;
mod tests;
mod utils;

#[tokio::main]
async fn main() -> Result<()> {
    let Cli {
        test,
        deployments_file,
        priv_key,
        relayer_priv_key,
        rpc_url,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    let client = setup_client(&priv_key, &rpc_url).await?;
    let relayer_client = setup_client(&relayer_priv_key, &rpc_url).await?;
    let btrst_address = parse_addr_from_deployments_file(&deployments_file, BTRST_CONTRACT_KEY)?;
    let nft_proxy_address =
        parse_addr_from_deployments_file(&deployments_file, MEMBERSHIP_NFT_PROXY_CONTRACT_KEY)?;

    let args = TestArgs {
        client,
        relayer_client,
        rpc_url,
        btrst_address,
        nft_proxy_address,
    };

    let mut num_run = 0;
    let mut failures = 0;
    for integration_test in inventory::iter::<IntegrationTest> {
        if test
            .as_deref()
            .is_some_and(|name| name != integration_test.name)
        {
            continue;
        }
        num_run += 1;

        println!("Running {}...", integration_test.name.bold());
        match (integration_test.test_fn)(args.clone()).await {
            Ok(()) => println!("{}", "PASS".green()),
            Err(e) => {
                failures += 1;
                println!("{}: {e}", "FAIL".red());
            }
        }
    }

    if num_run == 0 {
        eyre::bail!("no test matched the given filter");
    }
    if failures > 0 {
        eyre::bail!("{failures}/{num_run} tests failed");
    }

    println!("{}", format!("{num_run}/{num_run} tests passed").green());
    Ok(())
}
