//! Defines types and utilities for managing the inventory of integration tests

use std::{future::Future, pin::Pin, sync::Arc};

use ethers::abi::Address;
use eyre::Result;
use scripts::utils::LocalWalletHttpClient;

use crate::abis::{BtrstContract, MembershipNftContract};

/// The arguments provided to each integration test
#[derive(Clone)]
pub struct TestArgs {
    /// The RPC client signing as the contract owner / foundation
    pub client: Arc<LocalWalletHttpClient>,
    /// The RPC client signing as the relayer
    pub relayer_client: Arc<LocalWalletHttpClient>,
    /// The devnet RPC URL, for connecting throwaway wallets
    pub rpc_url: String,
    /// The address of the BTRST token contract
    pub btrst_address: Address,
    /// The address of the membership NFT proxy contract
    pub nft_proxy_address: Address,
}

impl TestArgs {
    /// The membership NFT bound to the given signer
    pub fn nft(
        &self,
        client: Arc<LocalWalletHttpClient>,
    ) -> MembershipNftContract<LocalWalletHttpClient> {
        MembershipNftContract::new(self.nft_proxy_address, client)
    }

    /// The BTRST token bound to the given signer
    pub fn btrst(
        &self,
        client: Arc<LocalWalletHttpClient>,
    ) -> BtrstContract<LocalWalletHttpClient> {
        BtrstContract::new(self.btrst_address, client)
    }
}

/// The signature of an integration test
type TestFn = fn(TestArgs) -> Pin<Box<dyn Future<Output = Result<()>>>>;

/// A struct representing an integration test
pub struct IntegrationTest {
    /// The name of the test
    pub name: &'static str,
    /// The test function
    pub test_fn: TestFn,
}

// Collect the integration tests into an iterable
inventory::collect!(IntegrationTest);

/// Macro to register an integration test
#[macro_export]
macro_rules! integration_test {
    ($test_fn:ident) => {
        inventory::submit!($crate::test_inventory::IntegrationTest {
            name: stringify!($test_fn),
            test_fn: move |args| std::boxed::Box::pin($test_fn(args)),
        });
    };
}
