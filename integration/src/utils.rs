//! Utilities for running the integration tests

use std::sync::Arc;

use ethers::{
    abi::{Address, Detokenize, RawLog},
    contract::{builders::ContractCall, EthLogDecode},
    providers::Middleware,
    signers::{LocalWallet, Signer},
    types::{TransactionReceipt, TransactionRequest, U256},
};
use eyre::{ensure, eyre, Result};
use rand::thread_rng;
use scripts::utils::{setup_client, LocalWalletHttpClient};

use crate::{
    abis::{MembershipNftContractErrors, MintFilter},
    constants::FUNDING_AMOUNT_WEI,
    test_inventory::TestArgs,
};

/// Send a transaction and wait for its receipt
pub(crate) async fn send_and_confirm<D: Detokenize>(
    call: ContractCall<LocalWalletHttpClient, D>,
) -> Result<TransactionReceipt> {
    call.send()
        .await?
        .await?
        .ok_or_else(|| eyre!("transaction dropped from the mempool"))
}

/// Send a transaction expected to revert, returning the decoded custom error
pub(crate) async fn expect_revert<D: Detokenize>(
    call: ContractCall<LocalWalletHttpClient, D>,
) -> Result<MembershipNftContractErrors> {
    match call.send().await {
        Ok(_) => Err(eyre!("expected the transaction to revert, but it succeeded")),
        Err(err) => err
            .decode_contract_revert::<MembershipNftContractErrors>()
            .ok_or_else(|| eyre!("transaction reverted without a decodable reason: {err}")),
    }
}

/// Assert that a call reverts with the given custom error pattern
macro_rules! assert_reverts_with {
    ($call:expr, $($pattern:tt)+) => {{
        let reason = $crate::utils::expect_revert($call).await?;
        eyre::ensure!(
            matches!(reason, $($pattern)+),
            "expected revert with {}, got {:?}",
            stringify!($($pattern)+),
            reason,
        );
    }};
}
pub(crate) use assert_reverts_with;

/// Assert that a state-changing call succeeds for the owner and reverts for
/// anyone else
pub(crate) async fn assert_only_owner<D: Detokenize>(
    owner_call: ContractCall<LocalWalletHttpClient, D>,
    non_owner_call: ContractCall<LocalWalletHttpClient, D>,
) -> Result<()> {
    ensure!(
        non_owner_call.send().await.is_err(),
        "non-owner call succeeded"
    );
    send_and_confirm(owner_call).await?;

    Ok(())
}

/// Parse the first decodable event of the given type out of a receipt
pub(crate) fn parse_event<E: EthLogDecode>(receipt: &TransactionReceipt) -> Result<E> {
    receipt
        .logs
        .iter()
        .find_map(|log| E::decode_log(&RawLog::from(log.clone())).ok())
        .ok_or_else(|| eyre!("expected event not found in receipt"))
}

/// Create a throwaway wallet and fund it with gas money from the foundation
/// account.
///
/// Scenarios run against a persistent devnet, and a wallet can only ever
/// receive one membership NFT, so signers are never reused across tests.
pub(crate) async fn new_funded_wallet(args: &TestArgs) -> Result<Arc<LocalWalletHttpClient>> {
    let wallet = LocalWallet::new(&mut thread_rng());
    let priv_key = hex::encode(wallet.signer().to_bytes());
    let client = setup_client(&priv_key, &args.rpc_url).await?;

    let funding = TransactionRequest::pay(wallet.address(), FUNDING_AMOUNT_WEI);
    args.client
        .send_transaction(funding, None)
        .await?
        .await?
        .ok_or_else(|| eyre!("funding transaction dropped from the mempool"))?;

    Ok(client)
}

/// Transfer BTRST from the foundation account to the given address
pub(crate) async fn fund_btrst(args: &TestArgs, to: Address, amount: U256) -> Result<()> {
    send_and_confirm(args.btrst(args.client.clone()).transfer(to, amount)).await?;

    Ok(())
}

/// Give the relayer `amount` BTRST to escrow, approved to the membership NFT
/// contract; lock scenarios move tokens held by the relayer on the user's
/// behalf
pub(crate) async fn fund_relayer(args: &TestArgs, amount: U256) -> Result<()> {
    fund_btrst(args, args.relayer_client.address(), amount).await?;
    send_and_confirm(
        args.btrst(args.relayer_client.clone())
            .approve(args.nft_proxy_address, amount),
    )
    .await?;

    Ok(())
}

/// Mint a membership NFT to the given address as the relayer, returning the
/// token id from the mint event
pub(crate) async fn mint_membership(args: &TestArgs, to: Address) -> Result<U256> {
    let external_id = U256::from(rand::random::<u64>());
    let receipt = send_and_confirm(
        args.nft(args.relayer_client.clone())
            .safe_mint(to, external_id),
    )
    .await?;

    let mint: MintFilter = parse_event(&receipt)?;
    ensure!(mint.to == to, "mint event has the wrong recipient");
    ensure!(
        mint.external_id == external_id,
        "mint event has the wrong external id"
    );

    Ok(mint.token_id)
}

/// A freshly set up wallet holding a membership NFT
pub(crate) struct Member {
    /// The member's RPC client
    pub(crate) client: Arc<LocalWalletHttpClient>,
    /// The member's address
    pub(crate) address: Address,
    /// The member's membership token id
    pub(crate) token_id: U256,
}

/// Set up a fresh wallet with gas money and a minted membership NFT
pub(crate) async fn setup_member(args: &TestArgs) -> Result<Member> {
    let client = new_funded_wallet(args).await?;
    let address = client.address();
    let token_id = mint_membership(args, address).await?;

    Ok(Member {
        client,
        address,
        token_id,
    })
}

/// Set up a member additionally holding `amount` BTRST, pre-approved to the
/// membership NFT contract
pub(crate) async fn setup_funded_member(args: &TestArgs, amount: U256) -> Result<Member> {
    let member = setup_member(args).await?;
    fund_btrst(args, member.address, amount).await?;
    send_and_confirm(
        args.btrst(member.client.clone())
            .approve(args.nft_proxy_address, amount),
    )
    .await?;

    Ok(member)
}

/// Advance the devnet's clock and mine a block, so that lock maturities can
/// be crossed without waiting in real time
pub(crate) async fn advance_chain_time(args: &TestArgs, seconds: u64) -> Result<()> {
    let provider = args.client.provider();
    provider
        .request::<_, serde_json::Value>("evm_increaseTime", [seconds])
        .await?;
    provider
        .request::<_, serde_json::Value>("evm_mine", Vec::<u64>::new())
        .await?;

    Ok(())
}
