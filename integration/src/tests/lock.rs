//! Locked-deposit scenarios

use ethers::types::U256;
use eyre::{ensure, Result};

use crate::{
    abis::{LockFilter, MembershipNftContractErrors, NftDoesNotBelongToBeneficiary},
    constants::TRANSFER_AMOUNT,
    integration_test,
    test_inventory::TestArgs,
    utils::{assert_reverts_with, fund_relayer, parse_event, send_and_confirm, setup_member},
};

/// Locks escrow the amount and append entries queryable by index
async fn test_lock_escrows_and_is_queryable_by_index(args: TestArgs) -> Result<()> {
    let total = U256::from(TRANSFER_AMOUNT);
    let member = setup_member(&args).await?;
    fund_relayer(&args, total).await?;

    let nft_relayer = args.nft(args.relayer_client.clone());
    let nft = args.nft(args.client.clone());
    let btrst = args.btrst(args.client.clone());
    let min_period = nft.minimum_lock_period().call().await?;

    let escrow_before = btrst.balance_of(args.nft_proxy_address).call().await?;

    let first = total / 4;
    let second = total - first;
    let receipt = send_and_confirm(nft_relayer.lock(
        first,
        member.token_id,
        member.address,
        min_period,
        U256::one(),
    ))
    .await?;
    let event: LockFilter = parse_event(&receipt)?;
    ensure!(
        event.beneficiary == member.address
            && event.token_id == member.token_id
            && event.amount == first
            && event.external_id == U256::one(),
        "wrong lock event: {event:?}"
    );

    send_and_confirm(nft_relayer.lock(
        second,
        member.token_id,
        member.address,
        min_period + min_period,
        U256::from(2u64),
    ))
    .await?;

    let count = nft.get_locked_deposit_count(member.address).call().await?;
    ensure!(count == U256::from(2u64), "expected 2 lock entries, got {count}");

    let (amount_0, unlocked_at_0) = nft
        .get_locked_deposit(member.address, U256::zero())
        .call()
        .await?;
    let (amount_1, unlocked_at_1) = nft
        .get_locked_deposit(member.address, U256::one())
        .call()
        .await?;
    ensure!(
        amount_0 == first && amount_1 == second,
        "lock entries hold the wrong amounts: {amount_0}, {amount_1}"
    );
    ensure!(
        unlocked_at_0 == event.unlocked_at,
        "stored maturity disagrees with the lock event"
    );
    ensure!(
        unlocked_at_1 > unlocked_at_0,
        "the longer lock does not mature later"
    );

    let escrow_after = btrst.balance_of(args.nft_proxy_address).call().await?;
    ensure!(
        escrow_after - escrow_before == total,
        "escrow balance off by {}",
        escrow_after - escrow_before
    );

    // Locked funds are not withdrawable as unlocked balance
    let unlocked = nft.get_unlocked_deposit(member.address).call().await?;
    ensure!(unlocked == U256::zero(), "locked funds counted as unlocked");

    Ok(())
}
integration_test!(test_lock_escrows_and_is_queryable_by_index);

/// Lock periods below the contract's minimum are rejected
async fn test_lock_enforces_minimum_period(args: TestArgs) -> Result<()> {
    let amount = U256::from(TRANSFER_AMOUNT);
    let member = setup_member(&args).await?;
    fund_relayer(&args, amount).await?;

    let min_period = args
        .nft(args.client.clone())
        .minimum_lock_period()
        .call()
        .await?;
    ensure!(min_period > U256::zero(), "contract has no minimum lock period");

    assert_reverts_with!(
        args.nft(args.relayer_client.clone()).lock(
            amount,
            member.token_id,
            member.address,
            min_period - U256::one(),
            U256::one()
        ),
        MembershipNftContractErrors::InsufficientLockPeriod(_)
    );

    Ok(())
}
integration_test!(test_lock_enforces_minimum_period);

/// Locking against a token id not held by the beneficiary is rejected
async fn test_lock_requires_beneficiary_token(args: TestArgs) -> Result<()> {
    let amount = U256::from(TRANSFER_AMOUNT);
    let member = setup_member(&args).await?;
    let other = setup_member(&args).await?;
    fund_relayer(&args, amount).await?;

    let min_period = args
        .nft(args.client.clone())
        .minimum_lock_period()
        .call()
        .await?;

    assert_reverts_with!(
        args.nft(args.relayer_client.clone()).lock(
            amount,
            other.token_id,
            member.address,
            min_period,
            U256::one()
        ),
        MembershipNftContractErrors::NftDoesNotBelongToBeneficiary(
            NftDoesNotBelongToBeneficiary { token_id, beneficiary }
        ) if token_id == other.token_id && beneficiary == member.address
    );

    Ok(())
}
integration_test!(test_lock_requires_beneficiary_token);

/// Only the relayer may lock on a member's behalf
async fn test_lock_is_relayer_gated(args: TestArgs) -> Result<()> {
    let amount = U256::from(TRANSFER_AMOUNT);
    let member = setup_member(&args).await?;

    let min_period = args
        .nft(args.client.clone())
        .minimum_lock_period()
        .call()
        .await?;

    assert_reverts_with!(
        args.nft(member.client.clone()).lock(
            amount,
            member.token_id,
            member.address,
            min_period,
            U256::one()
        ),
        MembershipNftContractErrors::OnlyRelayerAllowed(_)
    );

    Ok(())
}
integration_test!(test_lock_is_relayer_gated);
