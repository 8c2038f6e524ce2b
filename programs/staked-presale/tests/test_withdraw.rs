pub mod helpers;

use anchor_lang::prelude::Pubkey;
use helpers::*;
use ::staked_presale::*;

fn unlock_time(staking_period: u8) -> u64 {
    SALE_START + u64::from(staking_period) * SECONDS_PER_STAKING_MONTH
}

#[test]
fn test_token_withdraw_capped_by_outstanding_claims() {
    let SaleFixture { mut presale, .. } = active_presale();
    let mut user_info = user_info_for(Pubkey::new_unique());

    let sold = 1_000 * ONE_TOKEN;
    execute_purchase(&mut presale, &mut user_info, sold, 3, SALE_START).unwrap();

    // Tokens stay in the vault until buyers claim, so the vault still holds
    // the full supply while 1_000 tokens are spoken for
    let vault_balance = DEFAULT_SUPPLY;
    let ceiling = DEFAULT_SUPPLY - sold;

    assert_eq!(presale.max_withdrawable_tokens(vault_balance).unwrap(), ceiling);

    let result = presale.process_withdraw_token(ceiling + 1, vault_balance);
    assert_eq!(
        result.unwrap_err(),
        PresaleError::InsufficientVaultBalance.into()
    );
    assert_eq!(presale.token_amount, DEFAULT_SUPPLY - sold);

    presale.process_withdraw_token(ceiling, vault_balance).unwrap();
    assert_eq!(presale.token_amount, 0);

    // What remains in the vault is exactly the earmarked allocation
    let vault_balance = vault_balance - ceiling;
    assert_eq!(vault_balance, presale.outstanding_unclaimed().unwrap());
    let result = presale.process_withdraw_token(1, vault_balance);
    assert_eq!(
        result.unwrap_err(),
        PresaleError::InsufficientVaultBalance.into()
    );
}

#[test]
fn test_token_withdraw_after_claims_releases_earmark() {
    let SaleFixture { mut presale, .. } = active_presale();
    let mut user_info = user_info_for(Pubkey::new_unique());

    let sold = 1_000 * ONE_TOKEN;
    execute_purchase(&mut presale, &mut user_info, sold, 3, SALE_START).unwrap();
    execute_claim(&mut presale, &mut user_info, 3, unlock_time(3)).unwrap();

    // The claim transfer has drained the earmarked tokens from the vault
    let vault_balance = DEFAULT_SUPPLY - sold;

    assert_eq!(presale.outstanding_unclaimed().unwrap(), 0);
    assert_eq!(
        presale.max_withdrawable_tokens(vault_balance).unwrap(),
        vault_balance
    );

    presale
        .process_withdraw_token(vault_balance, vault_balance)
        .unwrap();
    assert_eq!(presale.token_amount, 0);
}

#[test]
fn test_token_withdraw_decrements_unsold_supply() {
    let SaleFixture { mut presale, .. } = active_presale();

    let withdrawn = 500 * ONE_TOKEN;
    presale
        .process_withdraw_token(withdrawn, DEFAULT_SUPPLY)
        .unwrap();

    assert_eq!(presale.token_amount, DEFAULT_SUPPLY - withdrawn);
    assert_eq!(presale.total_sold, 0);
    assert_eq!(presale.total_claimed, 0);
}

#[test]
fn test_sol_withdraw_capped_by_vault_lamports() {
    let SaleFixture { mut presale, .. } = active_presale();
    let mut user_info = user_info_for(Pubkey::new_unique());

    let collected =
        execute_purchase(&mut presale, &mut user_info, 1_000 * ONE_TOKEN, 3, SALE_START).unwrap();
    assert_eq!(presale.sol_amount, collected);

    let result = presale.process_withdraw_sol(collected + 1, collected);
    assert_eq!(
        result.unwrap_err(),
        PresaleError::InsufficientVaultBalance.into()
    );
    assert_eq!(presale.sol_amount, collected);

    presale.process_withdraw_sol(collected, collected).unwrap();
    assert_eq!(presale.sol_amount, 0);
}

#[test]
fn test_sol_withdraw_beyond_recorded_proceeds() {
    let SaleFixture { mut presale, .. } = active_presale();
    let mut user_info = user_info_for(Pubkey::new_unique());

    let collected =
        execute_purchase(&mut presale, &mut user_info, 1_000 * ONE_TOKEN, 3, SALE_START).unwrap();

    // Rent deposits can leave the vault holding more lamports than the
    // recorded proceeds. Withdrawing them must not underflow the counter
    let rent_buffer = 2_000_000;
    let vault_lamports = collected + rent_buffer;

    presale
        .process_withdraw_sol(vault_lamports, vault_lamports)
        .unwrap();
    assert_eq!(presale.sol_amount, 0);
}

#[test]
fn test_withdraw_keeps_supply_accounting() {
    let SaleFixture { mut presale, .. } = active_presale();
    let mut first_buyer = user_info_for(Pubkey::new_unique());
    let mut second_buyer = user_info_for(Pubkey::new_unique());

    let claimed_stake = 1_000 * ONE_TOKEN;
    let locked_stake = 1_000 * ONE_TOKEN;
    execute_purchase(&mut presale, &mut first_buyer, claimed_stake, 3, SALE_START).unwrap();
    execute_purchase(&mut presale, &mut second_buyer, locked_stake, 6, SALE_START).unwrap();
    execute_claim(&mut presale, &mut first_buyer, 3, unlock_time(3)).unwrap();

    // Vault drained by the one claim only
    let vault_balance = DEFAULT_SUPPLY - claimed_stake;
    let ceiling = presale.max_withdrawable_tokens(vault_balance).unwrap();

    assert_eq!(presale.outstanding_unclaimed().unwrap(), locked_stake);
    assert_eq!(ceiling, vault_balance - locked_stake);
    assert_eq!(ceiling, presale.token_amount);

    presale.process_withdraw_token(ceiling, vault_balance).unwrap();

    // The locked purchase can still be served in full
    let vault_balance = vault_balance - ceiling;
    assert_eq!(vault_balance, locked_stake);
    let claimed = execute_claim(&mut presale, &mut second_buyer, 6, unlock_time(6)).unwrap();
    assert_eq!(claimed, locked_stake);
}
