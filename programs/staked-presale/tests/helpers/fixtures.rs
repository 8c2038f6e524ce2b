use anchor_lang::prelude::Pubkey;
use bytemuck::Zeroable;
use ::staked_presale::*;

pub const TOKEN_DECIMALS: u8 = 9;
pub const ONE_TOKEN: u64 = 1_000_000_000;

pub const DEFAULT_SUPPLY: u64 = 10_000 * ONE_TOKEN;
pub const DEFAULT_TOKEN_PRICE: u64 = 100_000;
pub const DEFAULT_RATE: u64 = 50_000;

pub const SALE_START: u64 = 1_700_000_000;

pub struct SaleFixture {
    pub presale: Presale,
    pub owner: Pubkey,
}

pub fn initialized_presale() -> SaleFixture {
    let owner = Pubkey::new_unique();
    let mut presale = Presale::zeroed();
    presale
        .initialize(
            owner,
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            DEFAULT_SUPPLY,
            DEFAULT_TOKEN_PRICE,
            PresaleBumps {
                presale_bump: 254,
                vault_bump: 253,
                token_vault_bump: 252,
            },
        )
        .unwrap();

    SaleFixture { presale, owner }
}

pub fn active_presale() -> SaleFixture {
    let mut fixture = initialized_presale();
    fixture.presale.toggle_status();
    fixture
}

pub fn user_info_for(user: Pubkey) -> UserInfo {
    let mut user_info = UserInfo::zeroed();
    user_info.initialize(user, 255);
    user_info
}

/// Runs a purchase through the same state sequence the on-chain handler
/// runs, minus the transfer legs.
pub fn execute_purchase(
    presale: &mut Presale,
    user_info: &mut UserInfo,
    token_amount: u64,
    staking_period: u8,
    current_timestamp: u64,
) -> anchor_lang::Result<u64> {
    presale.ensure_active()?;

    let phase_handler = get_sale_phase_handler(presale.sale_phase());
    phase_handler.validate_staking_period(staking_period)?;

    if token_amount == 0 {
        return Err(PresaleError::ZeroTokenAmount.into());
    }

    let payment_amount = calculate_payment_amount(
        token_amount,
        phase_handler.sale_price(presale),
        TOKEN_DECIMALS,
    )?;

    presale.process_sale(token_amount, payment_amount)?;
    user_info.record_purchase(token_amount, staking_period, current_timestamp)?;

    if staking_period == 0 {
        let claim_amount = user_info.claim(staking_period, current_timestamp)?;
        presale.process_claim(claim_amount)?;
    }

    Ok(payment_amount)
}

pub fn execute_claim(
    presale: &mut Presale,
    user_info: &mut UserInfo,
    staking_period: u8,
    current_timestamp: u64,
) -> anchor_lang::Result<u64> {
    let claim_amount = user_info.claim(staking_period, current_timestamp)?;
    presale.process_claim(claim_amount)?;
    Ok(claim_amount)
}
