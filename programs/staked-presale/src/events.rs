use anchor_lang::prelude::*;

#[event]
pub struct EvtInitialize {
    pub presale: Pubkey,
    pub owner: Pubkey,
    pub token_mint: Pubkey,
    pub vault: Pubkey,
    pub token_vault: Pubkey,
    pub token_amount: u64,
    pub token_price: u64,
}

#[event]
pub struct EvtStatusToggle {
    pub presale: Pubkey,
    pub status: u8,
}

#[event]
pub struct EvtSaleTypeUpdate {
    pub presale: Pubkey,
    pub phase: u8,
}

#[event]
pub struct EvtTokenPriceUpdate {
    pub presale: Pubkey,
    pub old_token_price: u64,
    pub new_token_price: u64,
}

#[event]
pub struct EvtRateUpdate {
    pub presale: Pubkey,
    pub old_rate: u64,
    pub new_rate: u64,
}

#[event]
pub struct EvtTokenSale {
    pub presale: Pubkey,
    pub user_info: Pubkey,
    pub user: Pubkey,
    pub token_amount: u64,
    pub payment_amount: u64,
    pub staking_period: u8,
    pub remaining_supply: u64,
    pub presale_total_sold: u64,
}

#[event]
pub struct EvtStakedTokenClaim {
    pub presale: Pubkey,
    pub user_info: Pubkey,
    pub user: Pubkey,
    pub claim_amount: u64,
    pub staking_period: u8,
    pub user_total_claimed: u64,
    pub presale_total_claimed: u64,
}

#[event]
pub struct EvtTokenWithdraw {
    pub presale: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub remaining_supply: u64,
}

#[event]
pub struct EvtSolWithdraw {
    pub presale: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub remaining_sol: u64,
}
