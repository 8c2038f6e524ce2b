#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

#[macro_use]
pub mod macros;

mod errors;
pub use errors::*;

mod instructions;
pub use instructions::*;

mod constants;
pub use constants::*;

mod state;
pub use state::*;

mod events;
pub use events::*;

mod math;
pub use math::*;

mod pda;
pub use pda::*;

mod sale_phase_handler;
pub use sale_phase_handler::*;

declare_id!("8wDUqAZzTJ1ZHbGDMMU15yjiifdCyasAnNtX9CZqUBYg");

#[program]
pub mod staked_presale {
    use super::*;

    pub fn initialize(
        ctx: Context<InitializeCtx>,
        token_amount: u64,
        token_price: u64,
    ) -> Result<()> {
        instructions::handle_initialize(ctx, token_amount, token_price)
    }

    pub fn toggle_status(ctx: Context<ManageSaleCtx>) -> Result<()> {
        instructions::handle_toggle_status(ctx)
    }

    pub fn update_sale_type(ctx: Context<ManageSaleCtx>) -> Result<()> {
        instructions::handle_update_sale_type(ctx)
    }

    pub fn update_token_price(ctx: Context<ManageSaleCtx>, new_token_price: u64) -> Result<()> {
        instructions::handle_update_token_price(ctx, new_token_price)
    }

    pub fn update_rate(ctx: Context<ManageSaleCtx>, new_rate: u64) -> Result<()> {
        instructions::handle_update_rate(ctx, new_rate)
    }

    pub fn token_sale(
        ctx: Context<TokenSaleCtx>,
        token_amount: u64,
        staking_period: u8,
    ) -> Result<()> {
        instructions::handle_token_sale(ctx, token_amount, staking_period)
    }

    pub fn claim_staked_token(ctx: Context<ClaimStakedTokenCtx>, staking_period: u8) -> Result<()> {
        instructions::handle_claim_staked_token(ctx, staking_period)
    }

    pub fn withdraw_token(ctx: Context<WithdrawTokenCtx>, amount: u64) -> Result<()> {
        instructions::handle_withdraw_token(ctx, amount)
    }

    pub fn withdraw(ctx: Context<WithdrawCtx>, amount: u64) -> Result<()> {
        instructions::handle_withdraw(ctx, amount)
    }
}
