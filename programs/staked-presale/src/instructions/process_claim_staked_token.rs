use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_2022::{transfer_checked, TransferChecked},
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::*;

#[event_cpi]
#[derive(Accounts)]
pub struct ClaimStakedTokenCtx<'info> {
    #[account(
        mut,
        seeds = [
            crate::constants::seeds::PRESALE_PREFIX.as_ref(),
        ],
        bump = presale.load()?.bump,
        has_one = token_vault,
        has_one = token_mint @ PresaleError::InvalidTokenMint,
    )]
    pub presale: AccountLoader<'info, Presale>,

    #[account(
        mut,
        seeds = [
            crate::constants::seeds::USER_INFO_PREFIX.as_ref(),
            user.key().as_ref(),
        ],
        bump = user_info.load()?.bump,
        has_one = user,
    )]
    pub user_info: AccountLoader<'info, UserInfo>,

    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(mut)]
    pub token_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = token_mint,
        associated_token::authority = user,
        associated_token::token_program = token_program
    )]
    pub user_token: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handle_claim_staked_token(
    ctx: Context<ClaimStakedTokenCtx>,
    staking_period: u8,
) -> Result<()> {
    let mut presale = ctx.accounts.presale.load_mut()?;
    let mut user_info = ctx.accounts.user_info.load_mut()?;

    // 1. Release every vested purchase under this staking period
    let current_timestamp: u64 = Clock::get()?.unix_timestamp.safe_cast()?;
    let claim_amount = user_info.claim(staking_period, current_timestamp)?;

    presale.process_claim(claim_amount)?;

    let presale_bump = presale.bump;
    let user_total_claimed = user_info.total_claimed;
    let presale_total_claimed = presale.total_claimed;
    drop(presale);
    drop(user_info);

    // 2. Transfer from the token vault to the buyer
    let seeds = presale_seeds!(presale_bump);
    let signer_seeds = &[&seeds[..]];
    transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.token_vault.to_account_info(),
                to: ctx.accounts.user_token.to_account_info(),
                mint: ctx.accounts.token_mint.to_account_info(),
                authority: ctx.accounts.presale.to_account_info(),
            },
            signer_seeds,
        ),
        claim_amount,
        ctx.accounts.token_mint.decimals,
    )?;

    emit_cpi!(EvtStakedTokenClaim {
        presale: ctx.accounts.presale.key(),
        user_info: ctx.accounts.user_info.key(),
        user: ctx.accounts.user.key(),
        claim_amount,
        staking_period,
        user_total_claimed,
        presale_total_claimed,
    });

    Ok(())
}
