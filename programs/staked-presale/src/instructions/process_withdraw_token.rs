use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_2022::{transfer_checked, TransferChecked},
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::*;

#[event_cpi]
#[derive(Accounts)]
pub struct WithdrawTokenCtx<'info> {
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

    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(mut)]
    pub token_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = owner,
        associated_token::mint = token_mint,
        associated_token::authority = owner,
        associated_token::token_program = token_program
    )]
    pub owner_token: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handle_withdraw_token(ctx: Context<WithdrawTokenCtx>, amount: u64) -> Result<()> {
    let mut presale = ctx.accounts.presale.load_mut()?;

    // 1. Only the owner may pull tokens, and never out of the allocation
    // still owed to buyers
    presale.ensure_owner(ctx.accounts.owner.key)?;
    require!(amount > 0, PresaleError::ZeroTokenAmount);

    presale.process_withdraw_token(amount, ctx.accounts.token_vault.amount)?;

    let presale_bump = presale.bump;
    let remaining_supply = presale.token_amount;
    drop(presale);

    // 2. Transfer
    let seeds = presale_seeds!(presale_bump);
    let signer_seeds = &[&seeds[..]];
    transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.token_vault.to_account_info(),
                to: ctx.accounts.owner_token.to_account_info(),
                mint: ctx.accounts.token_mint.to_account_info(),
                authority: ctx.accounts.presale.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
        ctx.accounts.token_mint.decimals,
    )?;

    emit_cpi!(EvtTokenWithdraw {
        presale: ctx.accounts.presale.key(),
        owner: ctx.accounts.owner.key(),
        amount,
        remaining_supply,
    });

    Ok(())
}
