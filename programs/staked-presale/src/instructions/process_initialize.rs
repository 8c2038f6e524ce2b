use anchor_lang::prelude::*;
use anchor_spl::{
    token_2022::{transfer_checked, TransferChecked},
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::*;

#[event_cpi]
#[derive(Accounts)]
pub struct InitializeCtx<'info> {
    #[account(
        init,
        seeds = [
            crate::constants::seeds::PRESALE_PREFIX.as_ref(),
        ],
        bump,
        payer = owner,
        space = 8 + Presale::INIT_SPACE
    )]
    pub presale: AccountLoader<'info, Presale>,

    /// Lamport vault holding sale proceeds. Owned by the system program,
    /// signs outgoing transfers with its seeds.
    #[account(
        seeds = [
            crate::constants::seeds::VAULT_PREFIX.as_ref(),
        ],
        bump,
    )]
    pub vault: SystemAccount<'info>,

    pub token_mint: InterfaceAccount<'info, Mint>,

    #[account(
        init,
        seeds = [
            crate::constants::seeds::TOKEN_VAULT_PREFIX.as_ref(),
            token_mint.key().as_ref(),
        ],
        bump,
        payer = owner,
        token::mint = token_mint,
        token::authority = presale,
        token::token_program = token_program
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = token_mint,
    )]
    pub owner_token: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handle_initialize(
    ctx: Context<InitializeCtx>,
    token_amount: u64,
    token_price: u64,
) -> Result<()> {
    // 1. Record the sale terms
    let mut presale = ctx.accounts.presale.load_init()?;
    presale.initialize(
        ctx.accounts.owner.key(),
        ctx.accounts.token_mint.key(),
        ctx.accounts.vault.key(),
        ctx.accounts.token_vault.key(),
        token_amount,
        token_price,
        PresaleBumps {
            presale_bump: ctx.bumps.presale,
            vault_bump: ctx.bumps.vault,
            token_vault_bump: ctx.bumps.token_vault,
        },
    )?;
    drop(presale);

    // 2. Fund the token vault with the full sale supply. A short owner
    // balance fails the whole instruction.
    transfer_checked(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.owner_token.to_account_info(),
                to: ctx.accounts.token_vault.to_account_info(),
                mint: ctx.accounts.token_mint.to_account_info(),
                authority: ctx.accounts.owner.to_account_info(),
            },
        ),
        token_amount,
        ctx.accounts.token_mint.decimals,
    )?;

    emit_cpi!(EvtInitialize {
        presale: ctx.accounts.presale.key(),
        owner: ctx.accounts.owner.key(),
        token_mint: ctx.accounts.token_mint.key(),
        vault: ctx.accounts.vault.key(),
        token_vault: ctx.accounts.token_vault.key(),
        token_amount,
        token_price,
    });

    Ok(())
}
