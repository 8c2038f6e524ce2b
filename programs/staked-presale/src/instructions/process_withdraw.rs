use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::*;

#[event_cpi]
#[derive(Accounts)]
pub struct WithdrawCtx<'info> {
    #[account(
        mut,
        seeds = [
            crate::constants::seeds::PRESALE_PREFIX.as_ref(),
        ],
        bump = presale.load()?.bump,
        has_one = vault,
    )]
    pub presale: AccountLoader<'info, Presale>,

    #[account(
        mut,
        seeds = [
            crate::constants::seeds::VAULT_PREFIX.as_ref(),
        ],
        bump = presale.load()?.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_withdraw(ctx: Context<WithdrawCtx>, amount: u64) -> Result<()> {
    let mut presale = ctx.accounts.presale.load_mut()?;

    // 1. Only the owner may pull collected lamports
    presale.ensure_owner(ctx.accounts.owner.key)?;
    require!(amount > 0, PresaleError::ZeroTokenAmount);

    presale.process_withdraw_sol(amount, ctx.accounts.vault.lamports())?;

    let vault_bump = presale.vault_bump;
    let remaining_sol = presale.sol_amount;
    drop(presale);

    // 2. Transfer. The vault PDA signs with its own seeds
    let seeds = sol_vault_seeds!(vault_bump);
    let signer_seeds = &[&seeds[..]];
    system_program::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.owner.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit_cpi!(EvtSolWithdraw {
        presale: ctx.accounts.presale.key(),
        owner: ctx.accounts.owner.key(),
        amount,
        remaining_sol,
    });

    Ok(())
}
