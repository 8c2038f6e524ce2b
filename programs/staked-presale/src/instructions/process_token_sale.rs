use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_2022::{transfer_checked, TransferChecked},
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::*;

#[event_cpi]
#[derive(Accounts)]
pub struct TokenSaleCtx<'info> {
    #[account(
        mut,
        seeds = [
            crate::constants::seeds::PRESALE_PREFIX.as_ref(),
        ],
        bump = presale.load()?.bump,
        has_one = vault,
        has_one = token_vault,
        has_one = token_mint @ PresaleError::InvalidTokenMint,
    )]
    pub presale: AccountLoader<'info, Presale>,

    #[account(
        init_if_needed,
        seeds = [
            crate::constants::seeds::USER_INFO_PREFIX.as_ref(),
            user.key().as_ref(),
        ],
        bump,
        payer = user,
        space = 8 + UserInfo::INIT_SPACE
    )]
    pub user_info: AccountLoader<'info, UserInfo>,

    #[account(
        mut,
        seeds = [
            crate::constants::seeds::VAULT_PREFIX.as_ref(),
        ],
        bump = presale.load()?.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

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

pub fn handle_token_sale(
    ctx: Context<TokenSaleCtx>,
    token_amount: u64,
    staking_period: u8,
) -> Result<()> {
    let mut presale = ctx.accounts.presale.load_mut()?;

    // 1. Ensure the sale accepts purchases
    presale.ensure_active()?;

    let phase_handler = get_sale_phase_handler(presale.sale_phase());
    phase_handler.validate_staking_period(staking_period)?;

    require!(token_amount > 0, PresaleError::ZeroTokenAmount);

    // 2. Price the purchase
    let payment_amount = calculate_payment_amount(
        token_amount,
        phase_handler.sale_price(&presale),
        ctx.accounts.token_mint.decimals,
    )?;

    // 3. Update sale and buyer state
    presale.process_sale(token_amount, payment_amount)?;

    let current_timestamp: u64 = Clock::get()?.unix_timestamp.safe_cast()?;

    let mut user_info = match ctx.accounts.user_info.load_init() {
        Ok(user_info) => user_info,
        Err(_) => ctx.accounts.user_info.load_mut()?,
    };
    if !user_info.is_initialized() {
        user_info.initialize(ctx.accounts.user.key(), ctx.bumps.user_info);
    }
    user_info.record_purchase(token_amount, staking_period, current_timestamp)?;

    // Purchases without a staking period carry no vesting and settle in
    // the same instruction.
    let settled_amount = if staking_period == 0 {
        let claim_amount = user_info.claim(staking_period, current_timestamp)?;
        presale.process_claim(claim_amount)?;
        claim_amount
    } else {
        0
    };

    let presale_bump = presale.bump;
    let remaining_supply = presale.token_amount;
    let presale_total_sold = presale.total_sold;
    drop(presale);
    drop(user_info);

    // 4. Collect payment from the buyer
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.user.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        payment_amount,
    )?;

    // 5. Release tokens settled at purchase time
    if settled_amount > 0 {
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
            settled_amount,
            ctx.accounts.token_mint.decimals,
        )?;
    }

    emit_cpi!(EvtTokenSale {
        presale: ctx.accounts.presale.key(),
        user_info: ctx.accounts.user_info.key(),
        user: ctx.accounts.user.key(),
        token_amount,
        payment_amount,
        staking_period,
        remaining_supply,
        presale_total_sold,
    });

    Ok(())
}
