use anchor_lang::prelude::*;

use crate::*;

#[event_cpi]
#[derive(Accounts)]
pub struct ManageSaleCtx<'info> {
    #[account(
        mut,
        seeds = [
            crate::constants::seeds::PRESALE_PREFIX.as_ref(),
        ],
        bump = presale.load()?.bump,
    )]
    pub presale: AccountLoader<'info, Presale>,

    pub owner: Signer<'info>,
}

pub fn handle_toggle_status(ctx: Context<ManageSaleCtx>) -> Result<()> {
    let mut presale = ctx.accounts.presale.load_mut()?;
    presale.ensure_owner(ctx.accounts.owner.key)?;

    presale.toggle_status();

    emit_cpi!(EvtStatusToggle {
        presale: ctx.accounts.presale.key(),
        status: presale.status,
    });

    Ok(())
}

pub fn handle_update_sale_type(ctx: Context<ManageSaleCtx>) -> Result<()> {
    let mut presale = ctx.accounts.presale.load_mut()?;
    presale.ensure_owner(ctx.accounts.owner.key)?;

    presale.set_public_phase()?;

    emit_cpi!(EvtSaleTypeUpdate {
        presale: ctx.accounts.presale.key(),
        phase: presale.phase,
    });

    Ok(())
}

pub fn handle_update_token_price(ctx: Context<ManageSaleCtx>, new_token_price: u64) -> Result<()> {
    let mut presale = ctx.accounts.presale.load_mut()?;
    presale.ensure_owner(ctx.accounts.owner.key)?;

    let old_token_price = presale.token_price;
    presale.update_token_price(new_token_price)?;

    emit_cpi!(EvtTokenPriceUpdate {
        presale: ctx.accounts.presale.key(),
        old_token_price,
        new_token_price,
    });

    Ok(())
}

pub fn handle_update_rate(ctx: Context<ManageSaleCtx>, new_rate: u64) -> Result<()> {
    let mut presale = ctx.accounts.presale.load_mut()?;
    presale.ensure_owner(ctx.accounts.owner.key)?;

    let old_rate = presale.rate;
    presale.update_rate(new_rate)?;

    emit_cpi!(EvtRateUpdate {
        presale: ctx.accounts.presale.key(),
        old_rate,
        new_rate,
    });

    Ok(())
}
