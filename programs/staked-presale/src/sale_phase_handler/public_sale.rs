use anchor_lang::prelude::*;

use crate::*;

pub struct PublicSaleHandler;

impl SalePhaseHandler for PublicSaleHandler {
    /// Public purchases release immediately. No staking period applies.
    fn validate_staking_period(&self, staking_period: u8) -> Result<()> {
        require!(staking_period == 0, PresaleError::InvalidStakingPeriod);
        Ok(())
    }

    fn sale_price(&self, presale: &Presale) -> u64 {
        presale.rate
    }
}
