use anchor_lang::prelude::*;

use crate::*;

pub struct PrivateSaleHandler;

impl SalePhaseHandler for PrivateSaleHandler {
    /// Private buyers commit to one of the permitted staking periods.
    fn validate_staking_period(&self, staking_period: u8) -> Result<()> {
        require!(
            PERMITTED_STAKING_PERIODS.contains(&staking_period),
            PresaleError::InvalidStakingPeriod
        );
        Ok(())
    }

    fn sale_price(&self, presale: &Presale) -> u64 {
        presale.token_price
    }
}
