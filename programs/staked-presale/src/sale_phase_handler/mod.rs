use anchor_lang::prelude::*;

use crate::*;

mod private_sale;
pub use private_sale::*;

mod public_sale;
pub use public_sale::*;

pub trait SalePhaseHandler {
    /// Staking periods the phase accepts at purchase time
    fn validate_staking_period(&self, staking_period: u8) -> Result<()>;
    /// Lamports per whole token charged in this phase
    fn sale_price(&self, presale: &Presale) -> u64;
}

pub fn get_sale_phase_handler(sale_phase: SalePhase) -> Box<dyn SalePhaseHandler> {
    match sale_phase {
        SalePhase::Private => Box::new(PrivateSaleHandler),
        SalePhase::Public => Box::new(PublicSaleHandler),
    }
}
