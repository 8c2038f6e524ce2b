mod process_initialize;
pub use process_initialize::*;

mod process_manage_sale;
pub use process_manage_sale::*;

mod process_token_sale;
pub use process_token_sale::*;

mod process_claim_staked_token;
pub use process_claim_staked_token::*;

mod process_withdraw_token;
pub use process_withdraw_token::*;

mod process_withdraw;
pub use process_withdraw::*;
