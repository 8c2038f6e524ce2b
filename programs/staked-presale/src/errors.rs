use anchor_lang::prelude::*;

#[error_code]
#[derive(PartialEq)]
pub enum PresaleError {
    #[msg("Invalid owner")]
    InvalidOwner,

    #[msg("Sale is not active")]
    SaleNotActive,

    #[msg("Sale is already public")]
    SaleAlreadyPublic,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token price")]
    InvalidTokenPrice,

    #[msg("Invalid rate")]
    InvalidRate,

    #[msg("Invalid staking period")]
    InvalidStakingPeriod,

    #[msg("Zero token amount")]
    ZeroTokenAmount,

    #[msg("Payment amount rounds down to zero")]
    PaymentTooSmall,

    #[msg("Insufficient token supply")]
    InsufficientTokenSupply,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Purchase records are full")]
    PurchaseRecordsFull,

    #[msg("No staked purchase for this period")]
    NoStakedPurchase,

    #[msg("Vesting period has not elapsed")]
    VestingNotElapsed,

    #[msg("Nothing to claim")]
    NothingToClaim,

    #[msg("Math overflow")]
    MathOverflow,
}
