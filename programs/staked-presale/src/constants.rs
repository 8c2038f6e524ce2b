// Staking periods (in months) accepted while the sale is private
pub const PERMITTED_STAKING_PERIODS: [u8; 4] = [3, 6, 9, 12];

// A staking month is normalized to 30 days
pub const SECONDS_PER_STAKING_MONTH: u64 = 60 * 60 * 24 * 30;

// Purchase entries a single buyer record can hold
pub const MAX_PURCHASE_RECORDS: usize = 16;

// PDA's seeds
pub mod seeds {
    pub const PRESALE_PREFIX: &[u8] = b"presale";
    pub const VAULT_PREFIX: &[u8] = b"vault";
    pub const TOKEN_VAULT_PREFIX: &[u8] = b"token_vault";
    pub const USER_INFO_PREFIX: &[u8] = b"user_info";
}
