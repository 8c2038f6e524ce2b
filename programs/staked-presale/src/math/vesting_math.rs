use anchor_lang::prelude::*;

use crate::*;

pub fn staking_period_seconds(staking_period: u8) -> Result<u64> {
    Ok(u64::from(staking_period).safe_mul(SECONDS_PER_STAKING_MONTH)?)
}

/// Timestamp at which a purchase made at `start_time` with the given
/// staking period becomes claimable.
pub fn unlock_timestamp(start_time: u64, staking_period: u8) -> Result<u64> {
    Ok(start_time.safe_add(staking_period_seconds(staking_period)?)?)
}

pub fn is_vesting_elapsed(
    start_time: u64,
    staking_period: u8,
    current_timestamp: u64,
) -> Result<bool> {
    Ok(current_timestamp >= unlock_timestamp(start_time, staking_period)?)
}
