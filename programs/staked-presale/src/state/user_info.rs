use anchor_lang::prelude::*;

use crate::*;

#[zero_copy]
#[derive(InitSpace, Debug, Default)]
pub struct StakedPurchase {
    // Token units bought in this purchase
    pub amount: u64,
    // Timestamp of the purchase, the vesting anchor
    pub start_time: u64,
    // Staking period in months selected at purchase time
    pub staking_period: u8,
    // Set once the purchase has been released to the buyer
    pub claimed: u8,
    pub padding: [u8; 6],
}

static_assertions::const_assert_eq!(StakedPurchase::INIT_SPACE, 24);
static_assertions::assert_eq_align!(StakedPurchase, u64);

impl StakedPurchase {
    pub fn is_claimed(&self) -> bool {
        self.claimed == 1
    }

    pub fn is_vested(&self, current_timestamp: u64) -> Result<bool> {
        is_vesting_elapsed(self.start_time, self.staking_period, current_timestamp)
    }
}

#[account(zero_copy)]
#[derive(InitSpace, Debug)]
pub struct UserInfo {
    // The buyer this record belongs to
    pub user: Pubkey,
    // Token units bought across all purchases
    pub total_purchased: u64,
    // Token units released to the buyer so far
    pub total_claimed: u64,
    // Purchase history. Entries are flagged claimed, never erased
    pub purchases: [StakedPurchase; MAX_PURCHASE_RECORDS],
    // Occupied entries in `purchases`
    pub purchase_count: u8,
    pub bump: u8,
    pub padding: [u8; 6],
}

static_assertions::const_assert_eq!(UserInfo::INIT_SPACE, 440);
static_assertions::assert_eq_align!(UserInfo, u64);

impl UserInfo {
    pub fn initialize(&mut self, user: Pubkey, bump: u8) {
        self.user = user;
        self.bump = bump;
    }

    pub fn is_initialized(&self) -> bool {
        self.user != Pubkey::default()
    }

    fn occupied_purchases(&self) -> &[StakedPurchase] {
        &self.purchases[..usize::from(self.purchase_count)]
    }

    pub fn record_purchase(
        &mut self,
        amount: u64,
        staking_period: u8,
        current_timestamp: u64,
    ) -> Result<()> {
        let index = usize::from(self.purchase_count);
        require!(
            index < MAX_PURCHASE_RECORDS,
            PresaleError::PurchaseRecordsFull
        );

        let entry = &mut self.purchases[index];
        entry.amount = amount;
        entry.start_time = current_timestamp;
        entry.staking_period = staking_period;
        entry.claimed = 0;

        self.purchase_count = self.purchase_count.safe_add(1)?;
        self.total_purchased = self.total_purchased.safe_add(amount)?;

        Ok(())
    }

    /// Token units newly claimable for `staking_period`. Read-only, a
    /// failed claim leaves the record untouched.
    pub fn claimable_amount(&self, staking_period: u8, current_timestamp: u64) -> Result<u64> {
        let mut claimable: u64 = 0;
        let mut matched = false;
        let mut still_vesting = false;

        for entry in self.occupied_purchases() {
            if entry.staking_period != staking_period {
                continue;
            }
            matched = true;

            if !entry.is_vested(current_timestamp)? {
                still_vesting = true;
                continue;
            }
            if entry.is_claimed() {
                continue;
            }

            claimable = claimable.safe_add(entry.amount)?;
        }

        require!(matched, PresaleError::NoStakedPurchase);

        if claimable == 0 {
            if still_vesting {
                return Err(PresaleError::VestingNotElapsed.into());
            }
            return Err(PresaleError::NothingToClaim.into());
        }

        Ok(claimable)
    }

    /// Release every vested, unclaimed purchase for `staking_period` and
    /// return the released amount.
    pub fn claim(&mut self, staking_period: u8, current_timestamp: u64) -> Result<u64> {
        let claim_amount = self.claimable_amount(staking_period, current_timestamp)?;

        let occupied = usize::from(self.purchase_count);
        for entry in self.purchases[..occupied].iter_mut() {
            if entry.staking_period != staking_period || entry.is_claimed() {
                continue;
            }
            if entry.is_vested(current_timestamp)? {
                entry.claimed = 1;
            }
        }

        self.total_claimed = self.total_claimed.safe_add(claim_amount)?;

        Ok(claim_amount)
    }
}
