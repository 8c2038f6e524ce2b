use anchor_lang::prelude::*;
use num_enum::{FromPrimitive, IntoPrimitive};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, IntoPrimitive, FromPrimitive)]
#[repr(u8)]
pub enum SalePhase {
    /// Fixed token price, staked vesting mandatory
    #[num_enum(default)]
    Private,
    /// Rate-priced, tokens release at purchase time
    Public,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, IntoPrimitive, FromPrimitive)]
#[repr(u8)]
pub enum SaleStatus {
    #[num_enum(default)]
    Inactive,
    Active,
}

#[account(zero_copy)]
#[derive(InitSpace, Debug)]
pub struct Presale {
    /// Owner of the sale. Immutable after initialization
    pub owner: Pubkey,
    /// Mint of the token being sold
    pub token_mint: Pubkey,
    /// SOL custody vault
    pub vault: Pubkey,
    /// Token custody vault
    pub token_vault: Pubkey,
    /// Remaining unsold token units
    pub token_amount: u64,
    /// Lamports collected on behalf of the sale
    pub sol_amount: u64,
    /// Private phase price, lamports per whole token
    pub token_price: u64,
    /// Public phase price, lamports per whole token
    pub rate: u64,
    /// Cumulative token units sold
    pub total_sold: u64,
    /// Cumulative token units released to buyers
    pub total_claimed: u64,
    /// Sale phase
    pub phase: u8,
    /// Sale status
    pub status: u8,
    pub bump: u8,
    pub vault_bump: u8,
    pub token_vault_bump: u8,
    pub padding: [u8; 3],
}

static_assertions::const_assert_eq!(Presale::INIT_SPACE, 184);
static_assertions::assert_eq_align!(Presale, u64);

pub struct PresaleBumps {
    pub presale_bump: u8,
    pub vault_bump: u8,
    pub token_vault_bump: u8,
}

impl Presale {
    pub fn initialize(
        &mut self,
        owner: Pubkey,
        token_mint: Pubkey,
        vault: Pubkey,
        token_vault: Pubkey,
        token_amount: u64,
        token_price: u64,
        bumps: PresaleBumps,
    ) -> Result<()> {
        require!(token_amount > 0, PresaleError::ZeroTokenAmount);
        require!(token_price > 0, PresaleError::InvalidTokenPrice);

        let PresaleBumps {
            presale_bump,
            vault_bump,
            token_vault_bump,
        } = bumps;

        self.owner = owner;
        self.token_mint = token_mint;
        self.vault = vault;
        self.token_vault = token_vault;
        self.token_amount = token_amount;
        self.token_price = token_price;
        self.phase = SalePhase::Private.into();
        self.status = SaleStatus::Inactive.into();
        self.bump = presale_bump;
        self.vault_bump = vault_bump;
        self.token_vault_bump = token_vault_bump;

        Ok(())
    }

    pub fn sale_phase(&self) -> SalePhase {
        SalePhase::from(self.phase)
    }

    pub fn sale_status(&self) -> SaleStatus {
        SaleStatus::from(self.status)
    }

    pub fn ensure_owner(&self, owner: &Pubkey) -> Result<()> {
        require_keys_eq!(self.owner, *owner, PresaleError::InvalidOwner);
        Ok(())
    }

    pub fn ensure_active(&self) -> Result<()> {
        require!(
            self.sale_status() == SaleStatus::Active,
            PresaleError::SaleNotActive
        );
        Ok(())
    }

    pub fn toggle_status(&mut self) {
        self.status = match self.sale_status() {
            SaleStatus::Inactive => SaleStatus::Active.into(),
            SaleStatus::Active => SaleStatus::Inactive.into(),
        };
    }

    /// Private to public is one way. There is no path back.
    pub fn set_public_phase(&mut self) -> Result<()> {
        require!(
            self.sale_phase() == SalePhase::Private,
            PresaleError::SaleAlreadyPublic
        );
        self.phase = SalePhase::Public.into();
        Ok(())
    }

    pub fn update_token_price(&mut self, new_token_price: u64) -> Result<()> {
        require!(new_token_price > 0, PresaleError::InvalidTokenPrice);
        require!(
            self.sale_phase() == SalePhase::Private,
            PresaleError::SaleAlreadyPublic
        );
        self.token_price = new_token_price;
        Ok(())
    }

    pub fn update_rate(&mut self, new_rate: u64) -> Result<()> {
        require!(new_rate > 0, PresaleError::InvalidRate);
        self.rate = new_rate;
        Ok(())
    }

    /// Move `token_amount` units from the unsold supply to a buyer, paid
    /// with `payment_amount` lamports. Checks run before any mutation.
    pub fn process_sale(&mut self, token_amount: u64, payment_amount: u64) -> Result<()> {
        require!(
            token_amount <= self.token_amount,
            PresaleError::InsufficientTokenSupply
        );

        self.token_amount = self.token_amount.safe_sub(token_amount)?;
        self.sol_amount = self.sol_amount.safe_add(payment_amount)?;
        self.total_sold = self.total_sold.safe_add(token_amount)?;

        Ok(())
    }

    pub fn process_claim(&mut self, claim_amount: u64) -> Result<()> {
        self.total_claimed = self.total_claimed.safe_add(claim_amount)?;
        Ok(())
    }

    /// Sold but not yet released token units. These stay earmarked in the
    /// token vault until their buyers claim.
    pub fn outstanding_unclaimed(&self) -> Result<u64> {
        Ok(self.total_sold.safe_sub(self.total_claimed)?)
    }

    pub fn max_withdrawable_tokens(&self, vault_balance: u64) -> Result<u64> {
        Ok(vault_balance.saturating_sub(self.outstanding_unclaimed()?))
    }

    pub fn process_withdraw_token(&mut self, amount: u64, vault_balance: u64) -> Result<()> {
        require!(
            amount <= self.max_withdrawable_tokens(vault_balance)?,
            PresaleError::InsufficientVaultBalance
        );

        let unsold_withdrawn = amount.min(self.token_amount);
        self.token_amount = self.token_amount.safe_sub(unsold_withdrawn)?;

        Ok(())
    }

    pub fn process_withdraw_sol(&mut self, amount: u64, vault_lamports: u64) -> Result<()> {
        require!(
            amount <= vault_lamports,
            PresaleError::InsufficientVaultBalance
        );

        let proceeds_withdrawn = amount.min(self.sol_amount);
        self.sol_amount = self.sol_amount.safe_sub(proceeds_withdrawn)?;

        Ok(())
    }
}
