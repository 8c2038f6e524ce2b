use anchor_lang::prelude::*;

use crate::constants::seeds;

pub fn derive_presale(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[seeds::PRESALE_PREFIX], program_id)
}

pub fn derive_sol_vault(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[seeds::VAULT_PREFIX], program_id)
}

pub fn derive_token_vault(token_mint: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[seeds::TOKEN_VAULT_PREFIX, token_mint.as_ref()],
        program_id,
    )
}

pub fn derive_user_info(user: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[seeds::USER_INFO_PREFIX, user.as_ref()], program_id)
}
