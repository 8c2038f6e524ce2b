macro_rules! presale_seeds {
    ($bump:expr) => {
        &[crate::constants::seeds::PRESALE_PREFIX.as_ref(), &[$bump]]
    };
}

macro_rules! sol_vault_seeds {
    ($bump:expr) => {
        &[crate::constants::seeds::VAULT_PREFIX.as_ref(), &[$bump]]
    };
}
