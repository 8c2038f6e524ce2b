use anchor_lang::prelude::*;

use crate::*;

/// Lamports charged for `token_amount` base units at `price_per_token`
/// lamports per whole token.
pub fn calculate_payment_amount(
    token_amount: u64,
    price_per_token: u64,
    token_decimals: u8,
) -> Result<u64> {
    let token_unit = 10u128
        .checked_pow(token_decimals.into())
        .ok_or(PresaleError::MathOverflow)?;

    let payment: u64 = u128::from(token_amount)
        .safe_mul(price_per_token.into())?
        .safe_div(token_unit)?
        .safe_cast()?;

    // A purchase must debit the buyer. Reject quantities so small the
    // payment truncates to nothing.
    require!(payment > 0, PresaleError::PaymentTooSmall);

    Ok(payment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TOKEN_DECIMALS: u8 = 9;
    const ONE_TOKEN: u64 = 1_000_000_000;

    #[test]
    fn test_calculate_payment_amount() {
        // 100 whole tokens at 100_000 lamports each
        let payment = calculate_payment_amount(100 * ONE_TOKEN, 100_000, TOKEN_DECIMALS).unwrap();
        assert_eq!(payment, 10_000_000);

        // Fractional token quantities round the payment down
        let payment = calculate_payment_amount(ONE_TOKEN + ONE_TOKEN / 2, 100_000, TOKEN_DECIMALS)
            .unwrap();
        assert_eq!(payment, 150_000);
    }

    #[test]
    fn test_zero_decimal_mint() {
        let payment = calculate_payment_amount(7, 3, 0).unwrap();
        assert_eq!(payment, 21);
    }

    #[test]
    fn test_truncated_payment_rejected() {
        // One base unit at a price below one lamport per base unit
        let result = calculate_payment_amount(1, 100_000, TOKEN_DECIMALS);
        assert_eq!(
            result.unwrap_err(),
            PresaleError::PaymentTooSmall.into()
        );
    }

    #[test]
    fn test_zero_amount_rejected() {
        let result = calculate_payment_amount(0, 100_000, TOKEN_DECIMALS);
        assert_eq!(
            result.unwrap_err(),
            PresaleError::PaymentTooSmall.into()
        );
    }

    proptest! {
        #[test]
        fn test_payment_monotonic_in_amount(
            amount in 1u64..u64::MAX / 2,
            price in 1u64..1_000_000_000u64,
        ) {
            let smaller = calculate_payment_amount(amount, price, TOKEN_DECIMALS);
            let larger = calculate_payment_amount(amount.saturating_add(ONE_TOKEN), price, TOKEN_DECIMALS);

            if let (Ok(smaller), Ok(larger)) = (smaller, larger) {
                prop_assert!(larger >= smaller);
            }
        }

        #[test]
        fn test_whole_token_payment_exact(
            tokens in 1u64..1_000_000u64,
            price in 1u64..1_000_000_000u64,
        ) {
            let payment = calculate_payment_amount(
                tokens * ONE_TOKEN,
                price,
                TOKEN_DECIMALS,
            ).unwrap();
            prop_assert_eq!(payment, tokens * price);
        }
    }
}
