use crate::errors::PresaleError;
use anchor_lang::solana_program::msg;
use std::panic::Location;

pub trait SafeMath: Sized {
    fn safe_add(self, rhs: Self) -> Result<Self, PresaleError>;
    fn safe_mul(self, rhs: Self) -> Result<Self, PresaleError>;
    fn safe_div(self, rhs: Self) -> Result<Self, PresaleError>;
    fn safe_sub(self, rhs: Self) -> Result<Self, PresaleError>;
}

macro_rules! checked_impl {
    ($t:ty) => {
        impl SafeMath for $t {
            #[track_caller]
            fn safe_add(self, v: $t) -> Result<$t, PresaleError> {
                match self.checked_add(v) {
                    Some(result) => Ok(result),
                    None => {
                        let caller = Location::caller();
                        msg!("Math error thrown at {}:{}", caller.file(), caller.line());
                        Err(PresaleError::MathOverflow)
                    }
                }
            }

            #[track_caller]
            fn safe_sub(self, v: $t) -> Result<$t, PresaleError> {
                match self.checked_sub(v) {
                    Some(result) => Ok(result),
                    None => {
                        let caller = Location::caller();
                        msg!("Math error thrown at {}:{}", caller.file(), caller.line());
                        Err(PresaleError::MathOverflow)
                    }
                }
            }

            #[track_caller]
            fn safe_mul(self, v: $t) -> Result<$t, PresaleError> {
                match self.checked_mul(v) {
                    Some(result) => Ok(result),
                    None => {
                        let caller = Location::caller();
                        msg!("Math error thrown at {}:{}", caller.file(), caller.line());
                        Err(PresaleError::MathOverflow)
                    }
                }
            }

            #[track_caller]
            fn safe_div(self, v: $t) -> Result<$t, PresaleError> {
                match self.checked_div(v) {
                    Some(result) => Ok(result),
                    None => {
                        let caller = Location::caller();
                        msg!("Math error thrown at {}:{}", caller.file(), caller.line());
                        Err(PresaleError::MathOverflow)
                    }
                }
            }
        }
    };
}

checked_impl!(u8);
checked_impl!(u64);
checked_impl!(u128);

pub trait SafeCast<T>: Sized {
    fn safe_cast(self) -> Result<T, PresaleError>;
}

macro_rules! try_into_impl {
    ($t:ty, $v:ty) => {
        impl SafeCast<$v> for $t {
            #[track_caller]
            fn safe_cast(self) -> Result<$v, PresaleError> {
                match self.try_into() {
                    Ok(result) => Ok(result),
                    Err(_) => {
                        let caller = Location::caller();
                        msg!("Math error thrown at {}:{}", caller.file(), caller.line());
                        Err(PresaleError::MathOverflow)
                    }
                }
            }
        }
    };
}

try_into_impl!(u128, u64);
try_into_impl!(i64, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_math_bounds() {
        assert_eq!(u64::MAX.safe_add(1), Err(PresaleError::MathOverflow));
        assert_eq!(0u64.safe_sub(1), Err(PresaleError::MathOverflow));
        assert_eq!(u64::MAX.safe_mul(2), Err(PresaleError::MathOverflow));
        assert_eq!(1u64.safe_div(0), Err(PresaleError::MathOverflow));
        assert_eq!(2u64.safe_add(3), Ok(5));
    }

    #[test]
    fn test_safe_cast() {
        let out_of_range: u128 = u128::from(u64::MAX) + 1;
        let cast: Result<u64, _> = out_of_range.safe_cast();
        assert_eq!(cast, Err(PresaleError::MathOverflow));

        let negative: Result<u64, _> = (-1i64).safe_cast();
        assert_eq!(negative, Err(PresaleError::MathOverflow));

        let timestamp: u64 = 1_700_000_000i64.safe_cast().unwrap();
        assert_eq!(timestamp, 1_700_000_000);
    }
}
