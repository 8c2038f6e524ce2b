mod safe_math;
pub use safe_math::*;

mod price_math;
pub use price_math::*;

mod vesting_math;
pub use vesting_math::*;
