mod presale;
pub use presale::*;

mod user_info;
pub use user_info::*;
