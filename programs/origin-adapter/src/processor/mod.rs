mod admin;
pub use admin::*;

mod deposit;
pub use deposit::*;

mod withdraw;
pub use withdraw::*;
