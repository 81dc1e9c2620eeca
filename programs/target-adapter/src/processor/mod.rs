mod admin;
pub use admin::*;

mod execute;
pub use execute::*;

mod withdraw;
pub use withdraw::*;
