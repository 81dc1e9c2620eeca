mod deposit_relayed;
pub use deposit_relayed::*;

mod fee_changed;
pub use fee_changed::*;

mod deposit_adapter_origin_changed;
pub use deposit_adapter_origin_changed::*;

pub use common::events::{OwnershipTransferred, Withdrawal};
