mod deposit_relayed;
pub use deposit_relayed::*;

mod deposit_adapter_origin_set;
pub use deposit_adapter_origin_set::*;

pub use common::events::{OwnershipTransferred, Withdrawal};
