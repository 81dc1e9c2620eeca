mod change_fee;
pub use change_fee::*;

mod change_target_adapter;
pub use change_target_adapter::*;

mod initialize;
pub use initialize::*;

mod ownership_transfer_request;
pub use ownership_transfer_request::*;
