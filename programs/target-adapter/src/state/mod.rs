mod custodian;
pub use custodian::*;
