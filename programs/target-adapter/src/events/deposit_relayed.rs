use common::alloy_primitives::{Bytes, B256};

common::event! {
    /// Deposit forwarded to the deposit contract.
    pub struct DepositRelayed {
        pub pubkey: Bytes,
        pub withdrawal_credentials: Bytes,
        pub signature: Bytes,
        pub deposit_data_root: B256,
    }
}
