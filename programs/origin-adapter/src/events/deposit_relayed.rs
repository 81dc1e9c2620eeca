use common::{
    alloy_primitives::{Bytes, B256},
    DomainId,
};

common::event! {
    /// Deposit handed to the bridge.
    pub struct DepositRelayed {
        /// Encoded envelope, exactly as passed to the bridge.
        pub envelope: Bytes,
        pub destination_domain_id: DomainId,
        /// Nonce the bridge assigned to the deposit.
        pub deposit_nonce: u64,
        pub pubkey: Bytes,
        pub withdrawal_credentials: Bytes,
        pub signature: Bytes,
        pub deposit_data_root: B256,
    }
}
