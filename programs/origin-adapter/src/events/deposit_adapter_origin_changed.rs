use common::alloy_primitives::Address;

common::event! {
    pub struct DepositAdapterOriginChanged {
        pub target_adapter: Address,
    }
}
