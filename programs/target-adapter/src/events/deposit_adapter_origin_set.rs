use common::alloy_primitives::Address;

common::event! {
    pub struct DepositAdapterOriginSet {
        pub origin_adapter: Address,
        pub authorized: bool,
    }
}
