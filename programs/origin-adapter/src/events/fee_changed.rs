use ruint::aliases::U256;

common::event! {
    pub struct FeeChanged {
        pub new_fee: U256,
    }
}
