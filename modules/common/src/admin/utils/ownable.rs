use crate::admin::{Capability, Ownable, Role};
use alloy_primitives::Address;

pub fn only_owner<A>(acct: &A, caller: &Address) -> Option<Capability>
where
    A: Ownable,
{
    super::only_role(acct.owner(), Role::Owner, caller)
}

pub fn transfer_ownership<A>(acct: &mut A, new_owner: &Address)
where
    A: Ownable,
{
    *acct.owner_mut() = *new_owner;
}
