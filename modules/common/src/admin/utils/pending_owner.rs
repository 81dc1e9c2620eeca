use crate::admin::{Capability, PendingOwner, Role};
use alloy_primitives::Address;

pub fn only_pending_owner<A>(acct: &A, caller: &Address) -> Option<Capability>
where
    A: PendingOwner,
{
    acct.pending_owner()
        .as_ref()
        .and_then(|pending| super::only_role(pending, Role::PendingOwner, caller))
}

pub fn transfer_ownership<A>(acct: &mut A, new_owner: &Address)
where
    A: PendingOwner,
{
    acct.pending_owner_mut().replace(*new_owner);
}

/// Promotes the pending owner. Returns the previous owner, or `None` if there was no pending
/// owner to promote.
pub fn accept_ownership<A>(acct: &mut A) -> Option<Address>
where
    A: PendingOwner,
{
    let new_owner = acct.pending_owner_mut().take()?;
    Some(std::mem::replace(acct.owner_mut(), new_owner))
}

pub fn cancel_transfer_ownership<A>(acct: &mut A)
where
    A: PendingOwner,
{
    *acct.pending_owner_mut() = None;
}
