pub mod ownable;

pub mod pending_owner;

use super::{Capability, Role};
use alloy_primitives::Address;

/// Grants `role` when `caller` is the address configured for it.
pub fn only_role(configured: &Address, role: Role, caller: &Address) -> Option<Capability> {
    (configured == caller).then(|| Capability::new(role, *caller))
}
