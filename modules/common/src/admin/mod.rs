pub mod utils;

use alloy_primitives::Address;

pub trait Ownable {
    fn owner(&self) -> &Address;

    fn owner_mut(&mut self) -> &mut Address;
}

pub trait PendingOwner: Ownable {
    fn pending_owner(&self) -> &Option<Address>;

    fn pending_owner_mut(&mut self) -> &mut Option<Address>;
}

/// Identity an operation can require of its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Adapter administrator.
    Owner,
    /// Account nominated by the owner to take over administration.
    PendingOwner,
    /// Trusted bridge handler delivering relayed calls.
    Bridge,
}

/// Proof that the caller of the current operation holds a [Role]. Only the checks in
/// [utils] hand these out, so a processor taking one cannot run unchecked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    role: Role,
    holder: Address,
}

impl Capability {
    pub(crate) fn new(role: Role, holder: Address) -> Self {
        Self { role, holder }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn holder(&self) -> Address {
        self.holder
    }
}
