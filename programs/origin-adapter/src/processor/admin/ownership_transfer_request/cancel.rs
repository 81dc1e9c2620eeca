use crate::state::Custodian;
use common::admin::{utils::pending_owner, Capability};

pub fn cancel_ownership_transfer_request(custodian: &mut Custodian, admin: Capability) {
    pending_owner::cancel_transfer_ownership(custodian);
    tracing::info!(owner = %admin.holder(), "ownership transfer cancelled");
}
