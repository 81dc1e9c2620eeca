use crate::{constants::DEFAULT_DEPOSIT_FEE, error::Result, state::Custodian};
use common::{
    alloy_primitives::Address,
    ledger::{Code, Ledger},
    ResourceId,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitializeArgs {
    /// Address to deploy the adapter at.
    pub address: Address,
    pub bridge_address: Address,
    pub resource_id: ResourceId,
}

/// Deploys the adapter. The deployer becomes its owner, the deposit fee starts at
/// [DEFAULT_DEPOSIT_FEE] and no target adapter is configured yet.
pub fn initialize(
    ledger: &mut Ledger,
    deployer: &Address,
    args: InitializeArgs,
) -> Result<Custodian> {
    let InitializeArgs {
        address,
        bridge_address,
        resource_id,
    } = args;

    ledger.deploy(address, Code { payable: false })?;

    tracing::info!(
        %address,
        %bridge_address,
        %resource_id,
        owner = %deployer,
        "origin adapter initialized"
    );

    Ok(Custodian {
        address,
        bridge_address,
        resource_id,
        target_adapter: Address::ZERO,
        deposit_fee: DEFAULT_DEPOSIT_FEE,
        owner: *deployer,
        pending_owner: None,
    })
}
