use crate::{
    error::{Result, TargetAdapterError},
    state::Custodian,
};
use common::{
    alloy_primitives::Address,
    ledger::{Code, Ledger},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitializeArgs {
    /// Address to deploy the adapter at.
    pub address: Address,
    pub bridge_address: Address,

    /// Must already be deployed.
    pub deposit_contract: Address,
}

/// Deploys the adapter with no authorized origins. The deployer becomes its owner.
pub fn initialize(
    ledger: &mut Ledger,
    deployer: &Address,
    args: InitializeArgs,
) -> Result<Custodian> {
    let InitializeArgs {
        address,
        bridge_address,
        deposit_contract,
    } = args;

    if !ledger.has_code(&deposit_contract) {
        return Err(TargetAdapterError::InvalidDepositContract);
    }

    // Bridge liquidity arrives as plain transfers.
    ledger.deploy(address, Code { payable: true })?;

    tracing::info!(
        %address,
        %bridge_address,
        %deposit_contract,
        owner = %deployer,
        "target adapter initialized"
    );

    Ok(Custodian {
        address,
        bridge_address,
        deposit_contract,
        authorized_origins: Default::default(),
        owner: *deployer,
        pending_owner: None,
    })
}
