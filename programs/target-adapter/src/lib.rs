#![doc = include_str!("../README.md")]

pub mod error;

pub mod events;

mod processor;
pub use processor::InitializeArgs;

pub mod state;

use common::{
    admin::{
        utils::{self, ownable, pending_owner},
        Capability, Role,
    },
    alloy_primitives::Address,
    deposit_contract::DepositContract,
    ledger::{Call, Ledger},
    messages::abi,
};
use error::{Result, TargetAdapterError};
use ruint::aliases::U256;
use state::Custodian;

/// Target adapter deployed on a [Ledger]. Every entry point runs through [Ledger::invoke], so a
/// failed call leaves balances, the event log and the adapter configuration untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetAdapter {
    custodian: Custodian,
}

impl TargetAdapter {
    pub fn initialize(
        ledger: &mut Ledger,
        deployer: &Address,
        args: InitializeArgs,
    ) -> Result<Self> {
        processor::initialize(ledger, deployer, args).map(|custodian| Self { custodian })
    }

    /// `execute(originAdapter, executionData)`, as issued by the bridge handler on behalf of
    /// `origin_adapter`.
    pub fn execute<D>(
        &self,
        ledger: &mut Ledger,
        deposit_contract: &mut D,
        call: Call,
        origin_adapter: &Address,
        execution_data: &[u8],
    ) -> Result<()>
    where
        D: DepositContract,
    {
        let handler = self.only_bridge(&call.caller)?;
        let custodian = &self.custodian;
        ledger.invoke(&call, &custodian.address, |ledger| {
            processor::execute(
                ledger,
                deposit_contract,
                custodian,
                handler,
                origin_adapter,
                execution_data,
            )
        })
    }

    /// Same as [TargetAdapter::execute], taking the ABI-encoded calldata of
    /// `execute(address,bytes)`.
    pub fn execute_calldata<D>(
        &self,
        ledger: &mut Ledger,
        deposit_contract: &mut D,
        call: Call,
        calldata: &[u8],
    ) -> Result<()>
    where
        D: DepositContract,
    {
        let (origin_adapter, execution_data) =
            abi::decode_execute_calldata(calldata).map_err(TargetAdapterError::MalformedCalldata)?;
        self.execute(
            ledger,
            deposit_contract,
            call,
            &origin_adapter,
            &execution_data,
        )
    }

    // Admin.

    pub fn set_origin_adapter(
        &mut self,
        ledger: &mut Ledger,
        caller: &Address,
        origin_adapter: &Address,
        authorized: bool,
    ) -> Result<()> {
        let admin = self.only_owner(caller)?;
        let address = self.address();
        ledger.invoke_mut(
            &Call::new(*caller),
            &address,
            &mut self.custodian,
            |ledger, custodian| {
                processor::set_origin_adapter(ledger, custodian, admin, origin_adapter, authorized)
            },
        )
    }

    /// Sends `amount` of the adapter balance to `to`.
    pub fn withdraw(
        &self,
        ledger: &mut Ledger,
        caller: &Address,
        to: &Address,
        amount: U256,
    ) -> Result<()> {
        let admin = self.only_owner(caller)?;
        let custodian = &self.custodian;
        ledger.invoke(&Call::new(*caller), &custodian.address, |ledger| {
            processor::withdraw(ledger, custodian, admin, to, amount)
        })
    }

    /// Nominates `new_owner`, who takes over once they confirm. Owner only.
    pub fn submit_ownership_transfer_request(
        &mut self,
        caller: &Address,
        new_owner: &Address,
    ) -> Result<()> {
        let admin = self.only_owner(caller)?;
        processor::submit_ownership_transfer_request(&mut self.custodian, admin, new_owner)
    }

    pub fn confirm_ownership_transfer_request(
        &mut self,
        ledger: &mut Ledger,
        caller: &Address,
    ) -> Result<()> {
        if self.custodian.pending_owner.is_none() {
            return Err(TargetAdapterError::NoTransferOwnershipRequest);
        }
        let new_owner = pending_owner::only_pending_owner(&self.custodian, caller)
            .ok_or(TargetAdapterError::NotPendingOwner)?;

        let address = self.address();
        ledger.invoke_mut(
            &Call::new(*caller),
            &address,
            &mut self.custodian,
            |ledger, custodian| {
                processor::confirm_ownership_transfer_request(ledger, custodian, new_owner)
            },
        )
    }

    pub fn cancel_ownership_transfer_request(&mut self, caller: &Address) -> Result<()> {
        let admin = self.only_owner(caller)?;
        processor::cancel_ownership_transfer_request(&mut self.custodian, admin);

        // Done.
        Ok(())
    }

    // Views.

    pub fn address(&self) -> Address {
        self.custodian.address
    }

    pub fn bridge_address(&self) -> Address {
        self.custodian.bridge_address
    }

    pub fn deposit_contract(&self) -> Address {
        self.custodian.deposit_contract
    }

    pub fn is_origin_authorized(&self, origin_adapter: &Address) -> bool {
        self.custodian.is_origin_authorized(origin_adapter)
    }

    pub fn authorized_origins(&self) -> impl Iterator<Item = &Address> {
        self.custodian.authorized_origins.iter()
    }

    pub fn owner(&self) -> Address {
        self.custodian.owner
    }

    pub fn pending_owner(&self) -> Option<Address> {
        self.custodian.pending_owner
    }

    fn only_owner(&self, caller: &Address) -> Result<Capability> {
        ownable::only_owner(&self.custodian, caller).ok_or_else(|| {
            tracing::debug!(%caller, "owner only");
            TargetAdapterError::OwnerOnly
        })
    }

    fn only_bridge(&self, caller: &Address) -> Result<Capability> {
        utils::only_role(&self.custodian.bridge_address, Role::Bridge, caller).ok_or_else(|| {
            tracing::debug!(%caller, "bridge handler only");
            TargetAdapterError::UnauthorizedCaller
        })
    }
}
