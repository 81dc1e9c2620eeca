#![doc = include_str!("../README.md")]

pub mod constants;

pub mod error;

pub mod events;

mod processor;
pub use processor::{DepositArgs, InitializeArgs};

pub mod state;

use common::{
    admin::{
        utils::{ownable, pending_owner},
        Capability,
    },
    alloy_primitives::Address,
    bridge::Bridge,
    ledger::{Call, Ledger},
    ResourceId,
};
use error::{OriginAdapterError, Result};
use ruint::aliases::U256;
use state::Custodian;

/// Origin adapter deployed on a [Ledger]. Every entry point runs through [Ledger::invoke], so a
/// failed call leaves balances, the event log and the adapter configuration untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginAdapter {
    custodian: Custodian,
}

impl OriginAdapter {
    pub fn initialize(
        ledger: &mut Ledger,
        deployer: &Address,
        args: InitializeArgs,
    ) -> Result<Self> {
        processor::initialize(ledger, deployer, args).map(|custodian| Self { custodian })
    }

    /// Relays a deposit through `bridge`. See [DepositArgs].
    pub fn deposit<B>(
        &self,
        ledger: &mut Ledger,
        bridge: &mut B,
        call: Call,
        args: DepositArgs,
    ) -> Result<u64>
    where
        B: Bridge,
    {
        let custodian = &self.custodian;
        ledger.invoke(&call, &custodian.address, |ledger| {
            processor::deposit(ledger, bridge, custodian, &call, args)
        })
    }

    // Admin.

    pub fn change_fee(
        &mut self,
        ledger: &mut Ledger,
        caller: &Address,
        new_fee: U256,
    ) -> Result<()> {
        let admin = self.only_owner(caller)?;
        let address = self.address();
        ledger.invoke_mut(
            &Call::new(*caller),
            &address,
            &mut self.custodian,
            |ledger, custodian| processor::change_fee(ledger, custodian, admin, new_fee),
        )
    }

    pub fn change_target_adapter(
        &mut self,
        ledger: &mut Ledger,
        caller: &Address,
        target_adapter: &Address,
    ) -> Result<()> {
        let admin = self.only_owner(caller)?;
        let address = self.address();
        ledger.invoke_mut(
            &Call::new(*caller),
            &address,
            &mut self.custodian,
            |ledger, custodian| {
                processor::change_target_adapter(ledger, custodian, admin, target_adapter)
            },
        )
    }

    /// Sends `amount` of collected fees to `to`.
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
            return Err(OriginAdapterError::NoTransferOwnershipRequest);
        }
        let new_owner = pending_owner::only_pending_owner(&self.custodian, caller)
            .ok_or(OriginAdapterError::NotPendingOwner)?;

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

    pub fn resource_id(&self) -> ResourceId {
        self.custodian.resource_id
    }

    pub fn target_adapter(&self) -> Address {
        self.custodian.target_adapter
    }

    pub fn deposit_fee(&self) -> U256 {
        self.custodian.deposit_fee
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
            OriginAdapterError::OwnerOnly
        })
    }
}
