//! In-process model of the chain an adapter is deployed on: native balances, deployed code and
//! the event log, with all-or-nothing execution of calls.

use crate::events::Event;
use alloy_primitives::Address;
use ruint::aliases::U256;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("insufficient funds")]
    InsufficientFunds,

    #[error("transfer rejected by recipient")]
    TransferRejected,

    #[error("balance overflow")]
    BalanceOverflow,

    #[error("address already has code")]
    AddressInUse,

    #[error("event could not be encoded")]
    EventEncoding,
}

/// Code deployed at an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code {
    /// Whether plain transfers (no calldata) are accepted.
    pub payable: bool,
}

/// Transaction context of a single adapter call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Call {
    pub caller: Address,
    pub value: U256,
}

impl Call {
    pub fn new(caller: Address) -> Self {
        Self {
            caller,
            value: U256::ZERO,
        }
    }

    pub fn with_value(caller: Address, value: U256) -> Self {
        Self { caller, value }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub emitter: Address,
    pub name: &'static str,
    pub data: Vec<u8>,
}

#[derive(Debug, Default, Clone)]
pub struct Ledger {
    balances: BTreeMap<Address, U256>,
    code: BTreeMap<Address, Code>,
    logs: Vec<LogEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance_of(&self, account: &Address) -> U256 {
        self.balances.get(account).copied().unwrap_or_default()
    }

    pub fn has_code(&self, account: &Address) -> bool {
        self.code.contains_key(account)
    }

    pub fn deploy(&mut self, address: Address, code: Code) -> Result<(), LedgerError> {
        if self.has_code(&address) {
            return Err(LedgerError::AddressInUse);
        }

        tracing::debug!(%address, payable = code.payable, "deployed");
        self.code.insert(address, code);
        Ok(())
    }

    /// Mints native currency to `to`. Stands in for faucets and for liquidity the bridge
    /// releases on its destination chain.
    pub fn airdrop(&mut self, to: &Address, amount: U256) -> Result<(), LedgerError> {
        self.credit(to, amount)
    }

    /// Plain value transfer. Contracts only accept it if they are payable.
    pub fn transfer(
        &mut self,
        from: &Address,
        to: &Address,
        amount: U256,
    ) -> Result<(), LedgerError> {
        if self.code.get(to).is_some_and(|code| !code.payable) {
            tracing::warn!(%from, %to, %amount, "transfer rejected by recipient");
            return Err(LedgerError::TransferRejected);
        }

        self.move_value(from, to, amount)
    }

    /// Executes `f` as `callee` on behalf of `call`. The attached value moves to `callee` first.
    /// If anything fails, balances and the event log are restored to what they were before the
    /// call.
    pub fn invoke<T, E, F>(&mut self, call: &Call, callee: &Address, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Self) -> Result<T, E>,
        E: From<LedgerError>,
    {
        let balances = self.balances.clone();
        let log_len = self.logs.len();

        let result = self
            .move_value(&call.caller, callee, call.value)
            .map_err(E::from)
            .and_then(|_| f(self));

        if result.is_err() {
            self.balances = balances;
            self.logs.truncate(log_len);
        }

        result
    }

    /// [Ledger::invoke] for a callee holding its own `state`. `f` works on a copy, written back
    /// only if the call succeeds.
    pub fn invoke_mut<S, T, E, F>(
        &mut self,
        call: &Call,
        callee: &Address,
        state: &mut S,
        f: F,
    ) -> Result<T, E>
    where
        S: Clone,
        F: FnOnce(&mut Self, &mut S) -> Result<T, E>,
        E: From<LedgerError>,
    {
        let mut staged = state.clone();
        let out = self.invoke(call, callee, |ledger| f(ledger, &mut staged))?;
        *state = staged;

        Ok(out)
    }

    pub fn emit<E: Event>(&mut self, emitter: &Address, event: &E) -> Result<(), LedgerError> {
        let mut data = Vec::new();
        event.write(&mut data).map_err(|_| LedgerError::EventEncoding)?;

        tracing::debug!(%emitter, name = E::NAME, "event");
        self.logs.push(LogEntry {
            emitter: *emitter,
            name: E::NAME,
            data,
        });
        Ok(())
    }

    /// Decoded events of type `E` emitted by `emitter`, oldest first.
    pub fn events<E: Event>(&self, emitter: &Address) -> Vec<E> {
        self.logs
            .iter()
            .filter(|entry| entry.emitter == *emitter && entry.name == E::NAME)
            .filter_map(|entry| E::read(&mut entry.data.as_slice()).ok())
            .collect()
    }

    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }

    fn move_value(
        &mut self,
        from: &Address,
        to: &Address,
        amount: U256,
    ) -> Result<(), LedgerError> {
        if amount.is_zero() {
            return Ok(());
        }

        let remaining = self
            .balance_of(from)
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientFunds)?;
        self.balances.insert(*from, remaining);

        self.credit(to, amount)
    }

    fn credit(&mut self, to: &Address, amount: U256) -> Result<(), LedgerError> {
        let balance = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;
        self.balances.insert(*to, balance);
        Ok(())
    }
}
