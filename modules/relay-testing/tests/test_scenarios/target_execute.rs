//! # Target adapter execution
//!
//! Caller and origin authorization, credential checks and forwarding to the deposit contract.

use crate::utils::{
    deposit_contract::TestDepositContract,
    setup::{execution_payload, valid_execution_data, withdrawal_credentials, Environment},
    *,
};
use alloy_primitives::{address, Address, B256};
use common::{
    deposit_contract::DepositContractError,
    ledger::Call,
    messages::{abi, ExecutionPayload},
};
use ruint::aliases::U256;
use target_adapter::{error::TargetAdapterError, events::DepositRelayed};

fn execute(
    env: &mut Environment,
    caller: Address,
    origin_adapter: Address,
    execution_data: &[u8],
) -> Result<(), TargetAdapterError> {
    env.target.execute(
        &mut env.target_ledger,
        &mut env.deposit_contract,
        Call::new(caller),
        &origin_adapter,
        execution_data,
    )
}

/// Bridge liquidity released to the target adapter ahead of `execute`.
fn fund_target(env: &mut Environment, amount: U256) {
    env.target_ledger
        .airdrop(&TARGET_ADAPTER, amount)
        .unwrap();
}

fn assert_not_forwarded(env: &Environment, balance: U256) {
    assert_eq!(env.target_ledger.balance_of(&TARGET_ADAPTER), balance);
    assert_eq!(env.target_ledger.balance_of(&DEPOSIT_CONTRACT), U256::ZERO);
    assert!(env.deposit_contract.deposits.is_empty());
    assert!(env
        .target_ledger
        .events::<DepositRelayed>(&TARGET_ADAPTER)
        .is_empty());
}

#[test]
fn test_execute() {
    let mut env = Environment::connected();
    fund_target(&mut env, DEPOSIT_AMOUNT);

    execute(&mut env, TARGET_HANDLER, ORIGIN_ADAPTER, &valid_execution_data()).unwrap();

    let payload = execution_payload(withdrawal_credentials(&TARGET_ADAPTER), DEPOSIT_DATA_ROOT);
    assert_eq!(
        env.deposit_contract.deposits,
        vec![(payload.clone(), DEPOSIT_AMOUNT)]
    );
    assert_eq!(
        env.target_ledger.balance_of(&DEPOSIT_CONTRACT),
        DEPOSIT_AMOUNT
    );
    assert_eq!(env.target_ledger.balance_of(&TARGET_ADAPTER), U256::ZERO);

    assert_eq!(
        env.target_ledger.events::<DepositRelayed>(&TARGET_ADAPTER),
        vec![DepositRelayed {
            pubkey: payload.pubkey,
            withdrawal_credentials: payload.withdrawal_credentials,
            signature: payload.signature,
            deposit_data_root: payload.deposit_data_root,
        }]
    );
}

#[test]
fn test_execute_forwards_entire_balance() {
    let mut env = Environment::connected();
    fund_target(&mut env, DEPOSIT_AMOUNT);
    fund_target(&mut env, ONE_ETHER);

    execute(&mut env, TARGET_HANDLER, ORIGIN_ADAPTER, &valid_execution_data()).unwrap();

    assert_eq!(
        env.deposit_contract.deposits[0].1,
        DEPOSIT_AMOUNT + ONE_ETHER
    );
    assert_eq!(env.target_ledger.balance_of(&TARGET_ADAPTER), U256::ZERO);
}

#[test]
fn test_execute_not_handler() {
    let mut env = Environment::connected();
    fund_target(&mut env, DEPOSIT_AMOUNT);

    for caller in [STRANGER, OWNER, ORIGIN_ADAPTER, ORIGIN_BRIDGE, TARGET_ADAPTER] {
        let err = execute(&mut env, caller, ORIGIN_ADAPTER, &valid_execution_data()).unwrap_err();
        assert_eq!(err, TargetAdapterError::UnauthorizedCaller);
        assert_eq!(
            err.to_string(),
            "DepositTarget: sender must be handler contract"
        );
    }

    assert_not_forwarded(&env, DEPOSIT_AMOUNT);
}

#[test]
fn test_execute_unauthorized_origin() {
    let mut env = Environment::connected();
    fund_target(&mut env, DEPOSIT_AMOUNT);

    let err = execute(&mut env, TARGET_HANDLER, STRANGER, &valid_execution_data()).unwrap_err();
    assert_eq!(err, TargetAdapterError::UnauthorizedOrigin);
    assert_eq!(err.to_string(), "DepositTarget: invalid origin depositor");

    assert_not_forwarded(&env, DEPOSIT_AMOUNT);
}

#[test]
fn test_execute_after_origin_deauthorized() {
    let mut env = Environment::connected();
    fund_target(&mut env, DEPOSIT_AMOUNT);

    env.target
        .set_origin_adapter(&mut env.target_ledger, &OWNER, &ORIGIN_ADAPTER, true)
        .unwrap();
    env.target
        .set_origin_adapter(&mut env.target_ledger, &OWNER, &ORIGIN_ADAPTER, false)
        .unwrap();
    assert!(!env.target.is_origin_authorized(&ORIGIN_ADAPTER));

    assert_eq!(
        execute(&mut env, TARGET_HANDLER, ORIGIN_ADAPTER, &valid_execution_data()),
        Err(TargetAdapterError::UnauthorizedOrigin)
    );
    assert_not_forwarded(&env, DEPOSIT_AMOUNT);
}

#[test]
fn test_execute_credentials_wrong_length() {
    let mut env = Environment::connected();
    fund_target(&mut env, DEPOSIT_AMOUNT);

    for len in [0, 20, 31, 33, 64] {
        let mut credentials = withdrawal_credentials(&TARGET_ADAPTER);
        credentials.resize(len, 0);
        let execution_data = execution_payload(credentials, DEPOSIT_DATA_ROOT).to_vec();

        let err = execute(&mut env, TARGET_HANDLER, ORIGIN_ADAPTER, &execution_data).unwrap_err();
        assert_eq!(err, TargetAdapterError::InvalidCredentialsLength);
        assert_eq!(
            err.to_string(),
            "DepositTarget: invalid withdrawal_credentials length"
        );
    }

    assert_not_forwarded(&env, DEPOSIT_AMOUNT);
}

#[test]
fn test_execute_credentials_wrong_address() {
    let mut env = Environment::connected();
    fund_target(&mut env, DEPOSIT_AMOUNT);

    for address in [ORIGIN_ADAPTER, DEPOSIT_CONTRACT, TARGET_HANDLER] {
        let execution_data =
            execution_payload(withdrawal_credentials(&address), DEPOSIT_DATA_ROOT).to_vec();

        let err = execute(&mut env, TARGET_HANDLER, ORIGIN_ADAPTER, &execution_data).unwrap_err();
        assert_eq!(err, TargetAdapterError::WrongCredentialsAddress);
        assert_eq!(
            err.to_string(),
            "DepositTarget: wrong withdrawal_credentials address"
        );
    }

    assert_not_forwarded(&env, DEPOSIT_AMOUNT);
}

#[test]
fn test_execute_malformed_execution_data() {
    let mut env = Environment::connected();
    fund_target(&mut env, DEPOSIT_AMOUNT);

    assert!(matches!(
        execute(&mut env, TARGET_HANDLER, ORIGIN_ADAPTER, &[0xff; 100]),
        Err(TargetAdapterError::MalformedExecutionPayload(_))
    ));
    assert_not_forwarded(&env, DEPOSIT_AMOUNT);
}

#[test]
fn test_execute_reused_deposit_data_root() {
    let mut env = Environment::connected();

    fund_target(&mut env, DEPOSIT_AMOUNT);
    execute(&mut env, TARGET_HANDLER, ORIGIN_ADAPTER, &valid_execution_data()).unwrap();

    fund_target(&mut env, DEPOSIT_AMOUNT);
    let err = execute(&mut env, TARGET_HANDLER, ORIGIN_ADAPTER, &valid_execution_data())
        .unwrap_err();
    assert_eq!(
        err,
        TargetAdapterError::DepositForwardingFailed(DepositContractError::Rejected(
            "deposit data root already used".to_string()
        ))
    );
    assert_eq!(err.to_string(), "DepositTarget: deposit failed");

    // Only the first deposit went through; the second amount stays with the adapter.
    assert_eq!(env.deposit_contract.deposits.len(), 1);
    assert_eq!(
        env.target_ledger.balance_of(&DEPOSIT_CONTRACT),
        DEPOSIT_AMOUNT
    );
    assert_eq!(
        env.target_ledger.balance_of(&TARGET_ADAPTER),
        DEPOSIT_AMOUNT
    );
    assert_eq!(
        env.target_ledger
            .events::<DepositRelayed>(&TARGET_ADAPTER)
            .len(),
        1
    );

    // A fresh root goes through and sweeps the stranded amount along with it.
    let execution_data = execution_payload(
        withdrawal_credentials(&TARGET_ADAPTER),
        B256::repeat_byte(0x22),
    )
    .to_vec();
    execute(&mut env, TARGET_HANDLER, ORIGIN_ADAPTER, &execution_data).unwrap();
    assert_eq!(env.deposit_contract.deposits[1].1, DEPOSIT_AMOUNT);
}

#[test]
fn test_execute_without_funds() {
    let mut env = Environment::connected();

    let err = execute(&mut env, TARGET_HANDLER, ORIGIN_ADAPTER, &valid_execution_data())
        .unwrap_err();
    assert_eq!(
        err,
        TargetAdapterError::DepositForwardingFailed(DepositContractError::Rejected(
            "deposit value too low".to_string()
        ))
    );
    assert_not_forwarded(&env, U256::ZERO);
}

#[test]
fn test_execute_other_deposit_contract() {
    let mut env = Environment::connected();
    fund_target(&mut env, DEPOSIT_AMOUNT);
    let mut other = TestDepositContract::deploy(
        &mut env.target_ledger,
        address!("00000000000000000000000000000000000000c9"),
    );

    let err = env
        .target
        .execute(
            &mut env.target_ledger,
            &mut other,
            Call::new(TARGET_HANDLER),
            &ORIGIN_ADAPTER,
            &valid_execution_data(),
        )
        .unwrap_err();
    assert_eq!(err, TargetAdapterError::InvalidDepositContract);
    assert!(other.deposits.is_empty());
    assert_not_forwarded(&env, DEPOSIT_AMOUNT);
}

#[test]
fn test_execute_calldata() {
    let mut env = Environment::connected();
    fund_target(&mut env, DEPOSIT_AMOUNT);

    let mut calldata = abi::EXECUTE_SELECTOR.to_vec();
    calldata.extend_from_slice(&[0xff; 16]);
    assert!(matches!(
        env.target.execute_calldata(
            &mut env.target_ledger,
            &mut env.deposit_contract,
            Call::new(TARGET_HANDLER),
            &calldata,
        ),
        Err(TargetAdapterError::MalformedCalldata(_))
    ));
    assert_not_forwarded(&env, DEPOSIT_AMOUNT);

    let envelope = common::messages::Envelope::new(
        common::ENVELOPE_VARIANT,
        TARGET_ADAPTER,
        ORIGIN_ADAPTER,
        valid_execution_data(),
    )
    .to_vec();
    let calldata = common::messages::raw::Envelope::parse(&envelope, common::ENVELOPE_VARIANT)
        .unwrap()
        .handler_calldata();
    env.target
        .execute_calldata(
            &mut env.target_ledger,
            &mut env.deposit_contract,
            Call::new(TARGET_HANDLER),
            &calldata,
        )
        .unwrap();
    assert_eq!(
        env.deposit_contract.deposits[0].0,
        ExecutionPayload::parse(&valid_execution_data()).unwrap()
    );
}
