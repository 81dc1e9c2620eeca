//! # Envelope
//!
//! The bytes the origin adapter hands to the bridge, read back the way the handler reads them.

use crate::utils::{
    setup::{valid_execution_data, withdrawal_credentials, Environment},
    *,
};
use common::{
    ledger::Call,
    messages::{abi, raw, Envelope, EnvelopeVariant, MalformedEnvelope},
    ENVELOPE_VARIANT,
};
use hex_literal::hex;
use origin_adapter::DepositArgs;

fn relayed_envelope() -> Vec<u8> {
    let mut env = Environment::connected();
    env.origin
        .deposit(
            &mut env.origin_ledger,
            &mut env.bridge,
            Call::with_value(DEPOSITOR, DEPOSIT_VALUE),
            DepositArgs {
                destination_domain_id: DESTINATION_DOMAIN_ID,
                deposit_amount: DEPOSIT_AMOUNT,
                execution_data: valid_execution_data(),
                fee_data: Vec::new(),
            },
        )
        .unwrap();
    env.bridge.last_deposit().deposit_data.clone()
}

#[test]
fn test_envelope_header() {
    let envelope = relayed_envelope();

    assert_eq!(envelope[..32], [0; 32]);
    assert_eq!(envelope[32..34], hex!("0004"));
    assert_eq!(envelope[34..38], abi::EXECUTE_SELECTOR);
    assert_eq!(envelope[38], 0x14);
    assert_eq!(envelope[39..59], *TARGET_ADAPTER.as_slice());
    assert_eq!(envelope[59], ENVELOPE_VARIANT.depositor_tag());
}

#[test]
fn test_envelope_rejects_other_variant() {
    let envelope = relayed_envelope();

    let other = match ENVELOPE_VARIANT {
        EnvelopeVariant::Packed => EnvelopeVariant::AbiTuple,
        EnvelopeVariant::AbiTuple => EnvelopeVariant::Packed,
    };
    assert_eq!(
        Envelope::parse(&envelope, other).unwrap_err(),
        MalformedEnvelope("Envelope depositor tag does not match expected variant")
    );
}

#[test]
fn test_envelope_handler_calldata() {
    let envelope = relayed_envelope();

    let calldata = raw::Envelope::parse(&envelope, ENVELOPE_VARIANT)
        .unwrap()
        .handler_calldata();
    let (origin_adapter, execution_data) = abi::decode_execute_calldata(&calldata).unwrap();
    assert_eq!(origin_adapter, ORIGIN_ADAPTER);
    assert_eq!(execution_data, valid_execution_data());
}

#[test]
fn test_envelope_round_trip_both_variants() {
    let execution_data = valid_execution_data();

    for variant in [EnvelopeVariant::Packed, EnvelopeVariant::AbiTuple] {
        let encoded =
            Envelope::new(variant, TARGET_ADAPTER, ORIGIN_ADAPTER, execution_data.clone()).to_vec();
        let decoded = Envelope::parse(&encoded, variant).unwrap();

        assert_eq!(
            (
                decoded.target_adapter,
                decoded.origin_adapter,
                decoded.execution_data
            ),
            (TARGET_ADAPTER, ORIGIN_ADAPTER, execution_data.clone())
        );
    }
}

#[test]
fn test_envelope_carries_credentials() {
    let envelope = relayed_envelope();

    let execution_data = raw::Envelope::parse(&envelope, ENVELOPE_VARIANT)
        .unwrap()
        .execution_data()
        .to_vec();
    let payload = common::messages::ExecutionPayload::parse(&execution_data).unwrap();
    assert_eq!(
        payload.withdrawal_credentials[..],
        withdrawal_credentials(&TARGET_ADAPTER)[..]
    );
    assert_eq!(payload.credentials_address(), Some(TARGET_ADAPTER));
}
