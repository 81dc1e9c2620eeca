//! Zero-copy views over encoded messages. Parsing validates the whole framing, so accessors
//! can index freely.

use crate::{abi, EnvelopeVariant, MalformedEnvelope, ADDRESS_TAG, SELECTOR_LEN};
use alloy_primitives::{Address, B256};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Envelope<'a> {
    span: &'a [u8],
    variant: EnvelopeVariant,
}

impl<'a> AsRef<[u8]> for Envelope<'a> {
    fn as_ref(&self) -> &[u8] {
        self.span
    }
}

impl<'a> Envelope<'a> {
    /// Reserved word, metadata length, selector, target tag, target and depositor tag.
    pub const HEADER_LEN: usize = 60;

    /// Header plus the widest depositor encoding.
    pub const MAX_HEADER_LEN: usize = 92;

    pub fn reserved(&self) -> B256 {
        B256::from_slice(&self.span[..32])
    }

    pub fn metadata_len(&self) -> u16 {
        u16::from_be_bytes([self.span[32], self.span[33]])
    }

    pub fn selector(&self) -> [u8; 4] {
        [self.span[34], self.span[35], self.span[36], self.span[37]]
    }

    pub fn target_adapter(&self) -> Address {
        Address::from_slice(&self.span[39..59])
    }

    pub fn variant(&self) -> EnvelopeVariant {
        self.variant
    }

    /// Origin adapter left-padded to an ABI word, as the generic handler passes it on.
    pub fn depositor_word(&self) -> B256 {
        match self.variant {
            EnvelopeVariant::Packed => self.origin_adapter().into_word(),
            EnvelopeVariant::AbiTuple => B256::from_slice(&self.span[60..92]),
        }
    }

    pub fn origin_adapter(&self) -> Address {
        match self.variant {
            EnvelopeVariant::Packed => Address::from_slice(&self.span[60..80]),
            EnvelopeVariant::AbiTuple => Address::from_slice(&self.span[72..92]),
        }
    }

    /// `offset ‖ length ‖ padded execution data`.
    pub fn execution_tail(&self) -> &'a [u8] {
        match self.variant {
            EnvelopeVariant::Packed => &self.span[80..],
            EnvelopeVariant::AbiTuple => &self.span[92..],
        }
    }

    pub fn execution_data(&self) -> &'a [u8] {
        let tail = self.execution_tail();
        let len = abi::word_to_usize(&tail[32..64]).unwrap_or_default();
        &tail[64..64usize.saturating_add(len)]
    }

    /// Calldata the generic handler sends to the target adapter: the selector followed by the
    /// `(address, bytes)` ABI parameters rebuilt from the depositor and the execution tail.
    pub fn handler_calldata(&self) -> Vec<u8> {
        let tail = self.execution_tail();

        let mut calldata = Vec::with_capacity(tail.len().saturating_add(36));
        calldata.extend_from_slice(&self.selector());
        calldata.extend_from_slice(self.depositor_word().as_slice());
        calldata.extend_from_slice(tail);
        calldata
    }

    /// Validates the whole framing, rejecting any depositor encoding other than `expected`.
    pub fn parse(span: &'a [u8], expected: EnvelopeVariant) -> Result<Self, MalformedEnvelope> {
        if span.len() < Self::HEADER_LEN {
            return Err(MalformedEnvelope(
                "Envelope span too short. Need at least 60 bytes",
            ));
        }

        if span[..32].iter().any(|b| *b != 0) {
            return Err(MalformedEnvelope("Envelope reserved field must be zero"));
        }

        if u16::from_be_bytes([span[32], span[33]]) != SELECTOR_LEN {
            return Err(MalformedEnvelope(
                "Envelope metadata length must equal selector width",
            ));
        }

        if span[38] != ADDRESS_TAG {
            return Err(MalformedEnvelope("Envelope target adapter tag must be 20"));
        }

        let variant = EnvelopeVariant::from_depositor_tag(span[59])
            .ok_or(MalformedEnvelope("Unknown Envelope depositor tag"))?;
        if variant != expected {
            return Err(MalformedEnvelope(
                "Envelope depositor tag does not match expected variant",
            ));
        }

        let tail_start = match variant {
            EnvelopeVariant::Packed => 80,
            EnvelopeVariant::AbiTuple => Self::MAX_HEADER_LEN,
        };
        if span.len() < tail_start {
            return Err(MalformedEnvelope("Envelope depositor length mismatch"));
        }

        if variant == EnvelopeVariant::AbiTuple && span[60..72].iter().any(|b| *b != 0) {
            return Err(MalformedEnvelope(
                "Envelope depositor word has dirty high bytes",
            ));
        }

        abi::decode_execution_tail(&span[tail_start..]).map_err(MalformedEnvelope)?;

        Ok(Self { span, variant })
    }
}
