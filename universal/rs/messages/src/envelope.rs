//! Envelope

use crate::{abi, raw};
use alloy_primitives::Address;
use wormhole_io::Writeable;

/// Width of the destination selector, which is also the only accepted metadata length.
pub const SELECTOR_LEN: u16 = 4;

/// Length tag preceding a raw 20-byte address.
pub const ADDRESS_TAG: u8 = 20;

/// Length tag preceding an address left-padded to a 32-byte ABI word.
pub const WORD_TAG: u8 = 32;

/// Encoding of the origin adapter (the depositor) inside an envelope. Each variant is identified
/// by its length tag, and decoding always states which one it expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvelopeVariant {
    /// `0x14 ‖ address`. The generic handler left-pads the depositor itself.
    Packed,
    /// `0x20 ‖ pad32(address)`. The remainder reads as a complete `(address, bytes)` ABI tuple.
    AbiTuple,
}

impl EnvelopeVariant {
    pub const fn depositor_tag(&self) -> u8 {
        match self {
            Self::Packed => ADDRESS_TAG,
            Self::AbiTuple => WORD_TAG,
        }
    }

    pub const fn from_depositor_tag(tag: u8) -> Option<Self> {
        match tag {
            ADDRESS_TAG => Some(Self::Packed),
            WORD_TAG => Some(Self::AbiTuple),
            _ => None,
        }
    }
}

/// Envelope bytes that do not follow the framing, carrying the first violation found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Malformed envelope: {0}")]
pub struct MalformedEnvelope(pub &'static str);

/// Cross-domain call descriptor handed to the bridge by the origin adapter.
///
/// ```text
/// [32] reserved (zero)
/// [2]  metadata length (4)
/// [4]  selector
/// [1]  0x14 ‖ [20] target adapter
/// [1]  depositor tag ‖ origin adapter (20 or 32 bytes, see EnvelopeVariant)
/// [..] ABI tail: offset (0x40) ‖ length ‖ execution data padded to 32 bytes
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub variant: EnvelopeVariant,
    pub selector: [u8; 4],
    pub target_adapter: Address,
    pub origin_adapter: Address,
    pub execution_data: Vec<u8>,
}

impl Envelope {
    /// Envelope calling `execute(address,bytes)` on `target_adapter`.
    pub fn new(
        variant: EnvelopeVariant,
        target_adapter: Address,
        origin_adapter: Address,
        execution_data: Vec<u8>,
    ) -> Self {
        Self {
            variant,
            selector: abi::EXECUTE_SELECTOR,
            target_adapter,
            origin_adapter,
            execution_data,
        }
    }

    /// Decodes an envelope, rejecting any variant other than `expected`.
    pub fn parse(span: &[u8], expected: EnvelopeVariant) -> Result<Self, MalformedEnvelope> {
        raw::Envelope::parse(span, expected).map(Into::into)
    }

    pub fn to_vec(&self) -> Vec<u8> {
        let tail = abi::encode_execution_tail(&self.execution_data);

        let mut encoded =
            Vec::with_capacity(raw::Envelope::MAX_HEADER_LEN.saturating_add(tail.len()));
        encoded.extend_from_slice(&[0; 32]);
        encoded.extend_from_slice(&SELECTOR_LEN.to_be_bytes());
        encoded.extend_from_slice(&self.selector);
        encoded.push(ADDRESS_TAG);
        encoded.extend_from_slice(self.target_adapter.as_slice());
        encoded.push(self.variant.depositor_tag());
        match self.variant {
            EnvelopeVariant::Packed => encoded.extend_from_slice(self.origin_adapter.as_slice()),
            EnvelopeVariant::AbiTuple => {
                encoded.extend_from_slice(self.origin_adapter.into_word().as_slice())
            }
        }
        encoded.extend_from_slice(&tail);

        encoded
    }
}

impl<'a> From<raw::Envelope<'a>> for Envelope {
    fn from(envelope: raw::Envelope<'a>) -> Self {
        Self {
            variant: envelope.variant(),
            selector: envelope.selector(),
            target_adapter: envelope.target_adapter(),
            origin_adapter: envelope.origin_adapter(),
            execution_data: envelope.execution_data().to_vec(),
        }
    }
}

impl Writeable for Envelope {
    fn write<W>(&self, writer: &mut W) -> std::io::Result<()>
    where
        Self: Sized,
        W: std::io::Write,
    {
        writer.write_all(&self.to_vec())
    }
}
