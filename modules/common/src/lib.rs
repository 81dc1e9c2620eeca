pub mod admin;

pub mod bridge;

mod credentials;
pub use credentials::*;

pub mod deposit_contract;

pub mod events;

pub mod ledger;

pub use deposit_relay_messages as messages;
pub use messages::{alloy_primitives, wormhole_io};

use alloy_primitives::B256;
use messages::EnvelopeVariant;

/// Bridge-assigned chain identifier.
pub type DomainId = u8;

/// Bridge tag of the route an envelope travels on.
pub type ResourceId = B256;

cfg_if::cfg_if! {
    if #[cfg(feature = "abi-tuple-envelope")] {
        /// Envelope encoding the deployed bridge handler decodes.
        pub const ENVELOPE_VARIANT: EnvelopeVariant = EnvelopeVariant::AbiTuple;
    } else {
        /// Envelope encoding the deployed bridge handler decodes.
        pub const ENVELOPE_VARIANT: EnvelopeVariant = EnvelopeVariant::Packed;
    }
}
