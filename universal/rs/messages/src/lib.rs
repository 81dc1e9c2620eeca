pub mod abi;

mod envelope;
pub use envelope::*;

mod execution_payload;
pub use execution_payload::*;

pub mod raw;

pub use alloy_primitives;
pub use wormhole_io;
