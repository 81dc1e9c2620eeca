use ruint::{aliases::U256, uint};

/// Fee charged per deposit until the owner changes it (3.2 native units).
pub const DEFAULT_DEPOSIT_FEE: U256 = uint!(3_200_000_000_000_000_000_U256);
