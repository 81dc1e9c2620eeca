//! Scenarios that exercise the origin and target adapters together, each on its own ledger,
//! with a test bridge and a test deposit contract in between. See `tests/`.
