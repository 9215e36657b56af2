use alloy::primitives::{address, Address};

/// Chain id used by localhost deployments and the test configurations.
pub const DEFAULT_L2_CHAIN_ID: u64 = 270;
/// Operator account receiving the fees in the test configurations.
pub const DEFAULT_FEE_ACCOUNT: Address = address!("de03a0B5963f75f1C8485B355fF6D30f3093BDE7");
/// Default minimal L2 gas price (0.1 gwei).
pub const DEFAULT_MINIMAL_L2_GAS_PRICE: u64 = 100_000_000;
pub const DEFAULT_BATCH_OVERHEAD_L1_GAS: u64 = 800_000;
pub const DEFAULT_MAX_GAS_PER_BATCH: u64 = 200_000_000;
pub const DEFAULT_MAX_PUBDATA_PER_BATCH: u64 = 100_000;
/// Seal and reject threshold shared by the test state keeper configuration.
pub const DEFAULT_SEAL_PERCENTAGE: f64 = 0.95;
