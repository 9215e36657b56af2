use std::time::Duration;

use alloy::primitives::{Address, B256};
use strum::{Display, EnumString};

use crate::constants::{
    DEFAULT_BATCH_OVERHEAD_L1_GAS, DEFAULT_FEE_ACCOUNT, DEFAULT_MAX_GAS_PER_BATCH,
    DEFAULT_MAX_PUBDATA_PER_BATCH, DEFAULT_MINIMAL_L2_GAS_PRICE, DEFAULT_SEAL_PERCENTAGE,
};
use crate::validation::{Checker, Validate};

/// Formula the state keeper uses to compute transaction fees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum FeeModelVersion {
    V1,
    V2,
}

/// Data-availability strategy used when committing L1 batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
pub enum L1BatchCommitDataGeneratorMode {
    /// Full transaction data is published to L1.
    #[default]
    Rollup,
    /// Transaction data is kept off L1.
    Validium,
}

/// Batch sealing parameters of the state keeper.
#[derive(Debug, Clone, PartialEq)]
pub struct StateKeeperConfig {
    /// The max number of slots for txs in a block before it should be sealed by the slots sealer.
    pub transaction_slots: usize,

    /// Number of ms after which an L1 batch is going to be unconditionally sealed.
    pub block_commit_deadline_ms: u64,
    /// Number of ms after which a miniblock should be sealed by the timeout sealer.
    pub miniblock_commit_deadline_ms: u64,
    /// Capacity of the queue for asynchronous miniblock sealing. Once this many miniblocks are queued,
    /// sealing will block until some of the miniblocks from the queue are processed.
    pub miniblock_seal_queue_capacity: usize,

    /// The max number of gas to spend on an L1 tx before its batch should be sealed by the gas sealer.
    pub max_single_tx_gas: u32,

    pub max_allowed_l2_tx_gas_limit: u32,

    /// Configuration option for tx to be rejected in case
    /// it takes more percentage of the block capacity than this value.
    pub reject_tx_at_geometry_percentage: f64,
    /// Configuration option for tx to be rejected in case
    /// it takes more percentage of the block capacity than this value.
    pub reject_tx_at_eth_params_percentage: f64,
    /// Configuration option for tx to be rejected in case
    /// it takes more percentage of the block capacity than this value.
    pub reject_tx_at_gas_percentage: f64,

    /// Denotes the percentage of geometry params used in L2 block that triggers L2 block seal.
    pub close_block_at_geometry_percentage: f64,
    /// Denotes the percentage of L1 params used in L2 block that triggers L2 block seal.
    pub close_block_at_eth_params_percentage: f64,
    /// Denotes the percentage of L1 gas used in L2 block that triggers L2 block seal.
    pub close_block_at_gas_percentage: f64,

    pub fee_account_addr: Address,

    /// The minimal acceptable L2 gas price, i.e. the price that should include the cost of computation/proving as well
    /// as potentially premium for congestion.
    pub minimal_l2_gas_price: u64,
    /// The constant that represents the possibility that a batch can be sealed because of overuse of computation resources.
    /// It has range from 0 to 1. If it is 0, the compute will not depend on the cost for closing the batch.
    /// If it is 1, the gas limit per batch will have to cover the entire cost of closing the batch.
    pub compute_overhead_part: f64,
    /// The constant that represents the possibility that a batch can be sealed because of overuse of pubdata.
    /// It has range from 0 to 1. If it is 0, the pubdata will not depend on the cost for closing the batch.
    /// If it is 1, the pubdata limit per batch will have to cover the entire cost of closing the batch.
    pub pubdata_overhead_part: f64,
    /// The constant amount of L1 gas that is used as the overhead for the batch. It includes the price for batch verification, etc.
    pub batch_overhead_l1_gas: u64,
    /// The maximum amount of gas that can be used by the batch. This value is derived from the circuits limitation per batch.
    pub max_gas_per_batch: u64,
    /// The maximum amount of pubdata that can be used by the batch. Note that if the calldata is used as pubdata, this variable should not exceed 128kb.
    pub max_pubdata_per_batch: u64,

    /// The version of the fee model to use.
    pub fee_model_version: FeeModelVersion,

    /// Max number of computational gas that validation step is allowed to take.
    pub validation_computational_gas_limit: u32,
    pub save_call_traces: bool,

    /// Number of miniblocks between virtual block batches.
    pub virtual_blocks_interval: u32,
    /// Number of virtual blocks created per miniblock.
    pub virtual_blocks_per_miniblock: u32,

    /// Chunk size for the enumeration index migration. The migration uses its own default when unset.
    pub enum_index_migration_chunk_size: Option<usize>,

    pub bootloader_hash: B256,
    pub default_aa_hash: B256,

    pub l1_batch_commit_data_generator_mode: L1BatchCommitDataGeneratorMode,
}

impl StateKeeperConfig {
    /// Creates a config object suitable for use in unit tests.
    /// Values mostly repeat the values used in the localhost environment.
    pub fn for_tests() -> Self {
        Self {
            transaction_slots: 250,
            block_commit_deadline_ms: 2500,
            miniblock_commit_deadline_ms: 1000,
            miniblock_seal_queue_capacity: 10,
            max_single_tx_gas: 6_000_000,
            max_allowed_l2_tx_gas_limit: 4_000_000_000,
            reject_tx_at_geometry_percentage: DEFAULT_SEAL_PERCENTAGE,
            reject_tx_at_eth_params_percentage: DEFAULT_SEAL_PERCENTAGE,
            reject_tx_at_gas_percentage: DEFAULT_SEAL_PERCENTAGE,
            close_block_at_geometry_percentage: DEFAULT_SEAL_PERCENTAGE,
            close_block_at_eth_params_percentage: DEFAULT_SEAL_PERCENTAGE,
            close_block_at_gas_percentage: DEFAULT_SEAL_PERCENTAGE,
            fee_account_addr: DEFAULT_FEE_ACCOUNT,
            minimal_l2_gas_price: DEFAULT_MINIMAL_L2_GAS_PRICE,
            compute_overhead_part: 0.0,
            pubdata_overhead_part: 1.0,
            batch_overhead_l1_gas: DEFAULT_BATCH_OVERHEAD_L1_GAS,
            max_gas_per_batch: DEFAULT_MAX_GAS_PER_BATCH,
            max_pubdata_per_batch: DEFAULT_MAX_PUBDATA_PER_BATCH,
            fee_model_version: FeeModelVersion::V2,
            validation_computational_gas_limit: 300_000,
            save_call_traces: true,
            virtual_blocks_interval: 1,
            virtual_blocks_per_miniblock: 1,
            enum_index_migration_chunk_size: None,
            bootloader_hash: B256::repeat_byte(0x01),
            default_aa_hash: B256::repeat_byte(0x02),
            l1_batch_commit_data_generator_mode: L1BatchCommitDataGeneratorMode::Rollup,
        }
    }

    pub fn block_commit_deadline(&self) -> Duration {
        Duration::from_millis(self.block_commit_deadline_ms)
    }

    pub fn miniblock_commit_deadline(&self) -> Duration {
        Duration::from_millis(self.miniblock_commit_deadline_ms)
    }
}

impl Validate for StateKeeperConfig {
    fn validate(&self, checker: &mut Checker<'_>) {
        checker.positive("transaction_slots", self.transaction_slots);
        checker.positive("block_commit_deadline_ms", self.block_commit_deadline_ms);
        checker.positive(
            "miniblock_commit_deadline_ms",
            self.miniblock_commit_deadline_ms,
        );
        checker.positive(
            "miniblock_seal_queue_capacity",
            self.miniblock_seal_queue_capacity,
        );
        checker.positive("max_single_tx_gas", self.max_single_tx_gas);
        checker.positive(
            "max_allowed_l2_tx_gas_limit",
            self.max_allowed_l2_tx_gas_limit,
        );

        for (field, value) in [
            (
                "reject_tx_at_geometry_percentage",
                self.reject_tx_at_geometry_percentage,
            ),
            (
                "reject_tx_at_eth_params_percentage",
                self.reject_tx_at_eth_params_percentage,
            ),
            ("reject_tx_at_gas_percentage", self.reject_tx_at_gas_percentage),
            (
                "close_block_at_geometry_percentage",
                self.close_block_at_geometry_percentage,
            ),
            (
                "close_block_at_eth_params_percentage",
                self.close_block_at_eth_params_percentage,
            ),
            (
                "close_block_at_gas_percentage",
                self.close_block_at_gas_percentage,
            ),
        ] {
            checker.percentage(field, value);
        }

        checker.fraction("compute_overhead_part", self.compute_overhead_part);
        checker.fraction("pubdata_overhead_part", self.pubdata_overhead_part);
        checker.positive("batch_overhead_l1_gas", self.batch_overhead_l1_gas);
        checker.positive("max_gas_per_batch", self.max_gas_per_batch);
        checker.positive("max_pubdata_per_batch", self.max_pubdata_per_batch);
        checker.positive(
            "validation_computational_gas_limit",
            self.validation_computational_gas_limit,
        );
        checker.positive("virtual_blocks_interval", self.virtual_blocks_interval);
        checker.positive(
            "virtual_blocks_per_miniblock",
            self.virtual_blocks_per_miniblock,
        );
        if let Some(chunk_size) = self.enum_index_migration_chunk_size {
            checker.positive("enum_index_migration_chunk_size", chunk_size);
        }
    }
}

/// Settings of the delayed-retry loop of the operations manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationsManagerConfig {
    /// Sleep time in ms when there is no new input data.
    pub delay_interval: u64,
}

impl OperationsManagerConfig {
    pub fn for_tests() -> Self {
        Self {
            delay_interval: 100,
        }
    }

    pub fn delay_interval(&self) -> Duration {
        Duration::from_millis(self.delay_interval)
    }
}

impl Validate for OperationsManagerConfig {
    fn validate(&self, checker: &mut Checker<'_>) {
        checker.positive("delay_interval", self.delay_interval);
    }
}

/// Settings of the pending-transaction pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MempoolConfig {
    pub sync_interval_ms: u64,
    pub sync_batch_size: usize,
    pub capacity: u64,
    /// In seconds.
    pub stuck_tx_timeout: u64,
    pub remove_stuck_txs: bool,
    pub delay_interval: u64,
}

impl MempoolConfig {
    pub fn for_tests() -> Self {
        Self {
            sync_interval_ms: 10,
            sync_batch_size: 1000,
            capacity: 10_000_000,
            stuck_tx_timeout: 172_800,
            remove_stuck_txs: true,
            delay_interval: 100,
        }
    }

    pub fn sync_interval(&self) -> Duration {
        Duration::from_millis(self.sync_interval_ms)
    }

    pub fn stuck_tx_timeout(&self) -> Duration {
        Duration::from_secs(self.stuck_tx_timeout)
    }

    pub fn delay_interval(&self) -> Duration {
        Duration::from_millis(self.delay_interval)
    }
}

impl Validate for MempoolConfig {
    fn validate(&self, checker: &mut Checker<'_>) {
        checker.positive("sync_interval_ms", self.sync_interval_ms);
        checker.positive("sync_batch_size", self.sync_batch_size);
        checker.positive("capacity", self.capacity);
        checker.positive("stuck_tx_timeout", self.stuck_tx_timeout);
        checker.positive("delay_interval", self.delay_interval);
    }
}
