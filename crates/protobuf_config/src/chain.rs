use alloy::primitives::{Address, B256};
use zkchain_config::{
    Checker, FeeModelVersion, L1BatchCommitDataGeneratorMode, MempoolConfig,
    OperationsManagerConfig, StateKeeperConfig,
};

use crate::proto::chain as proto;
use crate::repr::{
    optional_enum, optional_usize, required, required_bytes, required_enum, required_usize,
    usize_to_wire, ProtoRepr,
};

impl proto::FeeModelVersion {
    fn new(n: &FeeModelVersion) -> Self {
        use FeeModelVersion as From;
        match n {
            From::V1 => Self::V1,
            From::V2 => Self::V2,
        }
    }

    fn parse(&self) -> FeeModelVersion {
        use FeeModelVersion as To;
        match self {
            Self::V1 => To::V1,
            Self::V2 => To::V2,
        }
    }
}

impl proto::L1BatchCommitDataGeneratorMode {
    fn new(n: &L1BatchCommitDataGeneratorMode) -> Self {
        use L1BatchCommitDataGeneratorMode as From;
        match n {
            From::Rollup => Self::Rollup,
            From::Validium => Self::Validium,
        }
    }

    fn parse(&self) -> L1BatchCommitDataGeneratorMode {
        use L1BatchCommitDataGeneratorMode as To;
        match self {
            Self::Rollup => To::Rollup,
            Self::Validium => To::Validium,
        }
    }
}

impl ProtoRepr for proto::StateKeeper {
    type Type = StateKeeperConfig;

    fn read_fields(&self, c: &mut Checker<'_>) -> Self::Type {
        Self::Type {
            transaction_slots: required_usize(c, "transaction_slots", &self.transaction_slots),
            block_commit_deadline_ms: required(
                c,
                "block_commit_deadline_ms",
                &self.block_commit_deadline_ms,
            ),
            miniblock_commit_deadline_ms: required(
                c,
                "miniblock_commit_deadline_ms",
                &self.miniblock_commit_deadline_ms,
            ),
            miniblock_seal_queue_capacity: required_usize(
                c,
                "miniblock_seal_queue_capacity",
                &self.miniblock_seal_queue_capacity,
            ),
            max_single_tx_gas: required(c, "max_single_tx_gas", &self.max_single_tx_gas),
            max_allowed_l2_tx_gas_limit: required(
                c,
                "max_allowed_l2_tx_gas_limit",
                &self.max_allowed_l2_tx_gas_limit,
            ),
            reject_tx_at_geometry_percentage: required(
                c,
                "reject_tx_at_geometry_percentage",
                &self.reject_tx_at_geometry_percentage,
            ),
            reject_tx_at_eth_params_percentage: required(
                c,
                "reject_tx_at_eth_params_percentage",
                &self.reject_tx_at_eth_params_percentage,
            ),
            reject_tx_at_gas_percentage: required(
                c,
                "reject_tx_at_gas_percentage",
                &self.reject_tx_at_gas_percentage,
            ),
            close_block_at_geometry_percentage: required(
                c,
                "close_block_at_geometry_percentage",
                &self.close_block_at_geometry_percentage,
            ),
            close_block_at_eth_params_percentage: required(
                c,
                "close_block_at_eth_params_percentage",
                &self.close_block_at_eth_params_percentage,
            ),
            close_block_at_gas_percentage: required(
                c,
                "close_block_at_gas_percentage",
                &self.close_block_at_gas_percentage,
            ),
            fee_account_addr: Address::from(required_bytes::<20>(
                c,
                "fee_account_addr",
                &self.fee_account_addr,
            )),
            minimal_l2_gas_price: required(c, "minimal_l2_gas_price", &self.minimal_l2_gas_price),
            compute_overhead_part: required(
                c,
                "compute_overhead_part",
                &self.compute_overhead_part,
            ),
            pubdata_overhead_part: required(
                c,
                "pubdata_overhead_part",
                &self.pubdata_overhead_part,
            ),
            batch_overhead_l1_gas: required(
                c,
                "batch_overhead_l1_gas",
                &self.batch_overhead_l1_gas,
            ),
            max_gas_per_batch: required(c, "max_gas_per_batch", &self.max_gas_per_batch),
            max_pubdata_per_batch: required(
                c,
                "max_pubdata_per_batch",
                &self.max_pubdata_per_batch,
            ),
            fee_model_version: required_enum::<proto::FeeModelVersion>(
                c,
                "fee_model_version",
                &self.fee_model_version,
            )
            .parse(),
            validation_computational_gas_limit: required(
                c,
                "validation_computational_gas_limit",
                &self.validation_computational_gas_limit,
            ),
            save_call_traces: required(c, "save_call_traces", &self.save_call_traces),
            virtual_blocks_interval: required(
                c,
                "virtual_blocks_interval",
                &self.virtual_blocks_interval,
            ),
            virtual_blocks_per_miniblock: required(
                c,
                "virtual_blocks_per_miniblock",
                &self.virtual_blocks_per_miniblock,
            ),
            enum_index_migration_chunk_size: optional_usize(
                c,
                "enum_index_migration_chunk_size",
                self.enum_index_migration_chunk_size,
            ),
            bootloader_hash: B256::from(required_bytes::<32>(
                c,
                "bootloader_hash",
                &self.bootloader_hash,
            )),
            default_aa_hash: B256::from(required_bytes::<32>(
                c,
                "default_aa_hash",
                &self.default_aa_hash,
            )),
            l1_batch_commit_data_generator_mode: optional_enum::<
                proto::L1BatchCommitDataGeneratorMode,
            >(
                c,
                "l1_batch_commit_data_generator_mode",
                &self.l1_batch_commit_data_generator_mode,
            )
            .parse(),
        }
    }

    fn build(this: &Self::Type) -> Self {
        Self {
            transaction_slots: Some(usize_to_wire(this.transaction_slots)),
            block_commit_deadline_ms: Some(this.block_commit_deadline_ms),
            miniblock_commit_deadline_ms: Some(this.miniblock_commit_deadline_ms),
            miniblock_seal_queue_capacity: Some(usize_to_wire(this.miniblock_seal_queue_capacity)),
            max_single_tx_gas: Some(this.max_single_tx_gas),
            max_allowed_l2_tx_gas_limit: Some(this.max_allowed_l2_tx_gas_limit),
            reject_tx_at_geometry_percentage: Some(this.reject_tx_at_geometry_percentage),
            reject_tx_at_eth_params_percentage: Some(this.reject_tx_at_eth_params_percentage),
            reject_tx_at_gas_percentage: Some(this.reject_tx_at_gas_percentage),
            close_block_at_geometry_percentage: Some(this.close_block_at_geometry_percentage),
            close_block_at_eth_params_percentage: Some(this.close_block_at_eth_params_percentage),
            close_block_at_gas_percentage: Some(this.close_block_at_gas_percentage),
            fee_account_addr: Some(this.fee_account_addr.to_vec()),
            minimal_l2_gas_price: Some(this.minimal_l2_gas_price),
            compute_overhead_part: Some(this.compute_overhead_part),
            pubdata_overhead_part: Some(this.pubdata_overhead_part),
            batch_overhead_l1_gas: Some(this.batch_overhead_l1_gas),
            max_gas_per_batch: Some(this.max_gas_per_batch),
            max_pubdata_per_batch: Some(this.max_pubdata_per_batch),
            fee_model_version: Some(proto::FeeModelVersion::new(&this.fee_model_version).into()),
            validation_computational_gas_limit: Some(this.validation_computational_gas_limit),
            save_call_traces: Some(this.save_call_traces),
            virtual_blocks_interval: Some(this.virtual_blocks_interval),
            virtual_blocks_per_miniblock: Some(this.virtual_blocks_per_miniblock),
            enum_index_migration_chunk_size: this
                .enum_index_migration_chunk_size
                .map(usize_to_wire),
            bootloader_hash: Some(this.bootloader_hash.to_vec()),
            default_aa_hash: Some(this.default_aa_hash.to_vec()),
            l1_batch_commit_data_generator_mode: Some(
                proto::L1BatchCommitDataGeneratorMode::new(
                    &this.l1_batch_commit_data_generator_mode,
                )
                .into(),
            ),
        }
    }
}

impl ProtoRepr for proto::OperationsManager {
    type Type = OperationsManagerConfig;

    fn read_fields(&self, c: &mut Checker<'_>) -> Self::Type {
        Self::Type {
            delay_interval: required(c, "delay_interval", &self.delay_interval),
        }
    }

    fn build(this: &Self::Type) -> Self {
        Self {
            delay_interval: Some(this.delay_interval),
        }
    }
}

impl ProtoRepr for proto::Mempool {
    type Type = MempoolConfig;

    fn read_fields(&self, c: &mut Checker<'_>) -> Self::Type {
        Self::Type {
            sync_interval_ms: required(c, "sync_interval_ms", &self.sync_interval_ms),
            sync_batch_size: required_usize(c, "sync_batch_size", &self.sync_batch_size),
            capacity: required(c, "capacity", &self.capacity),
            stuck_tx_timeout: required(c, "stuck_tx_timeout", &self.stuck_tx_timeout),
            remove_stuck_txs: required(c, "remove_stuck_txs", &self.remove_stuck_txs),
            delay_interval: required(c, "delay_interval", &self.delay_interval),
        }
    }

    fn build(this: &Self::Type) -> Self {
        Self {
            sync_interval_ms: Some(this.sync_interval_ms),
            sync_batch_size: Some(usize_to_wire(this.sync_batch_size)),
            capacity: Some(this.capacity),
            stuck_tx_timeout: Some(this.stuck_tx_timeout),
            remove_stuck_txs: Some(this.remove_stuck_txs),
            delay_interval: Some(this.delay_interval),
        }
    }
}
