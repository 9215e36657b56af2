use zkchain_config::{
    CircuitBreakerConfig, GeneralConfig, MempoolConfig, NetworkConfig, OperationsManagerConfig,
    StateKeeperConfig,
};

use crate::utils::to_human_size;

/// Short, human readable description of a validated record.
pub trait Summary {
    fn summary(&self) -> Vec<String>;

    /// Things that are valid but probably not what the operator intended.
    fn warnings(&self) -> Vec<String> {
        vec![]
    }
}

impl Summary for NetworkConfig {
    fn summary(&self) -> Vec<String> {
        vec![format!(
            "Network: {} (`{}`, chain id {})",
            self.network, self.zksync_network, self.zksync_network_id
        )]
    }
}

impl Summary for StateKeeperConfig {
    fn summary(&self) -> Vec<String> {
        vec![
            format!(
                "State keeper: {} tx slots, {} gas / {} pubdata per batch",
                self.transaction_slots,
                to_human_size(self.max_gas_per_batch),
                to_human_size(self.max_pubdata_per_batch),
            ),
            format!(
                "  Fee model: {}, L1 batch commit data: {}, fee account {}",
                self.fee_model_version,
                self.l1_batch_commit_data_generator_mode,
                self.fee_account_addr
            ),
            format!(
                "  Commit deadlines: {:?} (batch), {:?} (miniblock)",
                self.block_commit_deadline(),
                self.miniblock_commit_deadline()
            ),
        ]
    }
}

impl Summary for OperationsManagerConfig {
    fn summary(&self) -> Vec<String> {
        vec![format!(
            "Operations manager: delay interval {:?}",
            self.delay_interval()
        )]
    }
}

impl Summary for MempoolConfig {
    fn summary(&self) -> Vec<String> {
        vec![format!(
            "Mempool: capacity {}, sync every {:?} in batches of {}, stuck tx timeout {:?}{}",
            to_human_size(self.capacity),
            self.sync_interval(),
            self.sync_batch_size,
            self.stuck_tx_timeout(),
            if self.remove_stuck_txs {
                " (removed)"
            } else {
                ""
            }
        )]
    }
}

impl Summary for CircuitBreakerConfig {
    fn summary(&self) -> Vec<String> {
        let lag = match self.replication_lag_limit() {
            Some(limit) => format!("{limit:?}"),
            None => "unlimited".to_owned(),
        };
        vec![format!(
            "Circuit breaker: sync every {:?}, {} HTTP retries, replication lag limit {lag}",
            self.sync_interval(),
            self.http_req_max_retry_number
        )]
    }
}

impl Summary for GeneralConfig {
    fn summary(&self) -> Vec<String> {
        let mut lines = vec![];
        if let Some(config) = &self.network_config {
            lines.extend(config.summary());
        }
        if let Some(config) = &self.state_keeper_config {
            lines.extend(config.summary());
        }
        if let Some(config) = &self.operations_manager_config {
            lines.extend(config.summary());
        }
        if let Some(config) = &self.mempool_config {
            lines.extend(config.summary());
        }
        if let Some(config) = &self.circuit_breaker_config {
            lines.extend(config.summary());
        }
        lines
    }

    fn warnings(&self) -> Vec<String> {
        self.missing_sections()
            .into_iter()
            .map(|section| format!("section `{section}` is not set"))
            .collect()
    }
}
