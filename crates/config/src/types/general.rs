use crate::types::{
    CircuitBreakerConfig, MempoolConfig, NetworkConfig, OperationsManagerConfig,
    StateKeeperConfig,
};
use crate::validation::{Checker, Validate};

/// The full configuration set of a node. Sections absent from the source are `None`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeneralConfig {
    pub network_config: Option<NetworkConfig>,
    pub state_keeper_config: Option<StateKeeperConfig>,
    pub operations_manager_config: Option<OperationsManagerConfig>,
    pub mempool_config: Option<MempoolConfig>,
    pub circuit_breaker_config: Option<CircuitBreakerConfig>,
}

impl GeneralConfig {
    pub fn for_tests() -> Self {
        Self {
            network_config: Some(NetworkConfig::for_tests()),
            state_keeper_config: Some(StateKeeperConfig::for_tests()),
            operations_manager_config: Some(OperationsManagerConfig::for_tests()),
            mempool_config: Some(MempoolConfig::for_tests()),
            circuit_breaker_config: Some(CircuitBreakerConfig::for_tests()),
        }
    }

    /// Names of the sections missing from this configuration.
    pub fn missing_sections(&self) -> Vec<&'static str> {
        let present = [
            ("network", self.network_config.is_some()),
            ("state_keeper", self.state_keeper_config.is_some()),
            ("operations_manager", self.operations_manager_config.is_some()),
            ("mempool", self.mempool_config.is_some()),
            ("circuit_breaker", self.circuit_breaker_config.is_some()),
        ];
        present
            .into_iter()
            .filter_map(|(name, is_present)| (!is_present).then_some(name))
            .collect()
    }
}

impl Validate for GeneralConfig {
    fn validate(&self, checker: &mut Checker<'_>) {
        self.network_config.validate(&mut checker.nested("network"));
        self.state_keeper_config
            .validate(&mut checker.nested("state_keeper"));
        self.operations_manager_config
            .validate(&mut checker.nested("operations_manager"));
        self.mempool_config.validate(&mut checker.nested("mempool"));
        self.circuit_breaker_config
            .validate(&mut checker.nested("circuit_breaker"));
    }
}
