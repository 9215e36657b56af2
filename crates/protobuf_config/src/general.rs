use zkchain_config::{Checker, GeneralConfig};

use crate::proto::general as proto;
use crate::repr::{read_optional_repr, ProtoRepr};

impl ProtoRepr for proto::GeneralConfig {
    type Type = GeneralConfig;

    fn read_fields(&self, c: &mut Checker<'_>) -> Self::Type {
        Self::Type {
            network_config: read_optional_repr(c, "network", &self.network),
            state_keeper_config: read_optional_repr(c, "state_keeper", &self.state_keeper),
            operations_manager_config: read_optional_repr(
                c,
                "operations_manager",
                &self.operations_manager,
            ),
            mempool_config: read_optional_repr(c, "mempool", &self.mempool),
            circuit_breaker_config: read_optional_repr(
                c,
                "circuit_breaker",
                &self.circuit_breaker,
            ),
        }
    }

    fn build(this: &Self::Type) -> Self {
        Self {
            network: this.network_config.as_ref().map(ProtoRepr::build),
            state_keeper: this.state_keeper_config.as_ref().map(ProtoRepr::build),
            operations_manager: this
                .operations_manager_config
                .as_ref()
                .map(ProtoRepr::build),
            mempool: this.mempool_config.as_ref().map(ProtoRepr::build),
            circuit_breaker: this.circuit_breaker_config.as_ref().map(ProtoRepr::build),
        }
    }
}
