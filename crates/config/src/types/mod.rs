mod chain;
mod circuit_breaker;
mod general;
mod network;

pub use self::{
    chain::{
        FeeModelVersion, L1BatchCommitDataGeneratorMode, MempoolConfig, OperationsManagerConfig,
        StateKeeperConfig,
    },
    circuit_breaker::CircuitBreakerConfig,
    general::GeneralConfig,
    network::{L2ChainId, Network, NetworkConfig},
};
