//! Typed configuration records of a zkSync-style rollup node and their validation rules.
//!
//! Records are built once at startup (see `zkchain_protobuf_config` for the wire and text
//! codecs), validated, and treated as immutable afterwards.

pub mod constants;
pub mod types;
pub mod validation;

pub use self::{
    types::{
        CircuitBreakerConfig, FeeModelVersion, GeneralConfig, L1BatchCommitDataGeneratorMode,
        L2ChainId, MempoolConfig, Network, NetworkConfig, OperationsManagerConfig,
        StateKeeperConfig,
    },
    validation::{validate, Checker, Validate, ValidationErrors, Violation, ViolationKind},
};
