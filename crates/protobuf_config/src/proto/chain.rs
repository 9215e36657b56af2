// Wire messages of the `zkchain.config.chain` package (`proto/zkchain/config/chain.proto`).

/// Network identity of the node.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct EthNetwork {
    /// required
    #[prost(enumeration = "Network", optional, tag = "1")]
    #[serde(
        default,
        skip_serializing_if = "::core::option::Option::is_none",
        serialize_with = "crate::serde_helpers::proto_enum::serialize::<Network, _>",
        deserialize_with = "crate::serde_helpers::proto_enum::deserialize::<Network, _>"
    )]
    pub network: ::core::option::Option<i32>,
    /// required
    #[prost(string, optional, tag = "2")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub zksync_network: ::core::option::Option<::prost::alloc::string::String>,
    /// required
    #[prost(uint64, optional, tag = "3")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub zksync_network_id: ::core::option::Option<u64>,
}
impl ::prost::Name for EthNetwork {
    const NAME: &'static str = "EthNetwork";
    const PACKAGE: &'static str = "zkchain.config.chain";
    fn full_name() -> ::prost::alloc::string::String {
        "zkchain.config.chain.EthNetwork".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "/zkchain.config.chain.EthNetwork".into()
    }
}

/// Batch sealing parameters. Tag 25 is reserved.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct StateKeeper {
    /// required
    #[prost(uint64, optional, tag = "1")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub transaction_slots: ::core::option::Option<u64>,
    /// required; ms
    #[prost(uint64, optional, tag = "2")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub block_commit_deadline_ms: ::core::option::Option<u64>,
    /// required; ms
    #[prost(uint64, optional, tag = "3")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub miniblock_commit_deadline_ms: ::core::option::Option<u64>,
    /// required
    #[prost(uint64, optional, tag = "4")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub miniblock_seal_queue_capacity: ::core::option::Option<u64>,
    /// required; gas?
    #[prost(uint32, optional, tag = "5")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub max_single_tx_gas: ::core::option::Option<u32>,
    /// required; wei?
    #[prost(uint32, optional, tag = "6")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub max_allowed_l2_tx_gas_limit: ::core::option::Option<u32>,
    /// required; %
    #[prost(double, optional, tag = "7")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub reject_tx_at_geometry_percentage: ::core::option::Option<f64>,
    /// required; %
    #[prost(double, optional, tag = "8")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub reject_tx_at_eth_params_percentage: ::core::option::Option<f64>,
    /// required; %
    #[prost(double, optional, tag = "9")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub reject_tx_at_gas_percentage: ::core::option::Option<f64>,
    /// required; %
    #[prost(double, optional, tag = "10")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub close_block_at_geometry_percentage: ::core::option::Option<f64>,
    /// required; %
    #[prost(double, optional, tag = "11")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub close_block_at_eth_params_percentage: ::core::option::Option<f64>,
    /// required; %
    #[prost(double, optional, tag = "12")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub close_block_at_gas_percentage: ::core::option::Option<f64>,
    /// required; H160
    #[prost(bytes = "vec", optional, tag = "13")]
    #[serde(
        default,
        skip_serializing_if = "::core::option::Option::is_none",
        with = "crate::serde_helpers::opt_bytes_hex"
    )]
    pub fee_account_addr: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    /// required; wei?
    #[prost(uint64, optional, tag = "14")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub minimal_l2_gas_price: ::core::option::Option<u64>,
    /// required; \[0,1\]
    #[prost(double, optional, tag = "15")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub compute_overhead_part: ::core::option::Option<f64>,
    /// required; \[0,1\]
    #[prost(double, optional, tag = "16")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub pubdata_overhead_part: ::core::option::Option<f64>,
    /// required; wei?
    #[prost(uint64, optional, tag = "17")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub batch_overhead_l1_gas: ::core::option::Option<u64>,
    /// required; wei?
    #[prost(uint64, optional, tag = "18")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub max_gas_per_batch: ::core::option::Option<u64>,
    /// required; bytes?
    #[prost(uint64, optional, tag = "19")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub max_pubdata_per_batch: ::core::option::Option<u64>,
    /// required
    #[prost(enumeration = "FeeModelVersion", optional, tag = "20")]
    #[serde(
        default,
        skip_serializing_if = "::core::option::Option::is_none",
        serialize_with = "crate::serde_helpers::proto_enum::serialize::<FeeModelVersion, _>",
        deserialize_with = "crate::serde_helpers::proto_enum::deserialize::<FeeModelVersion, _>"
    )]
    pub fee_model_version: ::core::option::Option<i32>,
    /// required; wei?
    #[prost(uint32, optional, tag = "21")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub validation_computational_gas_limit: ::core::option::Option<u32>,
    /// required
    #[prost(bool, optional, tag = "22")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub save_call_traces: ::core::option::Option<bool>,
    /// required
    #[prost(uint32, optional, tag = "23")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub virtual_blocks_interval: ::core::option::Option<u32>,
    /// required
    #[prost(uint32, optional, tag = "24")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub virtual_blocks_per_miniblock: ::core::option::Option<u32>,
    /// optional
    #[prost(uint64, optional, tag = "26")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub enum_index_migration_chunk_size: ::core::option::Option<u64>,
    /// required; H256
    #[prost(bytes = "vec", optional, tag = "27")]
    #[serde(
        default,
        skip_serializing_if = "::core::option::Option::is_none",
        with = "crate::serde_helpers::opt_bytes_hex"
    )]
    pub bootloader_hash: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    /// required; H256
    #[prost(bytes = "vec", optional, tag = "28")]
    #[serde(
        default,
        skip_serializing_if = "::core::option::Option::is_none",
        with = "crate::serde_helpers::opt_bytes_hex"
    )]
    pub default_aa_hash: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    /// optional, default to rollup
    #[prost(enumeration = "L1BatchCommitDataGeneratorMode", optional, tag = "29")]
    #[serde(
        default,
        skip_serializing_if = "::core::option::Option::is_none",
        serialize_with = "crate::serde_helpers::proto_enum::serialize::<L1BatchCommitDataGeneratorMode, _>",
        deserialize_with = "crate::serde_helpers::proto_enum::deserialize::<L1BatchCommitDataGeneratorMode, _>"
    )]
    pub l1_batch_commit_data_generator_mode: ::core::option::Option<i32>,
}
impl ::prost::Name for StateKeeper {
    const NAME: &'static str = "StateKeeper";
    const PACKAGE: &'static str = "zkchain.config.chain";
    fn full_name() -> ::prost::alloc::string::String {
        "zkchain.config.chain.StateKeeper".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "/zkchain.config.chain.StateKeeper".into()
    }
}

/// Delay of the operations manager loop.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct OperationsManager {
    /// required; ms
    #[prost(uint64, optional, tag = "1")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub delay_interval: ::core::option::Option<u64>,
}
impl ::prost::Name for OperationsManager {
    const NAME: &'static str = "OperationsManager";
    const PACKAGE: &'static str = "zkchain.config.chain";
    fn full_name() -> ::prost::alloc::string::String {
        "zkchain.config.chain.OperationsManager".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "/zkchain.config.chain.OperationsManager".into()
    }
}

/// Pending-transaction pool settings.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct Mempool {
    /// required; ms
    #[prost(uint64, optional, tag = "1")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub sync_interval_ms: ::core::option::Option<u64>,
    /// required
    #[prost(uint64, optional, tag = "2")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub sync_batch_size: ::core::option::Option<u64>,
    /// required
    #[prost(uint64, optional, tag = "3")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub capacity: ::core::option::Option<u64>,
    /// required; s
    #[prost(uint64, optional, tag = "4")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub stuck_tx_timeout: ::core::option::Option<u64>,
    /// required
    #[prost(bool, optional, tag = "5")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub remove_stuck_txs: ::core::option::Option<bool>,
    /// required; ms
    #[prost(uint64, optional, tag = "6")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub delay_interval: ::core::option::Option<u64>,
}
impl ::prost::Name for Mempool {
    const NAME: &'static str = "Mempool";
    const PACKAGE: &'static str = "zkchain.config.chain";
    fn full_name() -> ::prost::alloc::string::String {
        "zkchain.config.chain.Mempool".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "/zkchain.config.chain.Mempool".into()
    }
}

/// Health-check loop thresholds.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct CircuitBreaker {
    /// required; ms
    #[prost(uint64, optional, tag = "1")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub sync_interval_ms: ::core::option::Option<u64>,
    /// required
    #[prost(uint32, optional, tag = "2")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub http_req_max_retry_number: ::core::option::Option<u32>,
    /// required; s
    #[prost(uint32, optional, tag = "3")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub http_req_retry_interval_sec: ::core::option::Option<u32>,
    /// optional; s
    #[prost(uint32, optional, tag = "4")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub replication_lag_limit_sec: ::core::option::Option<u32>,
}
impl ::prost::Name for CircuitBreaker {
    const NAME: &'static str = "CircuitBreaker";
    const PACKAGE: &'static str = "zkchain.config.chain";
    fn full_name() -> ::prost::alloc::string::String {
        "zkchain.config.chain.CircuitBreaker".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "/zkchain.config.chain.CircuitBreaker".into()
    }
}

/// Deployment environment of the node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Network {
    Unknown = 0,
    Mainnet = 1,
    Rinkeby = 2,
    Ropsten = 3,
    Goerli = 4,
    Sepolia = 5,
    Localhost = 6,
    Test = 7,
}
impl Network {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Mainnet => "MAINNET",
            Self::Rinkeby => "RINKEBY",
            Self::Ropsten => "ROPSTEN",
            Self::Goerli => "GOERLI",
            Self::Sepolia => "SEPOLIA",
            Self::Localhost => "LOCALHOST",
            Self::Test => "TEST",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "UNKNOWN" => Some(Self::Unknown),
            "MAINNET" => Some(Self::Mainnet),
            "RINKEBY" => Some(Self::Rinkeby),
            "ROPSTEN" => Some(Self::Ropsten),
            "GOERLI" => Some(Self::Goerli),
            "SEPOLIA" => Some(Self::Sepolia),
            "LOCALHOST" => Some(Self::Localhost),
            "TEST" => Some(Self::Test),
            _ => None,
        }
    }
}

/// Fee computation formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum FeeModelVersion {
    V1 = 0,
    V2 = 1,
}
impl FeeModelVersion {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::V1 => "V1",
            Self::V2 => "V2",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "V1" => Some(Self::V1),
            "V2" => Some(Self::V2),
            _ => None,
        }
    }
}

/// Data-availability strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum L1BatchCommitDataGeneratorMode {
    Rollup = 0,
    Validium = 1,
}
impl L1BatchCommitDataGeneratorMode {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Rollup => "Rollup",
            Self::Validium => "Validium",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "Rollup" => Some(Self::Rollup),
            "Validium" => Some(Self::Validium),
            _ => None,
        }
    }
}
