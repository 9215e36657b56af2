// Wire messages of the `zkchain.config.general` package (`proto/zkchain/config/general.proto`).

/// All configuration sections of a node. Every section is optional.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message, ::serde::Serialize, ::serde::Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub network: ::core::option::Option<super::chain::EthNetwork>,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub state_keeper: ::core::option::Option<super::chain::StateKeeper>,
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub operations_manager: ::core::option::Option<super::chain::OperationsManager>,
    #[prost(message, optional, tag = "4")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub mempool: ::core::option::Option<super::chain::Mempool>,
    #[prost(message, optional, tag = "5")]
    #[serde(skip_serializing_if = "::core::option::Option::is_none")]
    pub circuit_breaker: ::core::option::Option<super::chain::CircuitBreaker>,
}
impl ::prost::Name for GeneralConfig {
    const NAME: &'static str = "GeneralConfig";
    const PACKAGE: &'static str = "zkchain.config.general";
    fn full_name() -> ::prost::alloc::string::String {
        "zkchain.config.general.GeneralConfig".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "/zkchain.config.general.GeneralConfig".into()
    }
}
