use std::fmt::Debug;

use prost::Message;
use test_case::test_case;
use zkchain_config::{
    CircuitBreakerConfig, GeneralConfig, L1BatchCommitDataGeneratorMode, MempoolConfig, Network,
    NetworkConfig, OperationsManagerConfig, StateKeeperConfig, ViolationKind,
};

use crate::proto::{chain as proto, general as proto_general};
use crate::{decode, decode_text, encode, encode_as, read_file, write_file, ConfigError, Format, ProtoRepr};

/// Message sharing no tags with `StateKeeper` except the reserved one.
#[derive(Clone, PartialEq, ::prost::Message)]
struct FutureFields {
    #[prost(uint64, optional, tag = "25")]
    legacy: Option<u64>,
    #[prost(string, optional, tag = "100")]
    note: Option<String>,
}

fn violations<T: Debug>(result: Result<T, ConfigError>) -> Vec<(String, ViolationKind)> {
    let err = result.unwrap_err();
    let errors = err
        .validation_errors()
        .unwrap_or_else(|| panic!("expected validation errors, got {err}"));
    errors
        .violations()
        .iter()
        .map(|v| (v.field.clone(), v.kind.clone()))
        .collect()
}

fn decode_modified<P>(value: &P::Type, modify: impl FnOnce(&mut P)) -> Result<P::Type, ConfigError>
where
    P: ProtoRepr,
{
    let mut message = P::build(value);
    modify(&mut message);
    decode::<P>(&message.encode_to_vec())
}

fn missing(field: &str) -> Vec<(String, ViolationKind)> {
    vec![(field.to_owned(), ViolationKind::MissingRequiredField)]
}

#[test]
fn state_keeper_required_fields() {
    let cases: [(&str, fn(&mut proto::StateKeeper)); 26] = [
        ("transaction_slots", |m| m.transaction_slots = None),
        ("block_commit_deadline_ms", |m| m.block_commit_deadline_ms = None),
        ("miniblock_commit_deadline_ms", |m| m.miniblock_commit_deadline_ms = None),
        ("miniblock_seal_queue_capacity", |m| m.miniblock_seal_queue_capacity = None),
        ("max_single_tx_gas", |m| m.max_single_tx_gas = None),
        ("max_allowed_l2_tx_gas_limit", |m| m.max_allowed_l2_tx_gas_limit = None),
        ("reject_tx_at_geometry_percentage", |m| m.reject_tx_at_geometry_percentage = None),
        ("reject_tx_at_eth_params_percentage", |m| m.reject_tx_at_eth_params_percentage = None),
        ("reject_tx_at_gas_percentage", |m| m.reject_tx_at_gas_percentage = None),
        ("close_block_at_geometry_percentage", |m| m.close_block_at_geometry_percentage = None),
        ("close_block_at_eth_params_percentage", |m| {
            m.close_block_at_eth_params_percentage = None
        }),
        ("close_block_at_gas_percentage", |m| m.close_block_at_gas_percentage = None),
        ("fee_account_addr", |m| m.fee_account_addr = None),
        ("minimal_l2_gas_price", |m| m.minimal_l2_gas_price = None),
        ("compute_overhead_part", |m| m.compute_overhead_part = None),
        ("pubdata_overhead_part", |m| m.pubdata_overhead_part = None),
        ("batch_overhead_l1_gas", |m| m.batch_overhead_l1_gas = None),
        ("max_gas_per_batch", |m| m.max_gas_per_batch = None),
        ("max_pubdata_per_batch", |m| m.max_pubdata_per_batch = None),
        ("fee_model_version", |m| m.fee_model_version = None),
        ("validation_computational_gas_limit", |m| m.validation_computational_gas_limit = None),
        ("save_call_traces", |m| m.save_call_traces = None),
        ("virtual_blocks_interval", |m| m.virtual_blocks_interval = None),
        ("virtual_blocks_per_miniblock", |m| m.virtual_blocks_per_miniblock = None),
        ("bootloader_hash", |m| m.bootloader_hash = None),
        ("default_aa_hash", |m| m.default_aa_hash = None),
    ];
    for (field, clear) in cases {
        let result = decode_modified::<proto::StateKeeper>(&StateKeeperConfig::for_tests(), clear);
        assert_eq!(violations(result), missing(field), "field {field}");
    }
}

#[test_case("delay_interval", |m: &mut proto::OperationsManager| m.delay_interval = None ; "delay_interval absent")]
fn operations_manager_required_fields(field: &str, clear: fn(&mut proto::OperationsManager)) {
    let result =
        decode_modified::<proto::OperationsManager>(&OperationsManagerConfig::for_tests(), clear);
    assert_eq!(violations(result), missing(field));
}

#[test_case("sync_interval_ms", |m: &mut proto::Mempool| m.sync_interval_ms = None ; "sync_interval_ms absent")]
#[test_case("sync_batch_size", |m: &mut proto::Mempool| m.sync_batch_size = None ; "sync_batch_size absent")]
#[test_case("capacity", |m: &mut proto::Mempool| m.capacity = None ; "capacity absent")]
#[test_case("stuck_tx_timeout", |m: &mut proto::Mempool| m.stuck_tx_timeout = None ; "stuck_tx_timeout absent")]
#[test_case("remove_stuck_txs", |m: &mut proto::Mempool| m.remove_stuck_txs = None ; "remove_stuck_txs absent")]
#[test_case("delay_interval", |m: &mut proto::Mempool| m.delay_interval = None ; "delay_interval absent")]
fn mempool_required_fields(field: &str, clear: fn(&mut proto::Mempool)) {
    let result = decode_modified::<proto::Mempool>(&MempoolConfig::for_tests(), clear);
    assert_eq!(violations(result), missing(field));
}

#[test_case("sync_interval_ms", |m: &mut proto::CircuitBreaker| m.sync_interval_ms = None ; "sync_interval_ms absent")]
#[test_case("http_req_max_retry_number", |m: &mut proto::CircuitBreaker| m.http_req_max_retry_number = None ; "http_req_max_retry_number absent")]
#[test_case("http_req_retry_interval_sec", |m: &mut proto::CircuitBreaker| m.http_req_retry_interval_sec = None ; "http_req_retry_interval_sec absent")]
fn circuit_breaker_required_fields(field: &str, clear: fn(&mut proto::CircuitBreaker)) {
    let result =
        decode_modified::<proto::CircuitBreaker>(&CircuitBreakerConfig::for_tests(), clear);
    assert_eq!(violations(result), missing(field));
}

#[test_case("network", |m: &mut proto::EthNetwork| m.network = None ; "network absent")]
#[test_case("network", |m: &mut proto::EthNetwork| m.network = Some(proto::Network::Unknown.into()) ; "network unknown")]
#[test_case("zksync_network", |m: &mut proto::EthNetwork| m.zksync_network = None ; "zksync_network absent")]
#[test_case("zksync_network_id", |m: &mut proto::EthNetwork| m.zksync_network_id = None ; "zksync_network_id absent")]
fn network_required_fields(field: &str, clear: fn(&mut proto::EthNetwork)) {
    let result = decode_modified::<proto::EthNetwork>(&NetworkConfig::for_tests(), clear);
    assert_eq!(violations(result), missing(field));
}

#[test]
fn optional_fields_may_be_absent() {
    let config = decode_modified::<proto::StateKeeper>(&StateKeeperConfig::for_tests(), |m| {
        m.enum_index_migration_chunk_size = None;
        m.l1_batch_commit_data_generator_mode = None;
    })
    .unwrap();
    assert_eq!(config.enum_index_migration_chunk_size, None);
    assert_eq!(
        config.l1_batch_commit_data_generator_mode,
        L1BatchCommitDataGeneratorMode::Rollup
    );

    let config =
        decode_modified::<proto::CircuitBreaker>(&CircuitBreakerConfig::for_tests(), |m| {
            m.replication_lag_limit_sec = None;
        })
        .unwrap();
    assert_eq!(config.replication_lag_limit(), None);
}

#[test]
fn single_out_of_range_percentage() {
    let config = StateKeeperConfig {
        reject_tx_at_gas_percentage: 101.0,
        ..StateKeeperConfig::for_tests()
    };
    let result = decode::<proto::StateKeeper>(&encode::<proto::StateKeeper>(&config));
    assert_eq!(
        violations(result),
        vec![(
            "reject_tx_at_gas_percentage".to_owned(),
            ViolationKind::OutOfRangeValue {
                value: "101".to_owned(),
                expected: "a percentage in [0, 100]",
            }
        )]
    );
}

#[test_case(0.0, true)]
#[test_case(100.0, true)]
#[test_case(-0.5, false)]
#[test_case(100.5, false)]
fn percentage_bounds_on_the_wire(value: f64, accepted: bool) {
    let result = decode_modified::<proto::StateKeeper>(&StateKeeperConfig::for_tests(), |m| {
        m.close_block_at_geometry_percentage = Some(value);
    });
    assert_eq!(result.is_ok(), accepted);
}

#[test_case(0.0, true)]
#[test_case(1.0, true)]
#[test_case(-0.1, false)]
#[test_case(1.1, false)]
fn fraction_bounds_on_the_wire(value: f64, accepted: bool) {
    let result = decode_modified::<proto::StateKeeper>(&StateKeeperConfig::for_tests(), |m| {
        m.pubdata_overhead_part = Some(value);
    });
    assert_eq!(result.is_ok(), accepted);
}

#[test_case("fee_account_addr", 19, 20)]
#[test_case("fee_account_addr", 21, 20)]
#[test_case("bootloader_hash", 31, 32)]
#[test_case("bootloader_hash", 33, 32)]
#[test_case("default_aa_hash", 0, 32)]
#[test_case("default_aa_hash", 20, 32)]
fn binary_fields_have_fixed_length(field: &str, actual: usize, expected: usize) {
    let bytes = vec![0xab; actual];
    let result = decode_modified::<proto::StateKeeper>(&StateKeeperConfig::for_tests(), |m| {
        let slot = match field {
            "fee_account_addr" => &mut m.fee_account_addr,
            "bootloader_hash" => &mut m.bootloader_hash,
            _ => &mut m.default_aa_hash,
        };
        *slot = Some(bytes);
    });
    assert_eq!(
        violations(result),
        vec![(
            field.to_owned(),
            ViolationKind::InvalidLength { expected, actual }
        )]
    );
}

#[test]
fn unrecognized_enum_values_are_reported() {
    let result = decode_modified::<proto::StateKeeper>(&StateKeeperConfig::for_tests(), |m| {
        m.fee_model_version = Some(7);
        m.l1_batch_commit_data_generator_mode = Some(-1);
    });
    assert_eq!(
        violations(result),
        vec![
            (
                "fee_model_version".to_owned(),
                ViolationKind::InvalidEnumValue {
                    enum_name: "FeeModelVersion",
                    value: 7
                }
            ),
            (
                "l1_batch_commit_data_generator_mode".to_owned(),
                ViolationKind::InvalidEnumValue {
                    enum_name: "L1BatchCommitDataGeneratorMode",
                    value: -1
                }
            ),
        ]
    );
}

#[test]
fn violations_are_aggregated_in_rule_order() {
    let result = decode_modified::<proto::StateKeeper>(&StateKeeperConfig::for_tests(), |m| {
        m.fee_model_version = Some(5);
        m.fee_account_addr = Some(vec![1; 19]);
        m.max_gas_per_batch = Some(0);
        m.save_call_traces = None;
        m.transaction_slots = None;
    });
    let fields: Vec<_> = violations(result).into_iter().map(|(field, _)| field).collect();
    assert_eq!(
        fields,
        [
            "transaction_slots",
            "save_call_traces",
            "max_gas_per_batch",
            "fee_account_addr",
            "fee_model_version",
        ]
    );
}

#[test]
fn unknown_fields_are_ignored() {
    let config = StateKeeperConfig::for_tests();
    let mut bytes = encode::<proto::StateKeeper>(&config);
    FutureFields {
        legacy: Some(42),
        note: Some("added in a later version".to_owned()),
    }
    .encode(&mut bytes)
    .unwrap();
    assert_eq!(decode::<proto::StateKeeper>(&bytes).unwrap(), config);
}

#[test]
fn malformed_bytes_fail_to_decode() {
    // Field 1 with the varint wire type, but the varint itself is missing.
    let err = decode::<proto::Mempool>(&[0x08]).unwrap_err();
    assert!(matches!(err, ConfigError::Decode { .. }), "{err}");
    assert!(err.to_string().contains("zkchain.config.chain.Mempool"));
}

// Hand-encoded messages pinning the field numbers of the `.proto` contract.
const MEMPOOL_BYTES: [u8; 18] = [
    0x08, 0x0a, // 1: sync_interval_ms = 10
    0x10, 0xe8, 0x07, // 2: sync_batch_size = 1000
    0x18, 0x80, 0xad, 0xe2, 0x04, // 3: capacity = 10_000_000
    0x20, 0x80, 0xc6, 0x0a, // 4: stuck_tx_timeout = 172_800
    0x28, 0x01, // 5: remove_stuck_txs = true
    0x30, 0x64, // 6: delay_interval = 100
];
const CIRCUIT_BREAKER_BYTES: [u8; 10] = [
    0x08, 0xb0, 0xea, 0x01, // 1: sync_interval_ms = 30_000
    0x10, 0x05, // 2: http_req_max_retry_number = 5
    0x18, 0x02, // 3: http_req_retry_interval_sec = 2
    0x20, 0x64, // 4: replication_lag_limit_sec = 100
];
const NETWORK_BYTES: [u8; 16] = [
    0x08, 0x06, // 1: network = LOCALHOST
    0x12, 0x09, b'l', b'o', b'c', b'a', b'l', b'h', b'o', b's', b't', // 2: zksync_network
    0x18, 0x8e, 0x02, // 3: zksync_network_id = 270
];

#[test]
fn state_keeper_field_numbers() {
    let bytes = [
        0x08, 0xfa, 0x01, // 1: transaction_slots = 250
        0x28, 0xac, 0x02, // 5: max_single_tx_gas = 300
        0x39, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0xee, 0x3f, // 7: 0.95
        0x6a, 0x02, 0xab, 0xcd, // 13: fee_account_addr
        0xa0, 0x01, 0x01, // 20: fee_model_version = V2
        0xb0, 0x01, 0x01, // 22: save_call_traces = true
        0xc8, 0x01, 0x07, // 25: reserved
        0xd0, 0x01, 0x88, 0x27, // 26: enum_index_migration_chunk_size = 5000
        0xe8, 0x01, 0x01, // 29: l1_batch_commit_data_generator_mode = Validium
    ];
    let message = proto::StateKeeper::decode(bytes.as_slice()).unwrap();
    assert_eq!(
        message,
        proto::StateKeeper {
            transaction_slots: Some(250),
            max_single_tx_gas: Some(300),
            reject_tx_at_geometry_percentage: Some(0.95),
            fee_account_addr: Some(vec![0xab, 0xcd]),
            fee_model_version: Some(proto::FeeModelVersion::V2.into()),
            save_call_traces: Some(true),
            enum_index_migration_chunk_size: Some(5000),
            l1_batch_commit_data_generator_mode: Some(
                proto::L1BatchCommitDataGeneratorMode::Validium.into()
            ),
            ..Default::default()
        }
    );
}

#[test]
fn mempool_field_numbers() {
    assert_eq!(
        decode::<proto::Mempool>(&MEMPOOL_BYTES).unwrap(),
        MempoolConfig::for_tests()
    );
    assert_eq!(
        encode::<proto::Mempool>(&MempoolConfig::for_tests()),
        MEMPOOL_BYTES
    );
}

#[test]
fn circuit_breaker_field_numbers() {
    assert_eq!(
        decode::<proto::CircuitBreaker>(&CIRCUIT_BREAKER_BYTES).unwrap(),
        CircuitBreakerConfig::for_tests()
    );
    assert_eq!(
        encode::<proto::CircuitBreaker>(&CircuitBreakerConfig::for_tests()),
        CIRCUIT_BREAKER_BYTES
    );
}

#[test]
fn network_field_numbers() {
    assert_eq!(
        decode::<proto::EthNetwork>(&NETWORK_BYTES).unwrap(),
        NetworkConfig::for_tests()
    );
    assert_eq!(
        encode::<proto::EthNetwork>(&NetworkConfig::for_tests()),
        NETWORK_BYTES
    );
}

#[test]
fn general_section_field_numbers() {
    let mut bytes = vec![0x22, MEMPOOL_BYTES.len() as u8]; // 4: mempool
    bytes.extend_from_slice(&MEMPOOL_BYTES);
    bytes.extend_from_slice(&[0x2a, CIRCUIT_BREAKER_BYTES.len() as u8]); // 5: circuit_breaker
    bytes.extend_from_slice(&CIRCUIT_BREAKER_BYTES);
    bytes.extend_from_slice(&[0x0a, NETWORK_BYTES.len() as u8]); // 1: network
    bytes.extend_from_slice(&NETWORK_BYTES);

    let config = decode::<proto_general::GeneralConfig>(&bytes).unwrap();
    assert_eq!(
        config,
        GeneralConfig {
            network_config: Some(NetworkConfig::for_tests()),
            mempool_config: Some(MempoolConfig::for_tests()),
            circuit_breaker_config: Some(CircuitBreakerConfig::for_tests()),
            ..GeneralConfig::default()
        }
    );
}

#[test]
fn integer_extremes_roundtrip() {
    let circuit_breaker = CircuitBreakerConfig {
        http_req_max_retry_number: u32::MAX,
        replication_lag_limit_sec: Some(u32::MAX),
        ..CircuitBreakerConfig::for_tests()
    };
    let decoded = decode::<proto::CircuitBreaker>(&encode::<proto::CircuitBreaker>(
        &circuit_breaker,
    ))
    .unwrap();
    assert_eq!(decoded, circuit_breaker);

    let mempool = MempoolConfig {
        sync_batch_size: usize::MAX,
        capacity: u64::MAX,
        ..MempoolConfig::for_tests()
    };
    let decoded = decode::<proto::Mempool>(&encode::<proto::Mempool>(&mempool)).unwrap();
    assert_eq!(decoded, mempool);
}

fn sample_configs() -> Vec<GeneralConfig> {
    let mut validium = GeneralConfig::for_tests();
    if let Some(state_keeper) = validium.state_keeper_config.as_mut() {
        state_keeper.l1_batch_commit_data_generator_mode = L1BatchCommitDataGeneratorMode::Validium;
        state_keeper.enum_index_migration_chunk_size = Some(5000);
        state_keeper.reject_tx_at_gas_percentage = 100.0;
    }
    if let Some(network) = validium.network_config.as_mut() {
        network.network = Network::Sepolia;
    }
    let partial = GeneralConfig {
        mempool_config: Some(MempoolConfig::for_tests()),
        ..GeneralConfig::default()
    };
    vec![GeneralConfig::for_tests(), validium, partial]
}

#[test_case(Format::Binary)]
#[test_case(Format::Yaml)]
#[test_case(Format::Json)]
fn roundtrip(format: Format) {
    for config in sample_configs() {
        let bytes = encode_as::<proto_general::GeneralConfig>(format, &config).unwrap();
        let decoded = crate::decode_as::<proto_general::GeneralConfig>(format, &bytes).unwrap();
        assert_eq!(decoded, config);
    }
}

#[test]
fn general_config_reports_section_paths() {
    let mut message = proto_general::GeneralConfig::build(&GeneralConfig::for_tests());
    if let Some(state_keeper) = message.state_keeper.as_mut() {
        state_keeper.max_gas_per_batch = None;
    }
    if let Some(circuit_breaker) = message.circuit_breaker.as_mut() {
        circuit_breaker.sync_interval_ms = Some(0);
    }
    let result = decode::<proto_general::GeneralConfig>(&message.encode_to_vec());
    let fields: Vec<_> = violations(result).into_iter().map(|(field, _)| field).collect();
    assert_eq!(
        fields,
        [
            "state_keeper.max_gas_per_batch",
            "circuit_breaker.sync_interval_ms"
        ]
    );
}

const GENERAL_YAML: &str = r#"
network:
  network: LOCALHOST
  zksync_network: localhost
  zksync_network_id: 270
state_keeper:
  transaction_slots: 250
  block_commit_deadline_ms: 2500
  miniblock_commit_deadline_ms: 1000
  miniblock_seal_queue_capacity: 10
  max_single_tx_gas: 6000000
  max_allowed_l2_tx_gas_limit: 4000000000
  reject_tx_at_geometry_percentage: 0.95
  reject_tx_at_eth_params_percentage: 0.95
  reject_tx_at_gas_percentage: 0.95
  close_block_at_geometry_percentage: 0.95
  close_block_at_eth_params_percentage: 0.95
  close_block_at_gas_percentage: 0.95
  fee_account_addr: "0xde03a0B5963f75f1C8485B355fF6D30f3093BDE7"
  minimal_l2_gas_price: 100000000
  compute_overhead_part: 0.0
  pubdata_overhead_part: 1.0
  batch_overhead_l1_gas: 800000
  max_gas_per_batch: 200000000
  max_pubdata_per_batch: 100000
  fee_model_version: V2
  validation_computational_gas_limit: 300000
  save_call_traces: true
  virtual_blocks_interval: 1
  virtual_blocks_per_miniblock: 1
  bootloader_hash: "0x0101010101010101010101010101010101010101010101010101010101010101"
  default_aa_hash: "0x0202020202020202020202020202020202020202020202020202020202020202"
  field_from_the_future: 123
operations_manager:
  delay_interval: 100
mempool:
  sync_interval_ms: 10
  sync_batch_size: 1000
  capacity: 10000000
  stuck_tx_timeout: 172800
  remove_stuck_txs: true
  delay_interval: 100
circuit_breaker:
  sync_interval_ms: 30000
  http_req_max_retry_number: 5
  http_req_retry_interval_sec: 2
  replication_lag_limit_sec: 100
"#;

#[test]
fn parses_handwritten_yaml() {
    let config = decode_text::<proto_general::GeneralConfig>(Format::Yaml, GENERAL_YAML).unwrap();
    assert_eq!(config, GeneralConfig::for_tests());
}

#[test]
fn yaml_violations_are_reported_together() {
    let yaml = r#"
mempool:
  sync_interval_ms: 0
  capacity: 10
  stuck_tx_timeout: 10
  remove_stuck_txs: false
  delay_interval: 10
network:
  network: 99
  zksync_network: ""
  zksync_network_id: 270
"#;
    let result = decode_text::<proto_general::GeneralConfig>(Format::Yaml, yaml);
    assert_eq!(
        violations(result),
        vec![
            (
                "mempool.sync_batch_size".to_owned(),
                ViolationKind::MissingRequiredField
            ),
            (
                "network.zksync_network".to_owned(),
                ViolationKind::OutOfRangeValue {
                    value: "\"\"".to_owned(),
                    expected: "a non-empty string",
                }
            ),
            (
                "mempool.sync_interval_ms".to_owned(),
                ViolationKind::OutOfRangeValue {
                    value: "0".to_owned(),
                    expected: "a value greater than 0",
                }
            ),
            (
                "network.network".to_owned(),
                ViolationKind::InvalidEnumValue {
                    enum_name: "Network",
                    value: 99
                }
            ),
        ]
    );
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let err = decode_text::<proto_general::GeneralConfig>(Format::Yaml, "mempool: [1, 2")
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Parse {
            format: Format::Yaml,
            ..
        }
    ));
}

#[test]
fn files_roundtrip_in_every_format() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneralConfig::for_tests();
    for name in ["general.yaml", "general.json", "general.pb"] {
        let path = dir.path().join(name);
        write_file::<proto_general::GeneralConfig>(&path, None, &config).unwrap();
        let loaded = read_file::<proto_general::GeneralConfig>(&path, None).unwrap();
        assert_eq!(loaded, config, "{name}");
    }
}

#[test]
fn explicit_format_overrides_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mempool.conf");
    let config = MempoolConfig::for_tests();

    let err = write_file::<proto::Mempool>(&path, None, &config).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownFormat(_)));

    write_file::<proto::Mempool>(&path, Some(Format::Json), &config).unwrap();
    let loaded = read_file::<proto::Mempool>(&path, Some(Format::Json)).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_file::<proto::Mempool>(&dir.path().join("absent.yaml"), None).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
