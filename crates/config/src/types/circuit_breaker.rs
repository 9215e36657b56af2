use std::time::Duration;

use crate::validation::{Checker, Validate};

/// Thresholds of the health-check loop that halts the node on detected faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircuitBreakerConfig {
    pub sync_interval_ms: u64,
    pub http_req_max_retry_number: u32,
    pub http_req_retry_interval_sec: u32,
    /// Lag-based tripping is disabled when unset.
    pub replication_lag_limit_sec: Option<u32>,
}

impl CircuitBreakerConfig {
    pub fn for_tests() -> Self {
        Self {
            sync_interval_ms: 30_000,
            http_req_max_retry_number: 5,
            http_req_retry_interval_sec: 2,
            replication_lag_limit_sec: Some(100),
        }
    }

    pub fn sync_interval(&self) -> Duration {
        Duration::from_millis(self.sync_interval_ms)
    }

    pub fn http_req_retry_interval(&self) -> Duration {
        Duration::from_secs(self.http_req_retry_interval_sec.into())
    }

    pub fn replication_lag_limit(&self) -> Option<Duration> {
        self.replication_lag_limit_sec
            .map(|limit| Duration::from_secs(limit.into()))
    }
}

impl Validate for CircuitBreakerConfig {
    fn validate(&self, checker: &mut Checker<'_>) {
        checker.positive("sync_interval_ms", self.sync_interval_ms);
        checker.positive(
            "http_req_retry_interval_sec",
            self.http_req_retry_interval_sec,
        );
    }
}
