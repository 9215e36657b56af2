use zkchain_config::{Checker, CircuitBreakerConfig};

use crate::proto::chain as proto;
use crate::repr::{required, ProtoRepr};

impl ProtoRepr for proto::CircuitBreaker {
    type Type = CircuitBreakerConfig;

    fn read_fields(&self, c: &mut Checker<'_>) -> Self::Type {
        Self::Type {
            sync_interval_ms: required(c, "sync_interval_ms", &self.sync_interval_ms),
            http_req_max_retry_number: required(
                c,
                "http_req_max_retry_number",
                &self.http_req_max_retry_number,
            ),
            http_req_retry_interval_sec: required(
                c,
                "http_req_retry_interval_sec",
                &self.http_req_retry_interval_sec,
            ),
            replication_lag_limit_sec: self.replication_lag_limit_sec,
        }
    }

    fn build(this: &Self::Type) -> Self {
        Self {
            sync_interval_ms: Some(this.sync_interval_ms),
            http_req_max_retry_number: Some(this.http_req_max_retry_number),
            http_req_retry_interval_sec: Some(this.http_req_retry_interval_sec),
            replication_lag_limit_sec: this.replication_lag_limit_sec,
        }
    }
}
