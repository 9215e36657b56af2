use std::fmt;

use strum::{Display, EnumIter, EnumString};

use crate::constants::DEFAULT_L2_CHAIN_ID;
use crate::validation::{Checker, Validate};

/// Deployment environment the node targets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Network {
    /// Unset. Never valid in a loaded configuration.
    #[default]
    Unknown,
    Mainnet,
    Rinkeby,
    Ropsten,
    Goerli,
    Sepolia,
    Localhost,
    /// Used by unit and integration tests.
    Test,
}

/// Identifier of the L2 chain. Zero is not a valid chain id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct L2ChainId(pub u64);

impl L2ChainId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for L2ChainId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for L2ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Network identity of the node.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkConfig {
    pub network: Network,
    /// Human-readable name of the L2 network.
    pub zksync_network: String,
    pub zksync_network_id: L2ChainId,
}

impl NetworkConfig {
    pub fn for_tests() -> Self {
        Self {
            network: Network::Localhost,
            zksync_network: "localhost".to_owned(),
            zksync_network_id: L2ChainId(DEFAULT_L2_CHAIN_ID),
        }
    }
}

impl Validate for NetworkConfig {
    fn validate(&self, checker: &mut Checker<'_>) {
        if self.network == Network::Unknown {
            checker.missing("network");
        }
        checker.non_empty("zksync_network", &self.zksync_network);
        checker.positive("zksync_network_id", self.zksync_network_id.0);
    }
}
