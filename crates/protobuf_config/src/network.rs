use zkchain_config::{Checker, L2ChainId, Network, NetworkConfig};

use crate::proto::chain as proto;
use crate::repr::{optional_enum, required, ProtoRepr};

impl proto::Network {
    fn new(n: &Network) -> Self {
        match n {
            Network::Unknown => Self::Unknown,
            Network::Mainnet => Self::Mainnet,
            Network::Rinkeby => Self::Rinkeby,
            Network::Ropsten => Self::Ropsten,
            Network::Goerli => Self::Goerli,
            Network::Sepolia => Self::Sepolia,
            Network::Localhost => Self::Localhost,
            Network::Test => Self::Test,
        }
    }

    fn parse(&self) -> Network {
        match self {
            Self::Unknown => Network::Unknown,
            Self::Mainnet => Network::Mainnet,
            Self::Rinkeby => Network::Rinkeby,
            Self::Ropsten => Network::Ropsten,
            Self::Goerli => Network::Goerli,
            Self::Sepolia => Network::Sepolia,
            Self::Localhost => Network::Localhost,
            Self::Test => Network::Test,
        }
    }
}

impl ProtoRepr for proto::EthNetwork {
    type Type = NetworkConfig;

    fn read_fields(&self, c: &mut Checker<'_>) -> Self::Type {
        // An absent network decodes to `UNKNOWN`, which validation rejects as missing.
        Self::Type {
            network: optional_enum::<proto::Network>(c, "network", &self.network).parse(),
            zksync_network: required(c, "zksync_network", &self.zksync_network),
            zksync_network_id: L2ChainId(required(
                c,
                "zksync_network_id",
                &self.zksync_network_id,
            )),
        }
    }

    fn build(this: &Self::Type) -> Self {
        Self {
            network: Some(proto::Network::new(&this.network).into()),
            zksync_network: Some(this.zksync_network.clone()),
            zksync_network_id: Some(this.zksync_network_id.as_u64()),
        }
    }
}
