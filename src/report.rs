use chrono::{DateTime, Utc};
use ethers::types::{Address, H256};
use serde::{Deserialize, Serialize};

use crate::config::Network;
use crate::serde_utils;

pub mod contract_deployment;
pub mod frontend_config;

pub use self::contract_deployment::{DaoStats, DeployedContract};
pub use self::frontend_config::FrontendConfig;

/// Summary of one deployment, written once the creation transaction is
/// confirmed.
///
/// `blockNumber` is serialized as `null` rather than skipped so the file
/// always carries the same six keys. Addresses are EIP-55 checksummed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    pub network: String,
    #[serde(with = "serde_utils::checksum")]
    pub contract_address: Address,
    #[serde(with = "serde_utils::checksum")]
    pub deployer: Address,
    pub transaction_hash: H256,
    pub block_number: Option<u64>,
    #[serde(with = "serde_utils::iso8601")]
    pub timestamp: DateTime<Utc>,
}

impl DeploymentRecord {
    pub fn new(
        network: Network,
        deployer: Address,
        deployed: &DeployedContract,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            network: network.to_string(),
            contract_address: deployed.address,
            deployer,
            transaction_hash: deployed.transaction_hash,
            block_number: deployed.block_number,
            timestamp,
        }
    }
}
