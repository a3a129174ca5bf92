use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::serde_utils;
use crate::types::Ether;

pub const DEFAULT_CONTRACT_NAME: &str = "ProteinFoldingDAO";
pub const DEFAULT_REPORT_PATH: &str = "deployment.json";

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ValueEnum,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[clap(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    #[default]
    Sepolia,
    Holesky,
    Localhost,
}

impl Network {
    pub fn chain_id(self) -> u64 {
        match self {
            Network::Mainnet => 1,
            Network::Sepolia => 11155111,
            Network::Holesky => 17000,
            Network::Localhost => 31337,
        }
    }

    pub fn faucet_url(self) -> Option<&'static str> {
        match self {
            Network::Sepolia => Some("https://sepoliafaucet.com/"),
            Network::Holesky => Some("https://holesky-faucet.pk910.de/"),
            Network::Mainnet | Network::Localhost => None,
        }
    }

    /// RPC url handed to the front-end, the project id is left for the
    /// operator to fill in.
    pub fn frontend_rpc_url(self) -> &'static str {
        match self {
            Network::Mainnet => "https://mainnet.infura.io/v3/YOUR_PROJECT_ID",
            Network::Sepolia => "https://sepolia.infura.io/v3/YOUR_PROJECT_ID",
            Network::Holesky => "https://holesky.infura.io/v3/YOUR_PROJECT_ID",
            Network::Localhost => "http://127.0.0.1:8545",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: Network,
    pub min_balance: Ether,
    pub contract_name: String,
    pub contracts_root: PathBuf,
    /// Explicit build artifact, skips the foundry/hardhat lookup
    pub artifact: Option<PathBuf>,
    pub report_path: PathBuf,
    pub frontend_rpc_url: Option<String>,
    pub env_file: Option<PathBuf>,
    pub confirmations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: Network::default(),
            min_balance: Ether::from_wei(10_000_000_000_000_000u64),
            contract_name: DEFAULT_CONTRACT_NAME.to_string(),
            contracts_root: PathBuf::from("contracts"),
            artifact: None,
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            frontend_rpc_url: None,
            env_file: None,
            confirmations: 1,
        }
    }
}

impl Config {
    pub async fn load(path: Option<&Path>) -> eyre::Result<Self> {
        match path {
            Some(path) => serde_utils::read_deserialize(path).await,
            None => Ok(Self::default()),
        }
    }

    pub fn frontend_rpc_url(&self) -> &str {
        self.frontend_rpc_url
            .as_deref()
            .unwrap_or_else(|| self.network.frontend_rpc_url())
    }

    /// Candidate artifact locations in lookup order.
    pub fn artifact_candidates(&self) -> Vec<PathBuf> {
        if let Some(artifact) = self.artifact.as_ref() {
            return vec![artifact.clone()];
        }

        let file_name = format!("{}.json", self.contract_name);
        let source_dir = format!("{}.sol", self.contract_name);

        vec![
            self.contracts_root
                .join("out")
                .join(&source_dir)
                .join(&file_name),
            self.contracts_root
                .join("artifacts")
                .join("contracts")
                .join(&source_dir)
                .join(&file_name),
        ]
    }
}
