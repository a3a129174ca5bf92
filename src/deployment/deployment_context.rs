use crate::config::Config;
use crate::forge_utils::{ContractArtifact, ForgeVerify};
use crate::report::DeployedContract;

#[derive(Debug)]
pub struct DeploymentContext {
    pub config: Config,
    pub artifact: ContractArtifact,
    pub etherscan_api_key: Option<String>,
}

impl DeploymentContext {
    pub fn new(config: Config, artifact: ContractArtifact) -> Self {
        Self {
            config,
            artifact,
            etherscan_api_key: None,
        }
    }

    pub fn with_etherscan_api_key(
        mut self,
        etherscan_api_key: Option<String>,
    ) -> Self {
        self.etherscan_api_key = etherscan_api_key;
        self
    }

    /// `None` when no etherscan key was given.
    pub fn forge_verify(
        &self,
        deployed: &DeployedContract,
    ) -> Option<ForgeVerify> {
        let etherscan_api_key = self.etherscan_api_key.as_ref()?;

        Some(ForgeVerify::new(
            self.artifact.contract_spec(),
            deployed.address,
            self.config.network,
            &self.config.contracts_root,
            etherscan_api_key,
        ))
    }
}
