use std::path::PathBuf;

use ethers::types::Address;
use ethers::utils::to_checksum;
use tokio::process::Command;
use tracing::{info, instrument};

use super::ContractSpec;
use crate::config::Network;

/// `forge verify-contract` for a freshly deployed contract. Everything the
/// command needs is taken up front, so a built `ForgeVerify` is always
/// runnable.
#[derive(Debug)]
pub struct ForgeVerify {
    contract: ContractSpec,
    address: Address,
    network: Network,
    contracts_root: PathBuf,
    etherscan_api_key: String,
}

impl ForgeVerify {
    pub fn new(
        contract: ContractSpec,
        address: Address,
        network: Network,
        contracts_root: impl Into<PathBuf>,
        etherscan_api_key: impl ToString,
    ) -> Self {
        Self {
            contract,
            address,
            network,
            contracts_root: contracts_root.into(),
            etherscan_api_key: etherscan_api_key.to_string(),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new("forge");

        cmd.arg("verify-contract")
            .arg("--watch")
            .arg("--root")
            .arg(&self.contracts_root)
            .arg("--chain")
            .arg(self.network.chain_id().to_string())
            .arg("--etherscan-api-key")
            .arg(&self.etherscan_api_key)
            .arg(to_checksum(&self.address, None))
            .arg(self.contract.to_string());

        cmd
    }

    #[instrument(name = "forge_verify", skip_all, fields(network = %self.network))]
    pub async fn run(&self) -> eyre::Result<()> {
        info!(
            address = %to_checksum(&self.address, None),
            contract = %self.contract,
            "Submitting source for verification"
        );

        let output = self.command().output().await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            eyre::bail!(
                "forge verify-contract for {} failed: {}",
                self.contract,
                stderr
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;

    use super::*;

    #[test]
    fn command_targets_network_and_contract() {
        let address: Address =
            "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed".parse().unwrap();

        let verify = ForgeVerify::new(
            ContractSpec::path_name(
                PathBuf::from("src/ProteinFoldingDAO.sol"),
                "ProteinFoldingDAO",
            ),
            address,
            Network::Sepolia,
            "contracts",
            "ETHERSCAN_KEY",
        );

        let cmd = verify.command();
        let std_cmd = cmd.as_std();

        assert_eq!(std_cmd.get_program(), OsStr::new("forge"));
        assert_eq!(
            std_cmd.get_args().collect::<Vec<_>>(),
            [
                "verify-contract",
                "--watch",
                "--root",
                "contracts",
                "--chain",
                "11155111",
                "--etherscan-api-key",
                "ETHERSCAN_KEY",
                "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
                "src/ProteinFoldingDAO.sol:ProteinFoldingDAO",
            ]
            .map(OsStr::new)
        );
    }
}
