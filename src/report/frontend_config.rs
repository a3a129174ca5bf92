use std::fmt;
use std::path::Path;

use ethers::types::Address;
use ethers::utils::to_checksum;
use eyre::Context;

use crate::config::Config;

/// Values the front-end needs, printed as `KEY=value` lines so they can be
/// pasted into its `.env`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrontendConfig {
    pub contract_address: Address,
    pub network_id: u64,
    pub rpc_url: String,
}

impl FrontendConfig {
    pub fn new(config: &Config, contract_address: Address) -> Self {
        Self {
            contract_address,
            network_id: config.network.chain_id(),
            rpc_url: config.frontend_rpc_url().to_string(),
        }
    }

    pub async fn write_env_file(&self, path: &Path) -> eyre::Result<()> {
        tokio::fs::write(path, self.to_string())
            .await
            .with_context(|| format!("Writing to {}", path.display()))
    }
}

impl fmt::Display for FrontendConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "CONTRACT_ADDRESS={}",
            to_checksum(&self.contract_address, None)
        )?;
        writeln!(f, "NETWORK_ID={}", self.network_id)?;
        writeln!(f, "RPC_URL={}", self.rpc_url)
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn sepolia_lines() {
        let address: Address =
            "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed".parse().unwrap();
        let frontend = FrontendConfig::new(&Config::default(), address);

        assert_eq!(
            frontend.to_string(),
            indoc! {"
                CONTRACT_ADDRESS=0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed
                NETWORK_ID=11155111
                RPC_URL=https://sepolia.infura.io/v3/YOUR_PROJECT_ID
            "}
        );
    }

    #[tokio::test]
    async fn env_file_is_overwritten() -> eyre::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(".env.local");
        tokio::fs::write(&path, "STALE=1\n").await?;

        let frontend =
            FrontendConfig::new(&Config::default(), Address::repeat_byte(0x01));
        frontend.write_env_file(&path).await?;

        let content = tokio::fs::read_to_string(&path).await?;
        assert!(!content.contains("STALE"));
        assert_eq!(content, frontend.to_string());

        Ok(())
    }
}
