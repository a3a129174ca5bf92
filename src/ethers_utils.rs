use std::sync::Arc;

use ethers::abi::{Function, Token};
use ethers::prelude::*;
use ethers::types::transaction::eip2718::TypedTransaction;
use ethers::utils::to_checksum;
use eyre::{ensure, Context};
use reqwest::Url;
use tracing::{info, instrument};

use crate::cli::PrivateKey;
use crate::config::Network;
use crate::deployer::Deployer;
use crate::forge_utils::ContractArtifact;
use crate::report::DeployedContract;

// TODO: Allow for different wallet kinds, e.g. ledger
pub type RpcSigner = SignerMiddleware<Provider<Http>, LocalWallet>;

pub struct EthersDeployer<M> {
    client: Arc<M>,
    address: Address,
    confirmations: usize,
}

impl EthersDeployer<RpcSigner> {
    /// Connects to `rpc_url` with a local wallet built from `private_key`.
    pub async fn connect(
        rpc_url: &Url,
        private_key: &PrivateKey,
        network: Network,
        confirmations: usize,
    ) -> eyre::Result<Self> {
        let provider = Provider::<Http>::try_from(rpc_url.as_str())?;
        let wallet = Wallet::from(private_key.key.clone())
            .with_chain_id(network.chain_id());
        let address = wallet.address();

        Self::new_checked(
            SignerMiddleware::new(provider, wallet),
            address,
            network,
            confirmations,
        )
        .await
    }
}

impl<M> EthersDeployer<M>
where
    M: Middleware + 'static,
{
    /// Fails unless `client` is on `network`, before anything else is asked
    /// of the endpoint.
    #[instrument(skip_all, fields(%network))]
    pub async fn new_checked(
        client: M,
        address: Address,
        network: Network,
        confirmations: usize,
    ) -> eyre::Result<Self> {
        let chain_id =
            client.get_chainid().await.context("Fetching chain id")?;

        ensure!(
            chain_id == U256::from(network.chain_id()),
            "RPC endpoint serves chain {chain_id} but {network} is chain {}",
            network.chain_id()
        );

        info!(address = %to_checksum(&address, None), %chain_id, "Connected");

        Ok(Self {
            client: Arc::new(client),
            address,
            confirmations,
        })
    }
}

fn deployed_from_receipt(
    address: Address,
    receipt: &TransactionReceipt,
) -> eyre::Result<DeployedContract> {
    ensure!(
        receipt.status == Some(1.into()),
        "Creation transaction {:?} reverted",
        receipt.transaction_hash
    );

    Ok(DeployedContract {
        address,
        transaction_hash: receipt.transaction_hash,
        block_number: receipt.block_number.map(|block| block.as_u64()),
    })
}

impl<M> Deployer for EthersDeployer<M>
where
    M: Middleware + 'static,
{
    fn address(&self) -> Address {
        self.address
    }

    async fn balance(&self) -> eyre::Result<U256> {
        let balance = self
            .client
            .get_balance(self.address, None)
            .await
            .context("Fetching balance")?;

        Ok(balance)
    }

    async fn deploy_contract(
        &self,
        artifact: &ContractArtifact,
    ) -> eyre::Result<DeployedContract> {
        let factory = ContractFactory::new(
            artifact.abi.clone(),
            artifact.bytecode.clone(),
            self.client.clone(),
        );

        let (contract, receipt) = factory
            .deploy(())?
            .confirmations(self.confirmations)
            .send_with_receipt()
            .await
            .with_context(|| format!("Deploying {}", artifact.name))?;

        deployed_from_receipt(contract.address(), &receipt)
    }

    async fn call(
        &self,
        contract: Address,
        function: &Function,
        args: &[Token],
    ) -> eyre::Result<Vec<Token>> {
        let call_data = function.encode_input(args)?;

        let tx: TypedTransaction =
            TransactionRequest::new().to(contract).data(call_data).into();

        let output = self
            .client
            .call(&tx, None)
            .await
            .with_context(|| format!("Calling {}", function.name))?;

        Ok(function.decode_output(output.as_ref())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt(status: u64) -> TransactionReceipt {
        TransactionReceipt {
            transaction_hash: H256::repeat_byte(0x11),
            block_number: Some(U64::from(4_200_000)),
            status: Some(U64::from(status)),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn rejects_endpoint_on_another_chain() -> eyre::Result<()> {
        let (provider, mock) = Provider::mocked();
        mock.push(U256::from(1))?;

        let result = EthersDeployer::new_checked(
            provider,
            Address::repeat_byte(0xde),
            Network::Sepolia,
            1,
        )
        .await;

        let err = result.err().expect("mainnet endpoint accepted for sepolia");
        assert!(err.to_string().contains("serves chain 1"));

        Ok(())
    }

    #[tokio::test]
    async fn passes_balance_through() -> eyre::Result<()> {
        let (provider, mock) = Provider::mocked();
        // Responses are served last pushed first
        mock.push(U256::from(42_000u64))?;
        mock.push(U256::from(Network::Sepolia.chain_id()))?;

        let deployer = EthersDeployer::new_checked(
            provider,
            Address::repeat_byte(0xde),
            Network::Sepolia,
            1,
        )
        .await?;

        assert_eq!(deployer.address(), Address::repeat_byte(0xde));
        assert_eq!(deployer.balance().await?, U256::from(42_000u64));

        Ok(())
    }

    #[test]
    fn reverted_creation_fails() {
        let err = deployed_from_receipt(Address::repeat_byte(0xda), &receipt(0))
            .unwrap_err();

        assert!(err.to_string().contains("reverted"));
    }

    #[test]
    fn successful_receipt_becomes_deployment() {
        let deployed =
            deployed_from_receipt(Address::repeat_byte(0xda), &receipt(1))
                .unwrap();

        assert_eq!(
            deployed,
            DeployedContract {
                address: Address::repeat_byte(0xda),
                transaction_hash: H256::repeat_byte(0x11),
                block_number: Some(4_200_000),
            }
        );
    }
}
