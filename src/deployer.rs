use ethers::abi::{Function, Token};
use ethers::types::{Address, U256};

use crate::forge_utils::ContractArtifact;
use crate::report::DeployedContract;

/// The capabilities a deployment needs from a signing account on some chain.
///
/// Every call is a suspension point against the remote node, nothing here
/// retries.
#[allow(async_fn_in_trait)]
pub trait Deployer {
    fn address(&self) -> Address;

    /// Balance in wei.
    async fn balance(&self) -> eyre::Result<U256>;

    /// Submits the creation transaction and waits until it is mined.
    async fn deploy_contract(
        &self,
        artifact: &ContractArtifact,
    ) -> eyre::Result<DeployedContract>;

    /// Read-only call, never submits a transaction.
    async fn call(
        &self,
        contract: Address,
        function: &Function,
        args: &[Token],
    ) -> eyre::Result<Vec<Token>>;
}
