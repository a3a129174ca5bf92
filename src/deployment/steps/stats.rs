use tracing::{instrument, warn};

use crate::deployer::Deployer;
use crate::deployment::DeploymentContext;
use crate::report::{DaoStats, DeployedContract};

pub const GET_STATS: &str = "getStats";

async fn fetch_stats<D: Deployer>(
    context: &DeploymentContext,
    deployer: &D,
    deployed: &DeployedContract,
) -> eyre::Result<DaoStats> {
    let function = context.artifact.abi.function(GET_STATS)?;

    let tokens = deployer.call(deployed.address, function, &[]).await?;

    DaoStats::from_tokens(tokens)
}

/// Sanity read against the fresh contract. The contract is already on chain
/// at this point, so a failure here is only reported.
#[instrument(skip_all)]
pub async fn verify<D: Deployer>(
    context: &DeploymentContext,
    deployer: &D,
    deployed: &DeployedContract,
) -> Option<DaoStats> {
    println!("\n🔍 Verifying deployment...");

    match fetch_stats(context, deployer, deployed).await {
        Ok(stats) => {
            println!("📊 Initial stats: {stats}");
            Some(stats)
        }
        Err(err) => {
            warn!("{GET_STATS} failed on fresh contract: {err:?}");
            None
        }
    }
}
