use tracing::{info, instrument, warn};

use crate::deployment::DeploymentContext;
use crate::report::DeployedContract;

/// Publishes the source on etherscan when a key is configured. Never fails
/// the deployment, the record is already written.
#[instrument(skip_all)]
pub async fn verify_source(
    context: &DeploymentContext,
    deployed: &DeployedContract,
) {
    let Some(forge_verify) = context.forge_verify(deployed) else {
        return;
    };

    match forge_verify.run().await {
        Ok(()) => info!(address = ?deployed.address, "Source verified"),
        Err(err) => warn!("Source verification failed: {err:?}"),
    }
}
