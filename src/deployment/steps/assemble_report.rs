use chrono::Utc;
use ethers::types::Address;
use tracing::{info, instrument};

use crate::deployment::DeploymentContext;
use crate::report::{DeployedContract, DeploymentRecord, FrontendConfig};
use crate::serde_utils;

/// Writes the deployment record, replacing any previous one.
#[instrument(skip_all)]
pub async fn assemble_report(
    context: &DeploymentContext,
    deployer: Address,
    deployed: &DeployedContract,
) -> eyre::Result<DeploymentRecord> {
    let record = DeploymentRecord::new(
        context.config.network,
        deployer,
        deployed,
        Utc::now(),
    );

    let path = &context.config.report_path;
    serde_utils::write_json_pretty(path, &record).await?;

    info!(path = %path.display(), "Deployment record written");
    println!("💾 Deployment info saved to {}", path.display());

    Ok(record)
}

#[instrument(skip_all)]
pub async fn emit_frontend_config(
    context: &DeploymentContext,
    deployed: &DeployedContract,
) -> eyre::Result<FrontendConfig> {
    let frontend = FrontendConfig::new(&context.config, deployed.address);

    println!("\n🎨 Frontend configuration:");
    print!("{frontend}");

    if let Some(env_file) = context.config.env_file.as_deref() {
        frontend.write_env_file(env_file).await?;
        info!(path = %env_file.display(), "Frontend env file written");
    }

    Ok(frontend)
}
