use ethers::utils::to_checksum;
use indicatif::ProgressStyle;
use tracing::{info, instrument, Span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::deployer::Deployer;
use crate::deployment::DeploymentContext;
use crate::report::DeployedContract;

#[instrument(name = "deploy", skip_all, fields(contract = %context.artifact.name))]
pub async fn deploy<D: Deployer>(
    context: &DeploymentContext,
    deployer: &D,
) -> eyre::Result<DeployedContract> {
    Span::current().pb_set_style(&ProgressStyle::with_template(
        "{spinner:.green} {span_name}{{{span_fields}}} waiting for confirmation",
    )?);

    println!("📦 Deploying {}...", context.artifact.name);

    // No timeout, a stuck transaction blocks here
    let deployed = deployer.deploy_contract(&context.artifact).await?;

    info!(
        address = %to_checksum(&deployed.address, None),
        transaction_hash = ?deployed.transaction_hash,
        block_number = ?deployed.block_number,
        "Contract deployed"
    );

    print!("{}", deployed_lines(&deployed));

    Ok(deployed)
}

fn deployed_lines(deployed: &DeployedContract) -> String {
    format!(
        "✅ Contract deployed!\n📍 Contract address: {}\n🔗 Transaction hash: {:?}\n",
        to_checksum(&deployed.address, None),
        deployed.transaction_hash
    )
}
