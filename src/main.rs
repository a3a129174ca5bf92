use cli::Args;
use config::Config;
use deployment::{DeploymentContext, DeploymentOutcome};
use ethers_utils::EthersDeployer;
use forge_utils::{ContractArtifact, ForgeBuild};
use ethers::utils::to_checksum;
use tracing::{error, info, warn};
use tracing_error::ErrorLayer;
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

pub mod deployer;
pub mod ethers_utils;
pub mod forge_utils;
pub mod serde_utils;

mod cli;
mod config;
mod report;
mod types;

mod deployment;

mod interactive;

async fn start() -> eyre::Result<DeploymentOutcome> {
    let args = Args::parse_args(std::env::args_os())?;

    let mut config = Config::load(args.config.as_deref()).await?;
    args.apply_overrides(&mut config);

    let private_key = interactive::resolve_private_key(args.private_key)?;
    let rpc_url = interactive::resolve_rpc_url(args.rpc_url, config.network)?;

    println!("🚀 Deploying {} to {}", config.contract_name, config.network);

    if args.build {
        ForgeBuild::new()
            .with_cwd(&config.contracts_root)
            .run()
            .await?;
    }

    let artifact = ContractArtifact::load(
        &config.contract_name,
        &config.artifact_candidates(),
    )
    .await?;

    let deployer = EthersDeployer::connect(
        &rpc_url,
        &private_key,
        config.network,
        config.confirmations,
    )
    .await?;

    let context = DeploymentContext::new(config, artifact)
        .with_etherscan_api_key(args.etherscan_api_key);

    deployment::run_deployment(&context, &deployer).await
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    dotenv::dotenv().ok();

    let indicatif_layer = IndicatifLayer::new();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(indicatif_layer.get_stderr_writer())
                .with_filter(filter),
        )
        .with(indicatif_layer)
        .with(ErrorLayer::default())
        .init();

    let outcome = start().await;

    report_outcome(&outcome);

    std::process::exit(exit_code(&outcome))
}

fn report_outcome(outcome: &eyre::Result<DeploymentOutcome>) {
    match outcome {
        Ok(DeploymentOutcome::Deployed {
            record,
            stats,
            frontend,
        }) => {
            info!(
                contract_address = %to_checksum(&record.contract_address, None),
                block_number = ?record.block_number,
                ?stats,
                rpc_url = %frontend.rpc_url,
                "Deployment complete"
            );
            println!("\n🎉 Deployment complete, the frontend can now use this contract address.");
        }
        Ok(DeploymentOutcome::InsufficientFunds { balance, required }) => {
            warn!(%balance, %required, "Nothing deployed");
        }
        Err(err) => {
            error!("❌ Deployment failed: {:?}", err);
        }
    }
}

fn exit_code(outcome: &eyre::Result<DeploymentOutcome>) -> i32 {
    match outcome {
        Ok(DeploymentOutcome::Deployed { .. }) => 0,
        // Low balance is a soft stop, the operator just needs to fund the account
        Ok(DeploymentOutcome::InsufficientFunds { .. }) => 0,
        Err(_) => 1,
    }
}
