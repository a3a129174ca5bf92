use ethers::utils::to_checksum;
use tracing::instrument;

use self::steps::balance_check::{self, BalanceCheck};
use self::steps::{assemble_report, protein_dao, stats, verify_source};
use crate::deployer::Deployer;
use crate::report::{DaoStats, DeploymentRecord, FrontendConfig};
use crate::types::Ether;

pub mod deployment_context;
pub mod steps;

pub use self::deployment_context::DeploymentContext;

#[derive(Debug)]
pub enum DeploymentOutcome {
    Deployed {
        record: DeploymentRecord,
        stats: Option<DaoStats>,
        frontend: FrontendConfig,
    },
    /// Nothing was deployed and nothing was written.
    InsufficientFunds { balance: Ether, required: Ether },
}

#[instrument(skip_all, fields(network = %context.config.network))]
pub async fn run_deployment<D: Deployer>(
    context: &DeploymentContext,
    deployer: &D,
) -> eyre::Result<DeploymentOutcome> {
    let deployer_address = deployer.address();
    println!(
        "📝 Deployer account: {}",
        to_checksum(&deployer_address, None)
    );

    match balance_check::check(context, deployer).await? {
        BalanceCheck::Sufficient(_) => {}
        BalanceCheck::Insufficient { balance, required } => {
            return Ok(DeploymentOutcome::InsufficientFunds {
                balance,
                required,
            });
        }
    }

    let deployed = protein_dao::deploy(context, deployer).await?;

    let stats = stats::verify(context, deployer, &deployed).await;

    let record =
        assemble_report::assemble_report(context, deployer_address, &deployed)
            .await?;

    let frontend =
        assemble_report::emit_frontend_config(context, &deployed).await?;

    verify_source::verify_source(context, &deployed).await;

    Ok(DeploymentOutcome::Deployed {
        record,
        stats,
        frontend,
    })
}
