use tracing::{info, instrument, warn};

use crate::deployer::Deployer;
use crate::deployment::DeploymentContext;
use crate::types::Ether;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceCheck {
    Sufficient(Ether),
    Insufficient { balance: Ether, required: Ether },
}

#[instrument(skip_all)]
pub async fn check<D: Deployer>(
    context: &DeploymentContext,
    deployer: &D,
) -> eyre::Result<BalanceCheck> {
    let balance = Ether(deployer.balance().await?);
    let required = context.config.min_balance;

    println!("💰 Balance: {balance} ETH");

    if balance < required {
        warn!(%balance, %required, "Balance below deployment minimum");

        println!("⚠️  Insufficient balance, at least {required} ETH is needed");
        if let Some(faucet_url) = context.config.network.faucet_url() {
            println!(
                "🔗 {} faucet: {faucet_url}",
                context.config.network
            );
        }

        return Ok(BalanceCheck::Insufficient { balance, required });
    }

    info!(%balance, "Balance sufficient");

    Ok(BalanceCheck::Sufficient(balance))
}
