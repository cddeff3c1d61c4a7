use crate::constants::EXCHANGE_CONTRACT_NAME;
use alloy::primitives::Address;
use evm_deploy::{Account, Contract, DeployError, DeployOptions, Deployment, DynSolValue, Env};

/// Deploys `Exchange` bound to `token` and logs where it landed.
pub async fn deploy_exchange(
    env: &Env,
    account: &Account,
    contract: &Contract,
    token: Address,
    options: DeployOptions,
) -> Result<Deployment, DeployError> {
    if contract.name() != EXCHANGE_CONTRACT_NAME {
        return Err(DeployError::InvalidArgument(format!(
            "expected the {} artifact, got {}",
            EXCHANGE_CONTRACT_NAME,
            contract.name()
        )));
    }

    let args = [DynSolValue::Address(token)];
    tracing::info!("Deploying...");
    let exchange = contract.deploy_with(env, account, &args, options).await?;

    tracing::info!(
        "{} contract is deployed to: {}",
        exchange.contract_name,
        exchange.address
    );
    tracing::info!("Verify with: \n {}", exchange.verify_command());
    tracing::debug!(deployment = %exchange, "deployment recorded");

    Ok(exchange)
}
