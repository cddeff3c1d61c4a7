use clap::Parser;
use evm_deploy::{Contract, DeployOptions, Env};
use exchange_deploy::{
    cli::Arguments,
    config::{self, ProjectConfig},
    deploy_exchange, logging,
};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // ALCHEMY_GOERLI_RPC_URL, PRIVATE_KEY and ETHERSCAN_API_KEY may come from
    // .env, which has to be loaded before the arguments read their env fallbacks
    let dotenv = config::load_dotenv(None);
    let args = Arguments::parse();
    logging::initialize(&args.log_filter);
    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
        Err(e) => tracing::debug!(error = %e, "no .env file loaded"),
    }
    tracing::debug!("running with arguments:\n{}", args);

    let config = ProjectConfig::from_env();

    let network = args
        .network
        .clone()
        .unwrap_or_else(|| config.default_network.clone());
    tracing::info!(
        solidity = %config.solidity,
        network = %network,
        "loading network configuration"
    );

    let (configs, account) = config.resolve(&network)?;
    if !config.verification.is_configured() {
        tracing::warn!("ETHERSCAN_API_KEY is not set; verification will need it");
    }

    let env = Env::new(configs, &account)?;
    let contract = Contract::from_artifact_path(&args.artifact)?;

    let options = DeployOptions {
        gas_limit: args.gas_limit,
        ..DeployOptions::default()
    };
    deploy_exchange(&env, &account, &contract, args.token_address, options).await?;

    Ok(())
}
