use crate::constants::{CRYPTO_DEV_TOKEN_CONTRACT_ADDRESS, EXCHANGE_ARTIFACT_PATH};
use alloy::primitives::Address;
use std::fmt;

#[derive(clap::Parser, Debug)]
#[clap(about = "Deploys the Exchange contract")]
pub struct Arguments {
    /// Network to deploy to; the project's default network when omitted.
    #[clap(long, env = "DEPLOY_NETWORK")]
    pub network: Option<String>,

    /// Path of the compiled `Exchange` artifact.
    #[clap(long, env = "EXCHANGE_ARTIFACT", default_value = EXCHANGE_ARTIFACT_PATH)]
    pub artifact: String,

    /// Token the exchange is bound to.
    #[clap(
        long,
        env = "CRYPTO_DEV_TOKEN_CONTRACT_ADDRESS",
        default_value_t = CRYPTO_DEV_TOKEN_CONTRACT_ADDRESS
    )]
    pub token_address: Address,

    /// Fixed gas limit for the creation transaction instead of an estimate.
    #[clap(long, env = "DEPLOY_GAS_LIMIT")]
    pub gas_limit: Option<u64>,

    #[clap(long, env = "LOG_FILTER", default_value = "info")]
    pub log_filter: String,
}

impl fmt::Display for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            network,
            artifact,
            token_address,
            gas_limit,
            log_filter,
        } = self;

        writeln!(f, "network: {:?}", network)?;
        writeln!(f, "artifact: {}", artifact)?;
        writeln!(f, "token_address: {}", token_address)?;
        writeln!(f, "gas_limit: {:?}", gas_limit)?;
        writeln!(f, "log_filter: {}", log_filter)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let args = Arguments::try_parse_from(["deploy-exchange"]).unwrap();
        assert_eq!(args.artifact, EXCHANGE_ARTIFACT_PATH);
        assert_eq!(args.token_address, CRYPTO_DEV_TOKEN_CONTRACT_ADDRESS);
        assert_eq!(args.gas_limit, None);
    }

    #[test]
    fn test_overrides() {
        let args = Arguments::try_parse_from([
            "deploy-exchange",
            "--network",
            "goerli",
            "--token-address",
            "0x5FbDB2315678afecb367f032d93F642f64180aa3",
            "--gas-limit",
            "3000000",
        ])
        .unwrap();

        assert_eq!(args.network.as_deref(), Some("goerli"));
        assert_eq!(
            args.token_address.to_string(),
            "0x5FbDB2315678afecb367f032d93F642f64180aa3"
        );
        assert_eq!(args.gas_limit, Some(3_000_000));
    }

    #[test]
    fn test_invalid_token_address() {
        let res = Arguments::try_parse_from(["deploy-exchange", "--token-address", "0x1234"]);
        assert!(res.is_err());
    }
}
