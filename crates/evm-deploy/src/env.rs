use crate::{
    error::DeployError,
    response::DeployReceipt,
    rpc::{ExternalRpcClient, RpcClient},
    Account,
};
use alloy::{
    primitives::{Address, U256},
    rpc::types::TransactionRequest,
};
use std::sync::Arc;

/// Connection parameters of one network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvConfigs {
    /// Name the network is known by, e.g. `goerli`.
    pub network_name: String,
    pub rpc_url: String,
    /// Expected chain id; checked against the node when set.
    pub chain_id: Option<u64>,
}

#[derive(Clone)]
pub struct Env {
    pub(crate) rpc_client: Arc<dyn RpcClient + Send + Sync>,
    pub(crate) configs: EnvConfigs,
}

impl Env {
    /// Connects to `configs.rpc_url` with a provider that can sign as any of
    /// the account's signers.
    pub fn new(configs: EnvConfigs, account: &Account) -> Result<Self, DeployError> {
        let client = ExternalRpcClient::new(&configs.rpc_url, account.wallet()?)?;
        Ok(Self {
            rpc_client: Arc::new(client),
            configs,
        })
    }

    /// Builds an environment over any RPC client implementation.
    pub fn with_client(configs: EnvConfigs, rpc_client: Arc<dyn RpcClient + Send + Sync>) -> Self {
        Self {
            rpc_client,
            configs,
        }
    }

    pub fn network_name(&self) -> &str {
        &self.configs.network_name
    }

    pub fn rpc_url(&self) -> &str {
        &self.configs.rpc_url
    }

    pub async fn chain_id(&self) -> Result<u64, DeployError> {
        self.rpc_client.chain_id().await.map_err(|e| {
            network_error(
                format!("Failed to get chain id of {}", self.configs.network_name),
                e,
            )
        })
    }

    /// Verifies that the node serves the configured chain.
    ///
    /// Returns the chain id reported by the node. When no chain id is
    /// configured any chain is accepted.
    pub async fn check_chain_id(&self) -> Result<u64, DeployError> {
        let actual = self.chain_id().await?;
        match self.configs.chain_id {
            Some(expected) if expected != actual => {
                Err(DeployError::ChainIdMismatch { expected, actual })
            }
            _ => Ok(actual),
        }
    }

    pub async fn get_balance(&self, address: Address) -> Result<U256, DeployError> {
        self.rpc_client
            .get_balance(address)
            .await
            .map_err(|e| network_error(format!("Failed to get balance of {}", address), e))
    }

    pub async fn send_deploy_transaction(
        &self,
        tx: TransactionRequest,
    ) -> Result<DeployReceipt, DeployError> {
        self.rpc_client
            .send_transaction_and_wait(tx)
            .await
            .map_err(|e| match e {
                // Keep the receipt-level failures distinguishable
                DeployError::TransactionFailed(_) | DeployError::MissingContractAddress(_) => e,
                e => network_error("Failed to send transaction".to_string(), e),
            })
    }
}

/// Prefixes `context` to a failed request, keeping a single error kind.
fn network_error(context: String, error: DeployError) -> DeployError {
    let message = match error {
        DeployError::NetworkRequestFailed(message) => message,
        other => other.to_string(),
    };
    DeployError::NetworkRequestFailed(format!("{}: {}", context, message))
}
