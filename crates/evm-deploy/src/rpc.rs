//! # Ethereum JSON-RPC Client
//!
//! This module provides the RPC client implementation for communicating with EVM nodes.
//! It defines a trait for the RPC operations a deployment needs and provides a concrete
//! implementation on top of an `alloy` HTTP provider.
//!
use crate::{error::DeployError, response::DeployReceipt};
use alloy::{
    network::EthereumWallet,
    primitives::{Address, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    transports::http::reqwest::Url,
};

/// Interface for RPC operations with EVM nodes.
///
/// This trait defines the core operations that any RPC client must implement,
/// providing an abstraction layer that allows for different implementations,
/// including mock implementations for testing.
#[async_trait::async_trait]
pub trait RpcClient: Send + Sync {
    async fn chain_id(&self) -> Result<u64, DeployError>;
    async fn get_balance(&self, address: Address) -> Result<U256, DeployError>;
    async fn send_transaction_and_wait(
        &self,
        tx: TransactionRequest,
    ) -> Result<DeployReceipt, DeployError>;
}

/// Implementation of the RPC client using an `alloy` HTTP provider.
///
/// The provider is built with the recommended fillers plus a wallet filler, so
/// nonce, gas, chain id and signing are all handled by the client stack.
pub struct ExternalRpcClient {
    /// The endpoint the provider is connected to
    url: Url,
    /// The internal type-erased provider
    provider: DynProvider,
}

impl ExternalRpcClient {
    /// Creates a new external RPC client connected to the specified URL.
    ///
    /// # Parameters
    ///
    /// * `url` - The URL of the JSON-RPC endpoint
    /// * `wallet` - The wallet that signs outgoing transactions
    ///
    /// # Errors
    ///
    /// Returns `DeployError::InvalidArgument` if the URL cannot be parsed
    pub fn new(url: &str, wallet: EthereumWallet) -> Result<Self, DeployError> {
        let url: Url = url
            .parse()
            .map_err(|e| DeployError::InvalidArgument(format!("Invalid RPC url: {}", e)))?;
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect_http(url.clone())
            .erased();
        Ok(Self { url, provider })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait::async_trait]
impl RpcClient for ExternalRpcClient {
    /// Queries `eth_chainId`.
    async fn chain_id(&self) -> Result<u64, DeployError> {
        self.provider
            .get_chain_id()
            .await
            .map_err(|e| DeployError::NetworkRequestFailed(e.to_string()))
    }

    /// Queries the latest balance of `address`, in wei.
    async fn get_balance(&self, address: Address) -> Result<U256, DeployError> {
        self.provider
            .get_balance(address)
            .await
            .map_err(|e| DeployError::NetworkRequestFailed(e.to_string()))
    }

    /// Submits a transaction to the network and waits for its receipt.
    ///
    /// # Parameters
    ///
    /// * `tx` - The unsigned transaction request; missing fields are filled in
    ///
    /// # Returns
    ///
    /// The receipt summary or an error if submission or confirmation failed
    async fn send_transaction_and_wait(
        &self,
        tx: TransactionRequest,
    ) -> Result<DeployReceipt, DeployError> {
        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| DeployError::NetworkRequestFailed(e.to_string()))?;

        tracing::debug!(tx_hash = %pending.tx_hash(), "transaction submitted");

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| DeployError::NetworkRequestFailed(e.to_string()))?;

        Ok(DeployReceipt::from(&receipt))
    }
}

#[cfg(test)]
pub mod test {
    use crate::mock::mock_signer1;

    use super::*;

    #[test]
    fn test_new() {
        let wallet = mock_signer1().wallet();
        let client = ExternalRpcClient::new("https://test.com", wallet.clone()).unwrap();
        assert_eq!(client.url().as_str(), "https://test.com/");

        let client = ExternalRpcClient::new("http://127.0.0.1:8545", wallet).unwrap();
        assert_eq!(client.url().port(), Some(8545));
    }

    #[test]
    fn test_new_invalid_url() {
        let res = ExternalRpcClient::new("not a url", mock_signer1().wallet());
        assert!(matches!(res, Err(DeployError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_chain_id_error() {
        // nothing listens on port 1
        let client =
            ExternalRpcClient::new("http://127.0.0.1:1", mock_signer1().wallet()).unwrap();
        let res = client.chain_id().await;
        assert!(matches!(
            res.err().unwrap(),
            DeployError::NetworkRequestFailed(_)
        ));
    }

    #[tokio::test]
    async fn test_get_balance_error() {
        let client =
            ExternalRpcClient::new("http://127.0.0.1:1", mock_signer1().wallet()).unwrap();
        let res = client.get_balance(mock_signer1().address()).await;
        assert!(matches!(
            res.err().unwrap(),
            DeployError::NetworkRequestFailed(_)
        ));
    }
}
