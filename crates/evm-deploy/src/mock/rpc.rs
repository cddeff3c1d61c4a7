use crate::error::DeployError;
use crate::response::DeployReceipt;
use crate::rpc::RpcClient;
use alloy::primitives::{Address, U256};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;
use std::sync::RwLock;

use super::mock_deploy_receipt;

/// Default chain id reported by the mock, matching a local development node.
pub const MOCK_CHAIN_ID: u64 = 31337;

pub struct MockRpcClient {
    chain_id_result: RwLock<Option<Result<u64, DeployError>>>,
    get_balance_result: RwLock<Option<Result<U256, DeployError>>>,
    send_transaction_result: RwLock<Option<Result<DeployReceipt, DeployError>>>,
    sent_transactions: RwLock<Vec<TransactionRequest>>,
}

impl MockRpcClient {
    pub fn new(
        chain_id_result: Option<Result<u64, DeployError>>,
        get_balance_result: Option<Result<U256, DeployError>>,
        send_transaction_result: Option<Result<DeployReceipt, DeployError>>,
    ) -> Self {
        Self {
            chain_id_result: RwLock::new(chain_id_result),
            get_balance_result: RwLock::new(get_balance_result),
            send_transaction_result: RwLock::new(send_transaction_result),
            sent_transactions: RwLock::new(Vec::new()),
        }
    }

    /// Transactions received by `send_transaction_and_wait`, in order.
    pub fn sent_transactions(&self) -> Vec<TransactionRequest> {
        self.sent_transactions.read().unwrap().clone()
    }
}

#[async_trait]
impl RpcClient for MockRpcClient {
    async fn chain_id(&self) -> Result<u64, DeployError> {
        let result = self.chain_id_result.read().unwrap();
        match result.as_ref() {
            Some(res) => res.clone(),
            None => Ok(MOCK_CHAIN_ID),
        }
    }

    async fn get_balance(&self, _address: Address) -> Result<U256, DeployError> {
        let result = self.get_balance_result.read().unwrap();
        match result.as_ref() {
            Some(res) => res.clone(),
            None => Ok(U256::from(10u64).pow(U256::from(18u64))),
        }
    }

    async fn send_transaction_and_wait(
        &self,
        tx: TransactionRequest,
    ) -> Result<DeployReceipt, DeployError> {
        self.sent_transactions.write().unwrap().push(tx);
        let result = self.send_transaction_result.read().unwrap();
        match result.as_ref() {
            Some(res) => res.clone(),
            None => Ok(mock_deploy_receipt(Address::repeat_byte(0x42))),
        }
    }
}
