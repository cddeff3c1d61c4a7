use crate::error::DeployError;
use crate::response::DeployReceipt;
use crate::{Account, Env, EnvConfigs};
use alloy::primitives::U256;
use std::sync::Arc;

use super::mock_signer1;
use super::rpc::MockRpcClient;

/// Creates a mock environment with configurable responses
pub fn mock_env(
    chain_id_result: Option<Result<u64, DeployError>>,
    get_balance_result: Option<Result<U256, DeployError>>,
    send_transaction_result: Option<Result<DeployReceipt, DeployError>>,
) -> (Env, Arc<MockRpcClient>) {
    let client = Arc::new(MockRpcClient::new(
        chain_id_result,
        get_balance_result,
        send_transaction_result,
    ));

    let env = Env {
        configs: EnvConfigs {
            network_name: "hardhat".to_string(),
            rpc_url: "http://127.0.0.1:8545".to_string(),
            chain_id: None,
        },
        rpc_client: client.clone(),
    };
    (env, client)
}

/// Creates a single-signer account whose deployer is `mock_signer1`
pub fn mock_account() -> Account {
    Account::single(mock_signer1())
}
