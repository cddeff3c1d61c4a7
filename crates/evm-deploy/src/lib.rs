mod account;
mod artifact;
mod contract;
mod deployment;
mod env;
mod error;
mod fs;
#[cfg(test)]
mod mock;
mod response;
mod rpc;
mod signer;
mod transaction;
mod verify;

pub use account::{Account, NamedAccounts, DEPLOYER};
pub use artifact::Artifact;
pub use contract::{display_value, Contract, DeployOptions};
pub use deployment::Deployment;
pub use env::{Env, EnvConfigs};
pub use error::DeployError;
pub use fs::{DefaultFileReader, FileReader};
pub use response::DeployReceipt;
pub use rpc::{ExternalRpcClient, RpcClient};
pub use signer::{Signer, DEV_MNEMONIC};
pub use transaction::TransactionBuilder;
pub use verify::{VerificationConfig, VerifyCommand};

// re-exports
pub use alloy::dyn_abi::DynSolValue;
pub use alloy::primitives::{Address, TxHash, U256};
