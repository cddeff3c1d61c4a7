use alloy::{
    network::ReceiptResponse,
    primitives::{Address, TxHash},
    rpc::types::TransactionReceipt,
};

use crate::DeployError;

/// The part of a mined creation transaction's receipt that a deployment needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployReceipt {
    pub transaction_hash: TxHash,
    /// Whether the transaction executed without reverting.
    pub status: bool,
    /// Address assigned to the created contract, if any.
    pub contract_address: Option<Address>,
    pub block_number: Option<u64>,
    pub gas_used: u64,
}

impl From<&TransactionReceipt> for DeployReceipt {
    fn from(receipt: &TransactionReceipt) -> Self {
        Self {
            transaction_hash: receipt.transaction_hash,
            status: ReceiptResponse::status(receipt),
            contract_address: receipt.contract_address,
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
        }
    }
}

impl DeployReceipt {
    /// Returns the address of the created contract.
    ///
    /// # Errors
    ///
    /// - `TransactionFailed` if the transaction reverted
    /// - `MissingContractAddress` if the receipt carries no address, or the zero address
    pub fn contract_address(&self) -> Result<Address, DeployError> {
        if !self.status {
            return Err(DeployError::TransactionFailed(format!(
                "creation transaction {} reverted",
                self.transaction_hash
            )));
        }

        match self.contract_address {
            Some(address) if !address.is_zero() => Ok(address),
            _ => Err(DeployError::MissingContractAddress(format!(
                "receipt of transaction {} has no contract address",
                self.transaction_hash
            ))),
        }
    }
}
