use crate::verify::VerifyCommand;
use alloy::primitives::{Address, TxHash};
use std::fmt;

/// Outcome of a successful deployment.
///
/// Only ever read back after the run; `address` is never the zero address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub contract_name: String,
    /// Constructor arguments as passed, rendered as text.
    pub args: Vec<String>,
    pub address: Address,
    pub transaction_hash: TxHash,
    pub block_number: Option<u64>,
    pub gas_used: u64,
    pub deployer: Address,
    pub network: String,
}

impl Deployment {
    pub fn verify_command(&self) -> VerifyCommand {
        VerifyCommand::new(self.network.clone(), self.address, self.args.clone())
    }
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {} on {} (tx {}, gas {}",
            self.contract_name, self.address, self.network, self.transaction_hash, self.gas_used
        )?;
        if let Some(block) = self.block_number {
            write!(f, ", block {}", block)?;
        }
        write!(f, ")")
    }
}
