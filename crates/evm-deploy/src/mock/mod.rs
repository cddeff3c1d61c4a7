pub mod account;
pub mod fs;
pub mod rpc;

pub use account::*;

use crate::{DeployReceipt, Signer};
use alloy::primitives::{Address, TxHash};

/// Compiled `Exchange` artifact in the Solidity toolchain's JSON layout.
pub const EXCHANGE_ARTIFACT: &str = include_str!("../../fixtures/Exchange.json");

pub fn all_signers() -> Vec<Signer> {
    vec![mock_signer1(), mock_signer2(), mock_signer3()]
}

pub fn mock_signer1() -> Signer {
    Signer::from_private_key("0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318")
        .unwrap()
}

pub fn mock_signer2() -> Signer {
    Signer::from_private_key("0x8da4ef21b864d2cc526dbdb2a120bd2874c36c9d0a1fb7f8c63d7f7a8b41de8f")
        .unwrap()
}

pub fn mock_signer3() -> Signer {
    Signer::from_private_key("0x0dbbe8e4ae425a6d2687f1a7e3ba17bc98c673636790f1b8ad91193c05875ef1")
        .unwrap()
}

/// A successful creation receipt for a contract at `address`.
pub fn mock_deploy_receipt(address: Address) -> DeployReceipt {
    DeployReceipt {
        transaction_hash: TxHash::repeat_byte(0xab),
        status: true,
        contract_address: Some(address),
        block_number: Some(8_120_000),
        gas_used: 1_234_567,
    }
}

/// A receipt for a creation transaction that reverted.
pub fn mock_reverted_receipt() -> DeployReceipt {
    DeployReceipt {
        transaction_hash: TxHash::repeat_byte(0xcd),
        status: false,
        contract_address: None,
        block_number: Some(8_120_001),
        gas_used: 30_000,
    }
}
