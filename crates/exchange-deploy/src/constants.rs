use alloy::primitives::{address, Address};

/// Address of the deployed Crypto Dev token the exchange trades against.
pub const CRYPTO_DEV_TOKEN_CONTRACT_ADDRESS: Address =
    address!("0x1d4f5b3ad0b7a2c1f1e1c0b9d2e87a6f53a4c2e9");

/// Name of the contract deployed by the exchange script.
pub const EXCHANGE_CONTRACT_NAME: &str = "Exchange";

/// Where the Solidity toolchain writes the `Exchange` artifact.
pub const EXCHANGE_ARTIFACT_PATH: &str = "artifacts/contracts/Exchange.sol/Exchange.json";
