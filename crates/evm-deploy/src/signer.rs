use crate::error::DeployError;
use alloy::{
    network::EthereumWallet,
    primitives::Address,
    signers::local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner},
};
use std::{fmt, str::FromStr};

/// Mnemonic of the development accounts pre-funded by local EVM nodes.
pub const DEV_MNEMONIC: &str = "test test test test test test test test test test test junk";

#[derive(Clone)]
pub struct Signer {
    inner: PrivateKeySigner,
}

impl Signer {
    /// Parses a hex encoded secp256k1 private key, with or without `0x` prefix.
    pub fn from_private_key(private_key: &str) -> Result<Self, DeployError> {
        let trimmed = private_key.trim();
        if trimmed.is_empty() {
            return Err(DeployError::InvalidPrivateKey("key is empty".to_string()));
        }
        // The parse error never echoes the key material.
        let inner = PrivateKeySigner::from_str(trimmed)
            .map_err(|e| DeployError::InvalidPrivateKey(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Derives the development account at `index` of a local node.
    pub fn dev_account(index: u32) -> Result<Self, DeployError> {
        let inner = MnemonicBuilder::<English>::default()
            .phrase(DEV_MNEMONIC)
            .index(index)
            .and_then(|builder| builder.build())
            .map_err(|e| DeployError::InvalidPrivateKey(e.to_string()))?;
        Ok(Self { inner })
    }

    pub fn address(&self) -> Address {
        self.inner.address()
    }

    pub fn wallet(&self) -> EthereumWallet {
        EthereumWallet::from(self.inner.clone())
    }

    pub(crate) fn inner(&self) -> &PrivateKeySigner {
        &self.inner
    }
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}
