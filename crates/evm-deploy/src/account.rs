//! # Deployment Accounts
//!
//! This module resolves symbolic account names, such as `deployer`, to the
//! signers configured for a network.
//!
//! ## Example
//!
//! ```rust,no_run
//! use evm_deploy::{Account, NamedAccounts, Signer};
//!
//! let signer = Signer::from_private_key(
//!     "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318",
//! )
//! .unwrap();
//!
//! // `deployer` resolves to the first configured signer
//! let account = Account::single(signer);
//! let deployer = account.deployer().unwrap();
//! println!("deploying from {}", deployer.address());
//! ```
use crate::{error::DeployError, Signer};
use alloy::network::EthereumWallet;
use std::collections::BTreeMap;

/// Name of the account that sends creation transactions.
pub const DEPLOYER: &str = "deployer";

/// Maps account names to indices into a network's signer list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedAccounts {
    accounts: BTreeMap<String, usize>,
}

impl Default for NamedAccounts {
    /// `deployer` is the first configured signer.
    fn default() -> Self {
        Self::empty().with(DEPLOYER, 0)
    }
}

impl NamedAccounts {
    /// Creates a mapping without any names.
    pub fn empty() -> Self {
        Self {
            accounts: BTreeMap::new(),
        }
    }

    /// Assigns `name` to the signer at `index`, replacing any previous assignment.
    pub fn with(mut self, name: &str, index: usize) -> Self {
        self.accounts.insert(name.to_string(), index);
        self
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.accounts.get(name).copied()
    }

    /// Highest signer index any name refers to.
    pub fn max_index(&self) -> Option<usize> {
        self.accounts.values().copied().max()
    }
}

/// The signers available on a network together with their names.
#[derive(Debug, Clone)]
pub struct Account {
    signers: Vec<Signer>,
    named: NamedAccounts,
}

impl Account {
    /// Creates an account set with a single signer acting as `deployer`.
    pub fn single(signer: Signer) -> Self {
        Self {
            signers: vec![signer],
            named: NamedAccounts::default(),
        }
    }

    pub fn new(signers: Vec<Signer>, named: NamedAccounts) -> Self {
        Self { signers, named }
    }

    pub fn signers(&self) -> &[Signer] {
        &self.signers
    }

    /// Resolves `name` to its signer.
    ///
    /// # Errors
    ///
    /// Returns `DeployError::Unauthorized` if the name is unknown or points
    /// past the configured signers.
    pub fn named(&self, name: &str) -> Result<&Signer, DeployError> {
        let index = self.named.index_of(name).ok_or_else(|| {
            DeployError::Unauthorized(format!("no account named `{}`", name))
        })?;

        self.signers.get(index).ok_or_else(|| {
            DeployError::Unauthorized(format!(
                "account `{}` refers to index {} but only {} signer(s) are configured",
                name,
                index,
                self.signers.len()
            ))
        })
    }

    pub fn deployer(&self) -> Result<&Signer, DeployError> {
        self.named(DEPLOYER)
    }

    /// Builds a wallet holding every signer; the first one is the default.
    pub fn wallet(&self) -> Result<EthereumWallet, DeployError> {
        let (first, rest) = self
            .signers
            .split_first()
            .ok_or_else(|| DeployError::Unauthorized("no signers configured".to_string()))?;

        let mut wallet = first.wallet();
        for signer in rest {
            wallet.register_signer(signer.inner().clone());
        }
        Ok(wallet)
    }
}
