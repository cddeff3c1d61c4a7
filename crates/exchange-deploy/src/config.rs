//! # Project Network Configuration
//!
//! Declares the networks the exchange can be deployed to, which keys sign on
//! each of them, and the credentials of the verification service. Secrets are
//! never written here: they are read from the environment, which a `.env`
//! file in the working directory may populate.
use evm_deploy::{Account, DeployError, EnvConfigs, NamedAccounts, Signer, VerificationConfig};
use std::{
    collections::BTreeMap,
    env,
    path::{Path, PathBuf},
};

/// Compiler version the contracts are built with.
pub const SOLIDITY_VERSION: &str = "0.8.4";
pub const DEFAULT_NETWORK: &str = "hardhat";

pub const HARDHAT_NETWORK: &str = "hardhat";
pub const HARDHAT_RPC_URL: &str = "http://127.0.0.1:8545";
pub const HARDHAT_CHAIN_ID: u64 = 31337;
/// Development accounts a local node funds on startup.
pub const HARDHAT_ACCOUNT_COUNT: u32 = 20;

pub const GOERLI_NETWORK: &str = "goerli";
pub const GOERLI_CHAIN_ID: u64 = 5;

pub const GOERLI_RPC_URL_VAR: &str = "ALCHEMY_GOERLI_RPC_URL";
pub const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";
pub const ETHERSCAN_API_KEY_VAR: &str = "ETHERSCAN_API_KEY";

/// Loads a `.env` file into the process environment without overriding
/// variables that are already set.
///
/// Without `path` the file is searched for in the working directory and its
/// parents. Returns the path of the loaded file.
pub fn load_dotenv(path: Option<&Path>) -> Result<PathBuf, dotenv::Error> {
    match path {
        Some(path) => dotenv::from_path(path).map(|()| path.to_path_buf()),
        None => dotenv::dotenv(),
    }
}

/// A configuration value, either fixed or read from an environment variable.
#[derive(Clone, PartialEq, Eq)]
pub enum Setting {
    Fixed(String),
    Var { name: String, value: Option<String> },
}

impl Setting {
    fn var(name: &str, lookup: &impl Fn(&str) -> Option<String>) -> Self {
        Self::Var {
            name: name.to_string(),
            value: lookup(name).filter(|value| !value.trim().is_empty()),
        }
    }

    /// Returns the value, or `MissingConfig` naming the unset variable.
    pub fn require(&self) -> Result<&str, DeployError> {
        match self {
            Self::Fixed(value) => Ok(value),
            Self::Var {
                value: Some(value), ..
            } => Ok(value),
            Self::Var { name, value: None } => Err(DeployError::MissingConfig(format!(
                "environment variable {} is not set",
                name
            ))),
        }
    }
}

// Values may be keys, so only variable names are ever shown
impl std::fmt::Debug for Setting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(_) => write!(f, "Fixed(..)"),
            Self::Var { name, value } => write!(
                f,
                "Var({}, {})",
                name,
                if value.is_some() { "set" } else { "unset" }
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkAccounts {
    /// The first `count` development accounts of a local node.
    Dev { count: u32 },
    PrivateKeys(Vec<Setting>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    pub url: Setting,
    pub chain_id: Option<u64>,
    pub accounts: NetworkAccounts,
}

#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub solidity: String,
    pub default_network: String,
    pub named_accounts: NamedAccounts,
    pub networks: BTreeMap<String, NetworkConfig>,
    pub verification: VerificationConfig,
}

impl ProjectConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration with `lookup` resolving environment variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut networks = BTreeMap::new();
        networks.insert(
            HARDHAT_NETWORK.to_string(),
            NetworkConfig {
                url: Setting::Fixed(HARDHAT_RPC_URL.to_string()),
                chain_id: Some(HARDHAT_CHAIN_ID),
                accounts: NetworkAccounts::Dev {
                    count: HARDHAT_ACCOUNT_COUNT,
                },
            },
        );
        networks.insert(
            GOERLI_NETWORK.to_string(),
            NetworkConfig {
                url: Setting::var(GOERLI_RPC_URL_VAR, &lookup),
                chain_id: Some(GOERLI_CHAIN_ID),
                accounts: NetworkAccounts::PrivateKeys(vec![Setting::var(
                    PRIVATE_KEY_VAR,
                    &lookup,
                )]),
            },
        );

        Self {
            solidity: SOLIDITY_VERSION.to_string(),
            default_network: DEFAULT_NETWORK.to_string(),
            named_accounts: NamedAccounts::default(),
            networks,
            verification: VerificationConfig::new(lookup(ETHERSCAN_API_KEY_VAR)),
        }
    }

    pub fn network(&self, name: &str) -> Result<&NetworkConfig, DeployError> {
        self.networks.get(name).ok_or_else(|| {
            let known: Vec<&str> = self.networks.keys().map(String::as_str).collect();
            DeployError::InvalidArgument(format!(
                "unknown network `{}`, expected one of: {}",
                name,
                known.join(", ")
            ))
        })
    }

    /// Resolves a network's connection parameters and signers.
    pub fn resolve(&self, name: &str) -> Result<(EnvConfigs, Account), DeployError> {
        let network = self.network(name)?;

        let configs = EnvConfigs {
            network_name: name.to_string(),
            rpc_url: network.url.require()?.to_string(),
            chain_id: network.chain_id,
        };

        let signers = match &network.accounts {
            // Derives up to the highest named index only
            NetworkAccounts::Dev { count } => {
                let needed = self
                    .named_accounts
                    .max_index()
                    .map_or(0, |index| (index as u32).saturating_add(1))
                    .min(*count);
                (0..needed)
                    .map(Signer::dev_account)
                    .collect::<Result<Vec<_>, _>>()?
            }
            NetworkAccounts::PrivateKeys(keys) => keys
                .iter()
                .map(|key| Signer::from_private_key(key.require()?))
                .collect::<Result<Vec<_>, _>>()?,
        };

        Ok((configs, Account::new(signers, self.named_accounts.clone())))
    }
}
