//! # Deployment Error Handling
//!
//! This module defines the error types used throughout the deployment helpers.
//! It provides a unified error handling approach for every step of a deployment
//! run: configuration, artifact loading, argument encoding, and submission of
//! the creation transaction to the network.
use std::{error::Error, fmt};

/// Errors that can occur when deploying a contract.
///
/// This enum covers errors from configuration loading, signing, artifact
/// parsing, constructor argument encoding, and network communication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployError {
    /// Error when a network request to the JSON-RPC node fails.
    NetworkRequestFailed(String),

    /// Error when the node reports a different chain than the one configured.
    ChainIdMismatch { expected: u64, actual: u64 },

    /// Error when a private key cannot be parsed.
    InvalidPrivateKey(String),

    /// Error when an invalid argument is provided to a function.
    InvalidArgument(String),

    /// Error when a contract artifact cannot be read.
    FileReadError(String),

    /// Error when a contract artifact is not a valid compiler artifact.
    ArtifactParseError(String),

    /// Error when constructor arguments do not match the contract ABI.
    AbiEncodingFailed(String),

    /// Error when a mined transaction reverted.
    TransactionFailed(String),

    /// Error when a creation receipt does not carry the new contract address.
    MissingContractAddress(String),

    /// Error when a required configuration value is absent.
    MissingConfig(String),

    /// Error when no account is configured under a requested name.
    Unauthorized(String),
}

impl fmt::Display for DeployError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NetworkRequestFailed(msg) => write!(f, "Network request failed: {}", msg),
            Self::ChainIdMismatch { expected, actual } => write!(
                f,
                "Chain id mismatch: expected {}, node reports {}",
                expected, actual
            ),
            Self::InvalidPrivateKey(msg) => write!(f, "Invalid private key: {}", msg),
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Self::FileReadError(msg) => write!(f, "File read error: {}", msg),
            Self::ArtifactParseError(msg) => write!(f, "Artifact parse error: {}", msg),
            Self::AbiEncodingFailed(msg) => write!(f, "ABI encoding failed: {}", msg),
            Self::TransactionFailed(msg) => write!(f, "Transaction failed: {}", msg),
            Self::MissingContractAddress(msg) => {
                write!(f, "Missing contract address: {}", msg)
            }
            Self::MissingConfig(msg) => write!(f, "Missing configuration: {}", msg),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
        }
    }
}

impl Error for DeployError {}

/// Convert IO errors into DeployError
impl From<std::io::Error> for DeployError {
    fn from(err: std::io::Error) -> Self {
        Self::FileReadError(format!("File operation failed: {}", err))
    }
}

/// Convert JSON errors into DeployError
impl From<serde_json::Error> for DeployError {
    fn from(err: serde_json::Error) -> Self {
        Self::ArtifactParseError(err.to_string())
    }
}
