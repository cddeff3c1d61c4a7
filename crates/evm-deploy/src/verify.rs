//! # Source Verification
//!
//! Verification itself is a separate, manual step against an external
//! service. This module only prepares for it: it renders the command that
//! verifies a fresh deployment and reports whether a service API key is set.
use alloy::primitives::Address;
use std::fmt;

/// Credentials for the contract-verification service.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct VerificationConfig {
    pub api_key: Option<String>,
}

impl VerificationConfig {
    pub fn new(api_key: Option<String>) -> Self {
        // an empty variable counts as unset
        let api_key = api_key.filter(|key| !key.trim().is_empty());
        Self { api_key }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl fmt::Debug for VerificationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// The command that verifies a deployed contract's source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyCommand {
    pub network: String,
    pub address: Address,
    /// Constructor arguments, already rendered as text.
    pub args: Vec<String>,
}

impl VerifyCommand {
    pub fn new(network: impl Into<String>, address: Address, args: Vec<String>) -> Self {
        Self {
            network: network.into(),
            address,
            args,
        }
    }
}

impl fmt::Display for VerifyCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "npx hardhat verify --network {} {} \"{}\"",
            self.network,
            self.address,
            self.args.join(",")
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn test_verify_command_display() {
        let exchange = address!("0xdaf21e9fbC4Fac395Ede4603474B3747Cb2947eD");
        let command = VerifyCommand::new(
            "goerli",
            exchange,
            vec!["0x5FbDB2315678afecb367f032d93F642f64180aa3".to_string()],
        );
        assert_eq!(
            command.to_string(),
            format!(
                "npx hardhat verify --network goerli {} \"0x5FbDB2315678afecb367f032d93F642f64180aa3\"",
                exchange.to_checksum(None)
            )
        );
    }

    #[test]
    fn test_verify_command_joins_args() {
        let command = VerifyCommand::new(
            "hardhat",
            Address::ZERO,
            vec!["1".to_string(), "two".to_string()],
        );
        assert!(command.to_string().ends_with("\"1,two\""));

        let command = VerifyCommand::new("hardhat", Address::ZERO, vec![]);
        assert!(command.to_string().ends_with("\"\""));
    }

    #[test]
    fn test_verification_config() {
        assert!(VerificationConfig::new(Some("ABC123".to_string())).is_configured());
        assert!(!VerificationConfig::new(Some("  ".to_string())).is_configured());
        assert!(!VerificationConfig::new(None).is_configured());
        assert!(!VerificationConfig::default().is_configured());
    }

    #[test]
    fn test_verification_config_debug_redacts_key() {
        let config = VerificationConfig::new(Some("ABC123".to_string()));
        let debug = format!("{:?}", config);
        assert!(!debug.contains("ABC123"));
        assert!(debug.contains("redacted"));
    }
}
