//! # Compiled Contract Artifacts
//!
//! Loads the JSON artifact the Solidity toolchain writes for every compiled
//! contract: its name, ABI and creation bytecode.
use crate::{
    error::DeployError,
    fs::{DefaultFileReader, FileReader},
};
use alloy::{json_abi::JsonAbi, primitives::Bytes};
use serde::Deserialize;

/// Marker the compiler leaves in bytecode that still needs library linking.
const LINK_PLACEHOLDER: &str = "__";

/// Creation bytecode as written by the different toolchains.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    Hex(String),
    Object { object: String },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    contract_name: Option<String>,
    abi: JsonAbi,
    bytecode: RawBytecode,
}

/// A compiled contract ready to be deployed.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub contract_name: String,
    pub abi: JsonAbi,
    pub bytecode: Bytes,
}

impl Artifact {
    /// Reads and parses the artifact at `path`.
    pub fn from_file(path: &str) -> Result<Self, DeployError> {
        Self::from_reader(&DefaultFileReader, path)
    }

    pub fn from_reader(reader: &impl FileReader, path: &str) -> Result<Self, DeployError> {
        let bytes = reader.read(path)?;
        let json = String::from_utf8(bytes).map_err(|e| {
            DeployError::ArtifactParseError(format!("{} is not UTF-8: {}", path, e))
        })?;
        let artifact = Self::from_json(&json)?;
        tracing::debug!(
            path,
            contract = %artifact.contract_name,
            bytecode_len = artifact.bytecode.len(),
            "loaded artifact"
        );
        Ok(artifact)
    }

    /// Parses an artifact from its JSON text.
    ///
    /// Artifacts without a `contractName` field are named `Contract`.
    pub fn from_json(json: &str) -> Result<Self, DeployError> {
        let raw: RawArtifact = serde_json::from_str(json)?;
        let contract_name = raw.contract_name.unwrap_or_else(|| "Contract".to_string());

        let code = match raw.bytecode {
            RawBytecode::Hex(code) => code,
            RawBytecode::Object { object } => object,
        };
        let bytecode = decode_bytecode(&contract_name, &code)?;

        Ok(Self {
            contract_name,
            abi: raw.abi,
            bytecode,
        })
    }
}

fn decode_bytecode(contract_name: &str, code: &str) -> Result<Bytes, DeployError> {
    let code = code.trim();
    let code = code.strip_prefix("0x").unwrap_or(code);

    if code.is_empty() {
        return Err(DeployError::ArtifactParseError(format!(
            "{} has no creation bytecode; abstract contracts and interfaces cannot be deployed",
            contract_name
        )));
    }
    if code.contains(LINK_PLACEHOLDER) {
        return Err(DeployError::ArtifactParseError(format!(
            "{} has unlinked library references",
            contract_name
        )));
    }

    hex::decode(code).map(Bytes::from).map_err(|e| {
        DeployError::ArtifactParseError(format!(
            "{} bytecode is not valid hex: {}",
            contract_name, e
        ))
    })
}
