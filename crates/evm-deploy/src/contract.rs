use crate::{
    account::DEPLOYER, artifact::Artifact, deployment::Deployment, error::DeployError,
    transaction::TransactionBuilder, Account, Env,
};
use alloy::dyn_abi::{DynSolValue, JsonAbiExt};

/// Options of a single deployment.
#[derive(Clone, Debug)]
pub struct DeployOptions {
    /// Named account that sends the creation transaction.
    pub from: String,
    /// Fixed gas limit; estimated by the node when unset.
    pub gas_limit: Option<u64>,
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self {
            from: DEPLOYER.to_string(),
            gas_limit: None,
        }
    }
}

pub struct Contract {
    artifact: Artifact,
}

impl Contract {
    pub fn new(artifact: Artifact) -> Self {
        Self { artifact }
    }

    pub fn from_artifact_path(path: &str) -> Result<Self, DeployError> {
        Ok(Self::new(Artifact::from_file(path)?))
    }

    pub fn name(&self) -> &str {
        &self.artifact.contract_name
    }

    pub fn artifact(&self) -> &Artifact {
        &self.artifact
    }

    /// ABI-encodes constructor arguments, validating them against the ABI.
    ///
    /// A contract without a constructor accepts only an empty argument list.
    pub fn encode_constructor_args(&self, args: &[DynSolValue]) -> Result<Vec<u8>, DeployError> {
        match self.artifact.abi.constructor() {
            Some(constructor) => constructor.abi_encode_input(args).map_err(|e| {
                DeployError::AbiEncodingFailed(format!("{} constructor: {}", self.name(), e))
            }),
            None if args.is_empty() => Ok(Vec::new()),
            None => Err(DeployError::AbiEncodingFailed(format!(
                "{} has no constructor but {} argument(s) were given",
                self.name(),
                args.len()
            ))),
        }
    }

    /// Creation code: bytecode followed by the encoded constructor arguments.
    pub fn creation_code(&self, args: &[DynSolValue]) -> Result<Vec<u8>, DeployError> {
        let encoded_args = self.encode_constructor_args(args)?;
        let mut code = Vec::with_capacity(self.artifact.bytecode.len() + encoded_args.len());
        code.extend_from_slice(&self.artifact.bytecode);
        code.extend_from_slice(&encoded_args);
        Ok(code)
    }

    /// Deploys the contract from the `deployer` account.
    pub async fn deploy(
        &self,
        env: &Env,
        account: &Account,
        constructor_args: &[DynSolValue],
    ) -> Result<Deployment, DeployError> {
        self.deploy_with(env, account, constructor_args, DeployOptions::default())
            .await
    }

    pub async fn deploy_with(
        &self,
        env: &Env,
        account: &Account,
        constructor_args: &[DynSolValue],
        options: DeployOptions,
    ) -> Result<Deployment, DeployError> {
        let deployer = account.named(&options.from)?.address();
        // Malformed arguments fail here, before anything reaches the node
        let code = self.creation_code(constructor_args)?;

        let chain_id = env.check_chain_id().await?;
        let balance = env.get_balance(deployer).await?;
        if balance.is_zero() {
            tracing::warn!(%deployer, "deployer has no funds");
        }

        tracing::info!(
            contract = self.name(),
            network = env.network_name(),
            chain_id,
            %deployer,
            "deploying"
        );

        let mut builder = TransactionBuilder::new(deployer).with_deploy_code(code);
        if let Some(gas_limit) = options.gas_limit {
            builder = builder.with_gas_limit(gas_limit);
        }

        let receipt = env.send_deploy_transaction(builder.build()).await?;
        let address = receipt.contract_address()?;

        let deployment = Deployment {
            contract_name: self.name().to_string(),
            args: constructor_args.iter().map(display_value).collect(),
            address,
            transaction_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
            deployer,
            network: env.network_name().to_string(),
        };

        tracing::info!(
            contract = self.name(),
            %address,
            tx_hash = %deployment.transaction_hash,
            gas_used = deployment.gas_used,
            "deployed"
        );

        Ok(deployment)
    }
}

/// Renders a constructor argument the way it is written on a command line.
pub fn display_value(value: &DynSolValue) -> String {
    match value {
        DynSolValue::Address(address) => address.to_string(),
        DynSolValue::Bool(b) => b.to_string(),
        DynSolValue::Int(i, _) => i.to_string(),
        DynSolValue::Uint(u, _) => u.to_string(),
        DynSolValue::String(s) => s.clone(),
        DynSolValue::Bytes(bytes) => format!("0x{}", hex::encode(bytes)),
        DynSolValue::FixedBytes(word, size) => format!("0x{}", hex::encode(&word[..*size])),
        DynSolValue::Array(values)
        | DynSolValue::FixedArray(values)
        | DynSolValue::Tuple(values) => {
            let items: Vec<String> = values.iter().map(display_value).collect();
            format!("[{}]", items.join(","))
        }
        other => format!("{:?}", other),
    }
}
