use alloy::{
    network::TransactionBuilder as _,
    primitives::{Address, Bytes},
    rpc::types::TransactionRequest,
};

/// Builds the contract-creation transaction sent by a deployment.
///
/// Nonce, fees and chain id are left unset; the provider fills them in.
#[derive(Clone, Debug)]
pub struct TransactionBuilder {
    pub from: Address,
    pub deploy_code: Bytes,
    pub gas_limit: Option<u64>,
}

impl TransactionBuilder {
    pub fn new(from: Address) -> Self {
        Self {
            from,
            deploy_code: Bytes::new(),
            gas_limit: None,
        }
    }

    /// Sets the creation code: the contract bytecode followed by the
    /// ABI-encoded constructor arguments.
    pub fn with_deploy_code(mut self, deploy_code: impl Into<Bytes>) -> Self {
        self.deploy_code = deploy_code.into();
        self
    }

    /// Overrides gas estimation with a fixed limit.
    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }

    pub fn build(self) -> TransactionRequest {
        let tx = TransactionRequest::default()
            .with_from(self.from)
            .with_deploy_code(self.deploy_code);

        match self.gas_limit {
            Some(gas_limit) => tx.with_gas_limit(gas_limit),
            None => tx,
        }
    }
}
