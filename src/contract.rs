//! Contract binding: ABI artifacts, dynamic call encoding, read-only calls
//!
//! Each contract kind has a fixed artifact path. The artifact is a
//! hardhat-style JSON document whose `abi` member lists the callable
//! functions; calls are encoded by function name against that descriptor at
//! runtime, failing closed when the name, arity, or argument types do not
//! match.

use alloy::network::{AnyNetwork, TransactionBuilder};
use alloy::primitives::{Address, Bytes};
use alloy::providers::Provider;
use alloy_dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt};
use alloy_json_abi::{Function, JsonAbi};
use serde::Deserialize;

use crate::error::{Error, Result};

/// The three administered contracts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractKind {
    Token,
    Policy,
    Orchestrator,
}

impl ContractKind {
    /// Fixed artifact location per contract kind, not configurable at runtime.
    pub fn artifact_path(self) -> &'static str {
        match self {
            ContractKind::Token => "artifacts/Token.json",
            ContractKind::Policy => "artifacts/Policy.json",
            ContractKind::Orchestrator => "artifacts/Orchestrator.json",
        }
    }
}

/// Hardhat-style artifact; only the ABI member is consumed
#[derive(Deserialize)]
struct Artifact {
    abi: JsonAbi,
}

/// A contract ABI bound to a deployed address
pub struct ContractHandle {
    pub address: Address,
    abi: JsonAbi,
}

impl ContractHandle {
    pub fn new(address: Address, abi: JsonAbi) -> Self {
        Self { address, abi }
    }

    /// Loads the artifact for `kind` and binds it to `address`.
    pub fn load(kind: ContractKind, address: Address) -> Result<Self> {
        let path = kind.artifact_path();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read ABI artifact {}: {}", path, e)))?;
        let artifact: Artifact = serde_json::from_str(&raw)
            .map_err(|e| Error::Config(format!("malformed ABI artifact {}: {}", path, e)))?;
        Ok(Self::new(address, artifact.abi))
    }

    fn function(&self, name: &str) -> Result<&Function> {
        self.abi
            .function(name)
            .and_then(|overloads| overloads.first())
            .ok_or_else(|| {
                Error::ContractInterface(format!("function '{}' not found in ABI", name))
            })
    }

    /// ABI-encodes a call to `name` with the given ordered arguments.
    ///
    /// Arity is checked against the descriptor before encoding; type
    /// mismatches surface from the encoder itself.
    pub fn encode(&self, name: &str, args: &[DynSolValue]) -> Result<Bytes> {
        let function = self.function(name)?;
        if function.inputs.len() != args.len() {
            return Err(Error::ContractInterface(format!(
                "function '{}' expects {} argument(s), got {}",
                name,
                function.inputs.len(),
                args.len()
            )));
        }
        function
            .abi_encode_input(args)
            .map(Bytes::from)
            .map_err(|e| Error::ContractInterface(format!("cannot encode call to '{}': {}", name, e)))
    }

    /// Decodes the argument section of previously encoded call data.
    pub fn decode_input(&self, name: &str, data: &[u8]) -> Result<Vec<DynSolValue>> {
        let function = self.function(name)?;
        if data.len() < 4 || data[..4] != function.selector()[..] {
            return Err(Error::ContractInterface(format!(
                "call data does not target function '{}'",
                name
            )));
        }
        function
            .abi_decode_input(&data[4..])
            .map_err(|e| Error::ContractInterface(format!("cannot decode call to '{}': {}", name, e)))
    }

    /// Executes a zero-argument view function and decodes its single result.
    pub async fn read<P>(&self, provider: &P, name: &str) -> Result<DynSolValue>
    where
        P: Provider<AnyNetwork>,
    {
        let function = self.function(name)?;
        let data = self.encode(name, &[])?;

        let request = <AnyNetwork as alloy::network::Network>::TransactionRequest::default()
            .with_to(self.address)
            .with_input(data);

        let output = provider.call(request).await.map_err(|e| Error::Read {
            what: name.to_string(),
            reason: e.to_string(),
        })?;

        let mut values = function.abi_decode_output(&output).map_err(|e| Error::Read {
            what: name.to_string(),
            reason: format!("cannot decode result: {}", e),
        })?;

        values.pop().ok_or_else(|| Error::Read {
            what: name.to_string(),
            reason: "function returned no value".to_string(),
        })
    }
}
