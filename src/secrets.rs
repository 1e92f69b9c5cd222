//! Secrets store reader
//!
//! The credentials file is a single flat JSON document of string keys to
//! string values: the deployer address, the signing mnemonic, one API
//! endpoint per network, and one deployed address per contract per network.
//! It is loaded once per invocation and never mutated.
//!
//! Secret values are never echoed into error messages or logs.

use std::collections::BTreeMap;
use std::path::Path;

use alloy::primitives::Address;
use url::Url;

use crate::contract::ContractKind;
use crate::error::{Error, Result};
use crate::network::NetworkContext;

/// In-memory view of the credentials file
#[derive(Debug)]
pub struct Secrets {
    values: BTreeMap<String, String>,
}

impl Secrets {
    /// Reads and parses the credentials file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read secrets file {}: {}", path.display(), e))
        })?;
        Self::from_json(&raw)
    }

    /// Parses a credentials document from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self> {
        let values: BTreeMap<String, String> = serde_json::from_str(raw)
            .map_err(|e| Error::Config(format!("malformed secrets file: {}", e)))?;
        Ok(Self { values })
    }

    fn get(&self, key: &str) -> Result<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| Error::Config(format!("secrets file is missing key '{}'", key)))
    }

    /// The deployer account, normalized to a checksummed address.
    pub fn deployer_address(&self) -> Result<Address> {
        parse_address("deployerAddress", self.get("deployerAddress")?)
    }

    /// The HD wallet mnemonic phrase.
    pub fn mnemonic(&self) -> Result<&str> {
        self.get("mnemonic")
    }

    /// The JSON-RPC endpoint URL for the active network.
    pub fn api_endpoint(&self, ctx: &NetworkContext) -> Result<Url> {
        let key = ctx.api_key_name();
        // The URL embeds an API credential, so the value is not echoed.
        Url::parse(self.get(key)?)
            .map_err(|_| Error::Config(format!("secrets key '{}' is not a valid URL", key)))
    }

    /// The deployed address of the given contract on the active network.
    pub fn contract_address(&self, kind: ContractKind, ctx: &NetworkContext) -> Result<Address> {
        let key = ctx.address_key(kind);
        parse_address(key, self.get(key)?)
    }
}

fn parse_address(key: &str, raw: &str) -> Result<Address> {
    raw.parse::<Address>()
        .map_err(|e| Error::Config(format!("secrets key '{}' is not a valid address: {}", key, e)))
}
