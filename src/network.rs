//! Network registry and per-run configuration
//!
//! The registry is a fixed table mapping a network selector to the chain ID,
//! the secrets key holding that network's API endpoint, and the secrets keys
//! holding each contract's deployed address. Resolution is a pure total
//! function over the table; an unrecognized selector fails before any
//! secrets or network access happens.

use std::path::PathBuf;
use std::str::FromStr;

use crate::contract::ContractKind;
use crate::error::{Error, Result};

/// Supported networks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Testnet,
    Mainnet,
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "testnet" => Ok(Network::Testnet),
            "mainnet" => Ok(Network::Mainnet),
            other => Err(Error::Config(format!(
                "unknown network selector '{}' (expected 'testnet' or 'mainnet')",
                other
            ))),
        }
    }
}

/// One row of the network registry
#[derive(Debug)]
struct RegistryEntry {
    selector: &'static str,
    network: Network,
    chain_id: u64,
    api_key_name: &'static str,
    token_address_key: &'static str,
    policy_address_key: &'static str,
    orchestrator_address_key: &'static str,
}

const REGISTRY: &[RegistryEntry] = &[
    RegistryEntry {
        selector: "testnet",
        network: Network::Testnet,
        chain_id: 11_155_111,
        api_key_name: "alchemyTestnetApi",
        token_address_key: "testnetTokenAddress",
        policy_address_key: "testnetPolicyAddress",
        orchestrator_address_key: "testnetOrchestratorAddress",
    },
    RegistryEntry {
        selector: "mainnet",
        network: Network::Mainnet,
        chain_id: 1,
        api_key_name: "alchemyMainnetApi",
        token_address_key: "mainnetTokenAddress",
        policy_address_key: "mainnetPolicyAddress",
        orchestrator_address_key: "mainnetOrchestratorAddress",
    },
];

/// Immutable lookup context for the active network, selected once per run
#[derive(Debug, Clone, Copy)]
pub struct NetworkContext {
    entry: &'static RegistryEntry,
}

impl NetworkContext {
    /// Resolves a selector string against the registry.
    pub fn resolve(selector: &str) -> Result<Self> {
        // Parse first so a bad selector always reports the same error.
        let network = selector.parse::<Network>()?;
        let entry = REGISTRY
            .iter()
            .find(|e| e.network == network)
            .ok_or_else(|| Error::Config(format!("network '{}' has no registry entry", selector)))?;
        Ok(Self { entry })
    }

    pub fn network(&self) -> Network {
        self.entry.network
    }

    pub fn selector(&self) -> &'static str {
        self.entry.selector
    }

    /// EIP-155 chain ID used when signing
    pub fn chain_id(&self) -> u64 {
        self.entry.chain_id
    }

    /// Secrets key holding this network's API endpoint URL
    pub fn api_key_name(&self) -> &'static str {
        self.entry.api_key_name
    }

    /// Secrets key holding the given contract's deployed address
    pub fn address_key(&self, kind: ContractKind) -> &'static str {
        match kind {
            ContractKind::Token => self.entry.token_address_key,
            ContractKind::Policy => self.entry.policy_address_key,
            ContractKind::Orchestrator => self.entry.orchestrator_address_key,
        }
    }
}

/// Fixed gas parameters applied to every submitted transaction
#[derive(Debug, Clone)]
pub struct GasConfig {
    /// Gas price in wei
    pub gas_price: u128,
    /// Gas limit in units
    pub gas_limit: u64,
}

impl Default for GasConfig {
    fn default() -> Self {
        Self {
            gas_price: 140_000_000_000,
            gas_limit: 500_000,
        }
    }
}

/// Per-invocation configuration, constructed at process entry and threaded
/// explicitly into every component that needs it
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub network: NetworkContext,
    pub gas: GasConfig,
    pub secrets_path: PathBuf,
}

impl RunConfig {
    pub fn new(network_selector: &str, secrets_path: PathBuf) -> Result<Self> {
        Ok(Self {
            network: NetworkContext::resolve(network_selector)?,
            gas: GasConfig::default(),
            secrets_path,
        })
    }
}
