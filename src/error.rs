//! Error types for rebase-ops

use alloy::primitives::Address;
use thiserror::Error;

/// Result type alias for rebase-ops operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running an operator task.
///
/// Every variant is terminal for the invocation: nothing is retried or
/// recovered locally. The CLI boundary reports the error and exits non-zero.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad network selector, or a malformed/missing secrets or ABI file
    #[error("Configuration error: {0}")]
    Config(String),

    /// The requested task name is not in the task table
    #[error("Unknown task: {0}")]
    UnknownCommand(String),

    /// A CLI argument failed count or type validation
    #[error("Invalid argument for {task}: {reason}")]
    Validation { task: &'static str, reason: String },

    /// Unknown function name, or an ABI arity/type mismatch
    #[error("Contract interface error: {0}")]
    ContractInterface(String),

    /// A read-only contract call could not be completed
    #[error("Failed to read {what}: {reason}")]
    Read { what: String, reason: String },

    /// The live nonce query for the deployer account failed
    #[error("Failed to fetch nonce for {address}: {reason}")]
    NonceFetch { address: Address, reason: String },

    /// Key derivation or transaction signing failed
    #[error("Failed to sign: {0}")]
    Signing(String),

    /// The network rejected the raw transaction (surfaced verbatim)
    #[error("Submission rejected: {0}")]
    Submission(String),
}
