//! # rebase-ops
//!
//! Operator library for administering a deployed rebasing-token contract
//! suite: the token itself, its monetary policy, and the rebase
//! orchestrator.
//!
//! One generic pipeline serves every task: resolve the network context,
//! read the secrets file, bind the target contract's ABI to its deployed
//! address, then either execute a read-only view call or build, sign, and
//! submit a transaction.
//!
//! ```rust,ignore
//! use rebase_ops::{ops, RunConfig};
//!
//! let config = RunConfig::new("testnet", "secrets.json".into())?;
//! let outcome = ops::run(&config, "rebase", &["105".into(), "110".into()]).await?;
//! ```
//!
//! Execution is strictly sequential: one task, one network call sequence,
//! one process lifetime. Nonces are fetched live and never cached, so
//! concurrent invocations from the same deployer are unsupported.

pub mod contract;
pub mod denomination;
pub mod error;
pub mod network;
pub mod ops;
pub mod secrets;
pub mod submit;
pub mod tx;

// Re-export main types at crate root
pub use contract::{ContractHandle, ContractKind};
pub use denomination::{from_token_units, to_token_units, TOKEN_DECIMALS};
pub use error::{Error, Result};
pub use network::{GasConfig, Network, NetworkContext, RunConfig};
pub use ops::{find_task, Outcome, ParamKind, TaskAction, TaskSpec, TASKS};
pub use secrets::Secrets;
pub use submit::SignedTransaction;
pub use tx::TransactionRequest;
