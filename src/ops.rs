//! Command router: the task table and the generic execution pipeline
//!
//! Every operator task is one row of a declarative table: its target
//! contract, the function it calls, the shape of its user-supplied
//! arguments, and any fixed arguments appended after them. One generic
//! pipeline serves all three contracts.
//!
//! Arguments are validated and converted before any secrets or network
//! access; a failed conversion means zero network calls were made.

use alloy::network::AnyNetwork;
use alloy::primitives::{Address, B256, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy_dyn_abi::DynSolValue;

use crate::contract::{ContractHandle, ContractKind};
use crate::denomination::to_token_units;
use crate::error::{Error, Result};
use crate::network::RunConfig;
use crate::secrets::Secrets;
use crate::{submit, tx};

/// Shape of one user-supplied task argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Hex account address, passed through unscaled
    Address,
    /// Whole-token amount, scaled into 10^9 fixed-point units
    Amount,
    /// Plain base-10 integer (price or timing parameter), passed through unscaled
    Uint,
}

/// What a task does once its arguments are bound
#[derive(Debug, Clone, Copy)]
pub enum TaskAction {
    /// Encode, sign, and submit a state-changing call
    Submit {
        function: &'static str,
        params: &'static [ParamKind],
        /// Literal arguments appended after the user-supplied ones, never scaled
        fixed: &'static [u64],
    },
    /// Execute a zero-argument view call and report the result
    Read {
        function: &'static str,
        label: &'static str,
    },
}

/// One row of the task table
#[derive(Debug)]
pub struct TaskSpec {
    pub name: &'static str,
    pub kind: ContractKind,
    pub action: TaskAction,
}

/// Every recognized operator task, grouped by target contract
pub const TASKS: &[TaskSpec] = &[
    // Token
    TaskSpec {
        name: "setMonetaryPolicy",
        kind: ContractKind::Token,
        action: TaskAction::Submit {
            function: "setMonetaryPolicy",
            params: &[ParamKind::Address],
            fixed: &[],
        },
    },
    TaskSpec {
        name: "approve",
        kind: ContractKind::Token,
        action: TaskAction::Submit {
            function: "approve",
            params: &[ParamKind::Address, ParamKind::Amount],
            fixed: &[],
        },
    },
    TaskSpec {
        name: "transfer",
        kind: ContractKind::Token,
        action: TaskAction::Submit {
            function: "transfer",
            params: &[ParamKind::Address, ParamKind::Amount],
            fixed: &[],
        },
    },
    TaskSpec {
        name: "checkTotalSupply",
        kind: ContractKind::Token,
        action: TaskAction::Read {
            function: "totalSupply",
            label: "Total supply",
        },
    },
    TaskSpec {
        name: "tokenCheck",
        kind: ContractKind::Token,
        action: TaskAction::Read {
            function: "monetaryPolicy",
            label: "Monetary policy",
        },
    },
    // Policy
    TaskSpec {
        name: "setOrchestrator",
        kind: ContractKind::Policy,
        action: TaskAction::Submit {
            function: "setOrchestrator",
            params: &[ParamKind::Address],
            fixed: &[],
        },
    },
    TaskSpec {
        name: "setRebaseLag",
        kind: ContractKind::Policy,
        action: TaskAction::Submit {
            function: "setRebaseLag",
            params: &[],
            fixed: &[1],
        },
    },
    TaskSpec {
        name: "setRebaseTimingParameters",
        kind: ContractKind::Policy,
        action: TaskAction::Submit {
            function: "setRebaseTimingParameters",
            params: &[],
            fixed: &[300, 0, 300],
        },
    },
    TaskSpec {
        name: "policyCheck",
        kind: ContractKind::Policy,
        action: TaskAction::Read {
            function: "orchestrator",
            label: "Orchestrator",
        },
    },
    // Orchestrator
    TaskSpec {
        name: "rebase",
        kind: ContractKind::Orchestrator,
        action: TaskAction::Submit {
            function: "rebase",
            params: &[ParamKind::Uint, ParamKind::Uint],
            fixed: &[],
        },
    },
    TaskSpec {
        name: "orchCheck",
        kind: ContractKind::Orchestrator,
        action: TaskAction::Read {
            function: "policy",
            label: "Policy",
        },
    },
];

/// Looks a task up by its CLI name.
pub fn find_task(name: &str) -> Result<&'static TaskSpec> {
    TASKS
        .iter()
        .find(|task| task.name == name)
        .ok_or_else(|| Error::UnknownCommand(name.to_string()))
}

/// Validates raw CLI arguments against the task's parameter shape and
/// converts them into ABI values, appending any fixed arguments.
///
/// Pure: performs no file or network I/O.
pub fn convert_args(task: &TaskSpec, raw: &[String]) -> Result<Vec<DynSolValue>> {
    let (params, fixed): (&[ParamKind], &[u64]) = match task.action {
        TaskAction::Submit { params, fixed, .. } => (params, fixed),
        TaskAction::Read { .. } => (&[], &[]),
    };

    if raw.len() != params.len() {
        return Err(Error::Validation {
            task: task.name,
            reason: format!("expected {} argument(s), got {}", params.len(), raw.len()),
        });
    }

    let mut values = Vec::with_capacity(params.len() + fixed.len());
    for (kind, arg) in params.iter().zip(raw) {
        values.push(convert_arg(task.name, *kind, arg)?);
    }
    for literal in fixed {
        values.push(DynSolValue::Uint(U256::from(*literal), 256));
    }
    Ok(values)
}

fn convert_arg(task: &'static str, kind: ParamKind, arg: &str) -> Result<DynSolValue> {
    match kind {
        ParamKind::Address => arg
            .parse::<Address>()
            .map(DynSolValue::Address)
            .map_err(|e| Error::Validation {
                task,
                reason: format!("'{}' is not a valid address: {}", arg, e),
            }),
        ParamKind::Amount => {
            let amount = U256::from_str_radix(arg, 10).map_err(|_| Error::Validation {
                task,
                reason: format!("amount '{}' is not a valid integer", arg),
            })?;
            let units = to_token_units(amount).ok_or_else(|| Error::Validation {
                task,
                reason: format!("amount '{}' overflows when scaled", arg),
            })?;
            Ok(DynSolValue::Uint(units, 256))
        }
        ParamKind::Uint => U256::from_str_radix(arg, 10)
            .map(|value| DynSolValue::Uint(value, 256))
            .map_err(|_| Error::Validation {
                task,
                reason: format!("'{}' is not a valid integer", arg),
            }),
    }
}

/// Result of a completed task
#[derive(Debug)]
pub enum Outcome {
    /// A transaction was signed and accepted by the node
    Submitted { task: &'static str, tx_hash: B256 },
    /// A view call completed
    Read { label: &'static str, value: String },
}

/// Runs one operator task end to end.
pub async fn run(config: &RunConfig, task_name: &str, raw_args: &[String]) -> Result<Outcome> {
    let task = find_task(task_name)?;
    let args = convert_args(task, raw_args)?;

    let secrets = Secrets::load(&config.secrets_path)?;
    let endpoint = secrets.api_endpoint(&config.network)?;

    let provider = ProviderBuilder::new()
        .network::<AnyNetwork>()
        .connect_http(endpoint);

    run_with_provider(config, &secrets, &provider, task, &args).await
}

/// Runs a resolved task against an explicit provider.
///
/// [`run`] wires in an HTTP provider from the secrets file; this entry
/// point takes the provider as a parameter so the network-facing half of
/// the pipeline can be driven over any transport, including a mocked one.
pub async fn run_with_provider<P>(
    config: &RunConfig,
    secrets: &Secrets,
    provider: &P,
    task: &TaskSpec,
    args: &[DynSolValue],
) -> Result<Outcome>
where
    P: Provider<AnyNetwork>,
{
    let contract_address = secrets.contract_address(task.kind, &config.network)?;
    let contract = ContractHandle::load(task.kind, contract_address)?;

    match task.action {
        TaskAction::Read { function, label } => {
            let value = contract.read(provider, function).await?;
            Ok(Outcome::Read {
                label,
                value: format_value(&value),
            })
        }
        TaskAction::Submit { function, .. } => {
            let data = contract.encode(function, args)?;
            let deployer = secrets.deployer_address()?;
            let request =
                tx::build_transaction(provider, deployer, contract.address, data, &config.gas)
                    .await?;
            let signer = submit::derive_signer(secrets.mnemonic()?)?;
            let signed = submit::sign_transaction(&signer, &request, config.network.chain_id())?;
            let tx_hash = submit::submit(provider, &signed).await?;
            Ok(Outcome::Submitted {
                task: task.name,
                tx_hash,
            })
        }
    }
}

fn format_value(value: &DynSolValue) -> String {
    match value {
        DynSolValue::Address(address) => address.to_string(),
        DynSolValue::Uint(v, _) => v.to_string(),
        other => format!("{:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;
    use alloy_json_abi::JsonAbi;

    fn policy_handle() -> ContractHandle {
        let abi: JsonAbi = serde_json::from_str(
            r#"[
                {"type":"function","name":"setRebaseLag","stateMutability":"nonpayable",
                 "inputs":[{"name":"lag","type":"uint256"}],"outputs":[]},
                {"type":"function","name":"setRebaseTimingParameters","stateMutability":"nonpayable",
                 "inputs":[{"name":"minRebaseTimeIntervalSec","type":"uint256"},
                           {"name":"rebaseWindowOffsetSec","type":"uint256"},
                           {"name":"rebaseWindowLengthSec","type":"uint256"}],"outputs":[]}
            ]"#,
        )
        .unwrap();
        ContractHandle::new(address!("2222222222222222222222222222222222222222"), abi)
    }

    #[test]
    fn test_table_covers_all_tasks() {
        let names: Vec<_> = TASKS.iter().map(|t| t.name).collect();
        for expected in [
            "setMonetaryPolicy",
            "approve",
            "transfer",
            "checkTotalSupply",
            "tokenCheck",
            "setOrchestrator",
            "setRebaseLag",
            "setRebaseTimingParameters",
            "policyCheck",
            "rebase",
            "orchCheck",
        ] {
            assert!(names.contains(&expected), "missing task {}", expected);
        }
        assert_eq!(TASKS.len(), 11);
    }

    #[test]
    fn test_unknown_task_is_rejected() {
        let err = find_task("selfDestruct").unwrap_err();
        assert!(matches!(err, Error::UnknownCommand(_)));
    }

    #[test]
    fn test_amount_arguments_are_scaled() {
        let task = find_task("transfer").unwrap();
        let values = convert_args(
            task,
            &[
                "0x00000000000000000000000000000000000000aa".to_string(),
                "5".to_string(),
            ],
        )
        .unwrap();

        assert_eq!(values.len(), 2);
        assert_eq!(values[1], DynSolValue::Uint(U256::from(5_000_000_000u64), 256));
    }

    #[test]
    fn test_amounts_wider_than_u64_are_accepted() {
        // 2^64 whole tokens: does not fit a u64, but is well within uint256
        // even after the 10^9 scale.
        let task = find_task("approve").unwrap();
        let values = convert_args(
            task,
            &[
                "0x00000000000000000000000000000000000000aa".to_string(),
                "18446744073709551616".to_string(),
            ],
        )
        .unwrap();

        let expected = U256::from(2).pow(U256::from(64)) * U256::from(1_000_000_000u64);
        assert_eq!(values[1], DynSolValue::Uint(expected, 256));
    }

    #[test]
    fn test_amount_overflowing_uint256_fails_validation() {
        let task = find_task("transfer").unwrap();
        let err = convert_args(
            task,
            &[
                "0x00000000000000000000000000000000000000aa".to_string(),
                U256::MAX.to_string(),
            ],
        )
        .unwrap_err();

        assert!(matches!(err, Error::Validation { task: "transfer", .. }));
    }

    #[test]
    fn test_price_arguments_are_not_scaled() {
        let task = find_task("rebase").unwrap();
        let values = convert_args(task, &["105".to_string(), "110".to_string()]).unwrap();

        assert_eq!(values[0], DynSolValue::Uint(U256::from(105), 256));
        assert_eq!(values[1], DynSolValue::Uint(U256::from(110), 256));
    }

    #[test]
    fn test_set_rebase_lag_encodes_literal_one() {
        // Fixed arguments are literals: the lag is 1, never 1 x 10^9.
        let task = find_task("setRebaseLag").unwrap();
        let values = convert_args(task, &[]).unwrap();
        assert_eq!(values, vec![DynSolValue::Uint(U256::from(1), 256)]);

        let data = policy_handle().encode("setRebaseLag", &values).unwrap();
        let decoded = policy_handle().decode_input("setRebaseLag", &data).unwrap();
        assert_eq!(decoded, vec![DynSolValue::Uint(U256::from(1), 256)]);
    }

    #[test]
    fn test_set_rebase_timing_parameters_fixed_arguments() {
        let task = find_task("setRebaseTimingParameters").unwrap();
        let values = convert_args(task, &[]).unwrap();
        assert_eq!(
            values,
            vec![
                DynSolValue::Uint(U256::from(300), 256),
                DynSolValue::Uint(U256::from(0), 256),
                DynSolValue::Uint(U256::from(300), 256),
            ]
        );
        assert!(policy_handle()
            .encode("setRebaseTimingParameters", &values)
            .is_ok());
    }

    #[test]
    fn test_non_integer_amount_fails_validation() {
        // Conversion is pure, so a failure here proves no network call
        // could have been made.
        let task = find_task("transfer").unwrap();
        let err = convert_args(
            task,
            &[
                "0x00000000000000000000000000000000000000aa".to_string(),
                "notanumber".to_string(),
            ],
        )
        .unwrap_err();

        assert!(matches!(err, Error::Validation { task: "transfer", .. }));
    }

    #[test]
    fn test_bad_address_fails_validation() {
        let task = find_task("setMonetaryPolicy").unwrap();
        let err = convert_args(task, &["0x1234".to_string()]).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_wrong_argument_count_fails_validation() {
        let task = find_task("rebase").unwrap();
        let err = convert_args(task, &["105".to_string()]).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));

        // Read tasks take no arguments.
        let task = find_task("checkTotalSupply").unwrap();
        let err = convert_args(task, &["extra".to_string()]).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_format_value() {
        let addr = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        assert_eq!(
            format_value(&DynSolValue::Address(addr)),
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
        );
        assert_eq!(
            format_value(&DynSolValue::Uint(U256::from(42), 256)),
            "42"
        );
    }
}
