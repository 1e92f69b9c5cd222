use clap::Parser;

#[derive(Parser)]
#[command(name = "rebase-ops")]
#[command(about = "Operator CLI for the rebase token, its policy, and its orchestrator", long_about = None)]
pub struct Cli {
    /// Task to run (e.g. transfer, rebase, checkTotalSupply)
    #[arg(value_name = "TASK")]
    pub task: String,

    /// Target network (testnet or mainnet)
    #[arg(value_name = "NETWORK")]
    pub network: String,

    /// Task-specific arguments (addresses as hex strings, amounts and prices
    /// as base-10 integers)
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,

    /// Path to the secrets file
    #[arg(long, env = "REBASE_OPS_SECRETS", default_value = "secrets.json")]
    pub secrets: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
