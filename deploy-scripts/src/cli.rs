//! Definitions of CLI arguments and commands for deploy scripts

use std::{path::PathBuf, sync::Arc};

use clap::{Args, Parser, Subcommand};
use ethers::providers::Middleware;

use crate::{
    commands::deploy,
    constants::{DEFAULT_ARTIFACTS_DIR, DEFAULT_CONTRACT_NAME},
    errors::ScriptError,
};

/// Deploys the VNY payment handler contract
#[derive(Parser)]
pub struct Cli {
    /// Private keys of the accounts available to the deploy scripts.
    ///
    /// The first configured key is used as the deployer.
    // TODO: Better key management
    #[arg(short, long, env = "DEPLOY_PRIV_KEYS", value_delimiter = ',')]
    pub priv_keys: Vec<String>,

    /// Network RPC URL
    #[arg(short, long, env = "DEPLOY_RPC_URL")]
    pub rpc_url: String,

    /// The deploy script to run
    #[command(subcommand)]
    pub command: Command,
}

/// The deploy scripts available to the CLI
#[derive(Subcommand)]
pub enum Command {
    /// Deploy a contract from its compilation artifact
    Deploy(DeployArgs),
}

impl Command {
    /// Run the command using the given RPC client
    pub async fn run(self, client: Arc<impl Middleware>) -> Result<(), ScriptError> {
        match self {
            Command::Deploy(args) => deploy(args, client).await,
        }
    }
}

/// Deploy a contract from its compilation artifact.
///
/// The artifact is resolved by contract name from the artifacts directory
/// and must contain the contract's ABI and creation bytecode.
#[derive(Args)]
pub struct DeployArgs {
    /// Name of the contract to deploy
    #[arg(short, long, default_value = DEFAULT_CONTRACT_NAME)]
    pub contract: String,

    /// Directory containing contract compilation artifacts
    #[arg(short, long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts: PathBuf,
}
