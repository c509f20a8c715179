//! Implementations of the deploy scripts

use std::sync::Arc;

use ethers::providers::Middleware;
use tracing::info;

use crate::{
    artifacts::load_artifact, cli::DeployArgs, constants::NUM_DEPLOY_CONFIRMATIONS,
    errors::ScriptError, utils::deployer_address,
};

/// Deploys the named contract from its compilation artifact
pub async fn deploy(args: DeployArgs, client: Arc<impl Middleware>) -> Result<(), ScriptError> {
    let deployer = deployer_address(client.as_ref())?;
    println!("Deploying contracts with the account: {:#x}", deployer);

    let artifact = load_artifact(&args.artifacts, &args.contract)?;
    let factory = artifact.factory(client);

    info!("deploying `{}`", args.contract);

    // The payment handler's constructor takes no arguments
    let contract = factory
        .deploy(())
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
        .confirmations(NUM_DEPLOY_CONFIRMATIONS)
        .send()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    println!("Contract Address: {:#x}", contract.address());

    Ok(())
}
