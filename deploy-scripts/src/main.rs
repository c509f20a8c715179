use clap::Parser;
use deploy_scripts::{
    cli::Cli,
    errors::ScriptError,
    utils::{select_deployer_key, setup_client},
};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli {
        priv_keys,
        rpc_url,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    let priv_key = select_deployer_key(&priv_keys)?;
    let client = setup_client(priv_key, &rpc_url).await?;

    command.run(client).await
}
