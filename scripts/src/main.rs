//! Entrypoint for the contract management scripts

use clap::Parser;
use scripts::{
    cli::{Cli, ScriptContext},
    errors::ScriptError,
    network::load_profile,
    utils::setup_client,
};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli {
        network,
        config,
        priv_key,
        rpc_url,
        artifacts_dir,
        deployments_path,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    let profile = load_profile(config.as_deref(), &network)?;

    let rpc_url = rpc_url.unwrap_or_else(|| profile.rpc_url.clone());
    let priv_key = priv_key
        .or_else(|| profile.priv_key.clone())
        .ok_or_else(|| {
            ScriptError::NetworkConfig(format!(
                "no deployer private key configured for network `{network}`"
            ))
        })?;

    let client = setup_client(&priv_key, &rpc_url).await?;

    let ctx = ScriptContext {
        artifacts_dir,
        deployments_path,
        profile,
    };

    command.run(client, &ctx).await
}
