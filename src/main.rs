use anyhow::Context;
use log::info;
use rsbroker::{Broker, ServerConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::default();
    let broker = Broker::bind(config.clone())
        .await
        .with_context(|| format!("failed to listen on {}", config.listen_addr()))?;
    info!("rsbroker listening on {}", broker.local_addr()?);

    broker.run().await?;

    Ok(())
}
