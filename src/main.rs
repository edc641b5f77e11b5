use url_minimizer::{config, server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::load_config_files()?;

    let config = config::load_from_env()?;
    telemetry::init_tracing(&config)?;
    config.print_summary();

    server::run(config).await
}
