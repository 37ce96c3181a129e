mod app;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use coinswap::application::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: CLI args > Config file > Defaults
    let app_cfg = app::AppCfg::load(cli.config.as_deref())?.with_overrides(cli.state);

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&app_cfg.config.logging.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    app::run(app_cfg, cli.command).await
}
