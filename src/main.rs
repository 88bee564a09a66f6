use anyhow::Result;
use clap::Parser;
use hourly_spark::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    hourly_spark::run(cli).await
}
